//! The file writer seam used by the transmit pipeline.

use crate::{Result, WavSpec, write_wav};
use std::path::Path;

/// Persists a mono sample buffer to a file.
pub trait AudioFileWriter {
    /// Write `samples` at `sample_rate` to `path`, replacing any existing file.
    fn write_audio(&self, path: &Path, samples: &[f32], sample_rate: u32) -> Result<()>;
}

/// Mono WAV writer.
///
/// Defaults to 16-bit PCM; [`float`](Self::float) selects 32-bit float.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFileWriter {
    bits_per_sample: u16,
}

impl Default for WavFileWriter {
    fn default() -> Self {
        Self::pcm16()
    }
}

impl WavFileWriter {
    /// 16-bit PCM output.
    pub fn pcm16() -> Self {
        Self { bits_per_sample: 16 }
    }

    /// 32-bit IEEE float output.
    pub fn float() -> Self {
        Self { bits_per_sample: 32 }
    }

    /// Bit depth written.
    pub fn bits_per_sample(&self) -> u16 {
        self.bits_per_sample
    }
}

impl AudioFileWriter for WavFileWriter {
    fn write_audio(&self, path: &Path, samples: &[f32], sample_rate: u32) -> Result<()> {
        let spec = WavSpec {
            channels: 1,
            sample_rate,
            bits_per_sample: self.bits_per_sample,
        };
        write_wav(path, samples, spec)?;

        tracing::info!(
            path = %path.display(),
            samples = samples.len(),
            sample_rate,
            bits = self.bits_per_sample,
            "wrote WAV file"
        );
        Ok(())
    }
}
