//! Audio file output for ft8gen.
//!
//! This crate provides:
//!
//! - **WAV file I/O**: [`read_wav`] and [`write_wav`] for loading/saving mono audio
//! - **Writer seam**: the [`AudioFileWriter`] trait and its WAV implementation
//!   [`WavFileWriter`], which the transmit pipeline writes through
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ft8gen_io::{AudioFileWriter, WavFileWriter};
//!
//! let samples = vec![0.0f32; 12000];
//! WavFileWriter::default().write_audio("silence.wav".as_ref(), &samples, 12000)?;
//! # Ok::<(), ft8gen_io::Error>(())
//! ```

mod wav;
mod writer;

pub use wav::{WavFormat, WavSpec, read_wav, write_wav};
pub use writer::{AudioFileWriter, WavFileWriter};

/// Error types for audio file output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// The requested bit depth has no WAV encoding here.
    #[error("Unsupported bit depth: {0}")]
    UnsupportedBitDepth(u16),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for audio file operations.
pub type Result<T> = std::result::Result<T, Error>;
