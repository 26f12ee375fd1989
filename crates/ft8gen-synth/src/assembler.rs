//! Fixed-length clip assembly.
//!
//! A clip is leading silence, the tone burst, then trailing silence of the
//! same length. Silence is `(clip_len - burst_len) / 2` with truncating
//! division, so when the difference is odd the buffer comes out one sample
//! shorter than the nominal clip; the missing sample is the last one of the
//! clip.

use crate::{SynthParams, synth_fsk};
use alloc::vec;
use alloc::vec::Vec;
use core::ops::Range;

/// Silence and burst lengths of an assembled clip, in samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipLayout {
    /// Length of each silence segment
    pub silence: usize,
    /// Length of the tone burst
    pub burst: usize,
}

impl ClipLayout {
    /// Total buffer length: silence, burst, silence.
    pub fn total_len(&self) -> usize {
        2 * self.silence + self.burst
    }

    /// Sample range occupied by the tone burst.
    pub fn burst_range(&self) -> Range<usize> {
        self.silence..self.silence + self.burst
    }
}

/// Builds silence-padded clips around FSK tone bursts.
///
/// # Example
///
/// ```rust
/// use ft8gen_synth::{SignalAssembler, SynthParams};
///
/// let assembler = SignalAssembler::new(SynthParams::FT8, 1.0);
/// let signal = assembler.assemble(&[0, 1]);
///
/// // 12000 - 3840 = 8160 samples of silence, split evenly
/// assert_eq!(signal.layout().silence, 4080);
/// assert_eq!(signal.len(), 12000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalAssembler {
    params: SynthParams,
    clip_seconds: f64,
}

impl Default for SignalAssembler {
    fn default() -> Self {
        Self::FT8
    }
}

impl SignalAssembler {
    /// FT8 parameters in a 15 second slot.
    pub const FT8: Self = Self {
        params: SynthParams::FT8,
        clip_seconds: 15.0,
    };

    /// Create an assembler for clips of `clip_seconds`.
    pub const fn new(params: SynthParams, clip_seconds: f64) -> Self {
        Self {
            params,
            clip_seconds,
        }
    }

    /// Synthesis parameters.
    pub fn params(&self) -> &SynthParams {
        &self.params
    }

    /// Nominal clip duration in seconds.
    pub fn clip_seconds(&self) -> f64 {
        self.clip_seconds
    }

    /// Nominal clip length in samples.
    pub fn clip_len(&self) -> usize {
        libm::round(self.clip_seconds * self.params.sample_rate) as usize
    }

    /// Layout of a clip carrying `num_symbols` symbols.
    ///
    /// A burst longer than the clip gets no silence at all; the buffer then
    /// holds the whole burst and exceeds the nominal length.
    pub fn layout(&self, num_symbols: usize) -> ClipLayout {
        let burst = self.params.burst_len(num_symbols);
        let clip = self.clip_len();

        #[cfg(feature = "tracing")]
        if burst > clip {
            tracing::warn!(burst, clip, "tone burst longer than clip, no silence added");
        }

        ClipLayout {
            silence: clip.saturating_sub(burst) / 2,
            burst,
        }
    }

    /// Allocate a zeroed clip and synthesize `symbols` into its middle.
    pub fn assemble(&self, symbols: &[u8]) -> AssembledSignal {
        let layout = self.layout(symbols.len());
        let mut samples = vec![0.0f32; layout.total_len()];

        let written = synth_fsk(symbols, &self.params, &mut samples[layout.burst_range()]);
        debug_assert_eq!(written, layout.burst);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            symbols = symbols.len(),
            silence = layout.silence,
            burst = layout.burst,
            "assembled clip"
        );

        AssembledSignal {
            samples,
            layout,
            sample_rate: self.params.sample_rate,
        }
    }
}

/// A finished clip: silence, tone burst, silence.
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledSignal {
    samples: Vec<f32>,
    layout: ClipLayout,
    sample_rate: f64,
}

impl AssembledSignal {
    /// All samples of the clip.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Take ownership of the sample buffer.
    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }

    /// Clip length in samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if the clip holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Silence and burst lengths.
    pub fn layout(&self) -> ClipLayout {
        self.layout
    }

    /// Sample range of the tone burst.
    pub fn burst_range(&self) -> Range<usize> {
        self.layout.burst_range()
    }

    /// Length of the leading silence, equal to the trailing one.
    pub fn silence_len(&self) -> usize {
        self.layout.silence
    }

    /// The tone burst alone.
    pub fn burst(&self) -> &[f32] {
        &self.samples[self.layout.burst_range()]
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Clip duration in seconds.
    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ft8_layout() {
        let layout = SignalAssembler::FT8.layout(79);
        assert_eq!(layout.burst, 151_680);
        assert_eq!(layout.silence, 14_160);
        assert_eq!(layout.total_len(), 180_000);
    }

    #[test]
    fn odd_leftover_shortens_clip_by_one() {
        // 12000 - 1715 = 10285, odd
        let params = SynthParams::new(1000.0, 7.0, 7.0, 12000.0);
        let assembler = SignalAssembler::new(params, 1.0);
        let layout = assembler.layout(1);

        assert_eq!(layout.burst, 1715);
        assert_eq!(layout.silence, 5142);
        assert_eq!(layout.total_len(), assembler.clip_len() - 1);
    }

    #[test]
    fn oversized_burst_gets_no_silence() {
        let assembler = SignalAssembler::new(SynthParams::FT8, 1.0);
        let signal = assembler.assemble(&[0u8; 10]);

        assert_eq!(signal.silence_len(), 0);
        assert_eq!(signal.len(), 19_200);
        assert_eq!(signal.burst_range(), 0..19_200);
    }

    #[test]
    fn silence_is_zero_and_burst_is_not() {
        let signal = SignalAssembler::FT8.assemble(&[4u8; 79]);
        let range = signal.burst_range();

        assert!(signal.samples()[..range.start].iter().all(|&s| s == 0.0));
        assert!(signal.samples()[range.end..].iter().all(|&s| s == 0.0));
        assert!(signal.burst().iter().any(|&s| s != 0.0));
    }

    #[test]
    fn empty_sequence_is_all_silence() {
        let signal = SignalAssembler::FT8.assemble(&[]);
        assert_eq!(signal.len(), 180_000);
        assert!(signal.burst().is_empty());
        assert!(signal.samples().iter().all(|&s| s == 0.0));
    }

    #[test]
    fn duration_matches_clip() {
        let signal = SignalAssembler::FT8.assemble(&[0u8; 79]);
        assert!((signal.duration() - 15.0).abs() < 1e-12);
        assert_eq!(signal.sample_rate(), 12000.0);
    }
}
