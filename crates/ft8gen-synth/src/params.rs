//! Frequency and timing parameters for FSK synthesis.

use core::f64::consts::TAU;

/// Fixed configuration for one synthesis run.
///
/// Tone `k` sounds at `base_freq + k * tone_spacing`. The sample rate must
/// not be lower than the symbol rate.
///
/// # Example
///
/// ```rust
/// use ft8gen_synth::SynthParams;
///
/// let params = SynthParams::FT8;
/// assert_eq!(params.tone_frequency(1), 1006.25);
/// assert_eq!(params.burst_len(79), 151_680);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthParams {
    /// Frequency of tone 0 in Hz
    pub base_freq: f64,
    /// Distance between adjacent tones in Hz
    pub tone_spacing: f64,
    /// Symbols per second
    pub symbol_rate: f64,
    /// Samples per second
    pub sample_rate: f64,
}

impl Default for SynthParams {
    fn default() -> Self {
        Self::FT8
    }
}

impl SynthParams {
    /// FT8 at a 1000 Hz audio offset: 6.25 Hz spacing, 6.25 baud, 12 kHz audio.
    pub const FT8: Self = Self {
        base_freq: 1000.0,
        tone_spacing: 6.25,
        symbol_rate: 6.25,
        sample_rate: 12000.0,
    };

    /// Create a parameter set.
    pub const fn new(
        base_freq: f64,
        tone_spacing: f64,
        symbol_rate: f64,
        sample_rate: f64,
    ) -> Self {
        Self {
            base_freq,
            tone_spacing,
            symbol_rate,
            sample_rate,
        }
    }

    /// Frequency in Hz of the given tone index.
    #[inline]
    pub fn tone_frequency(&self, symbol: u8) -> f64 {
        self.base_freq + f64::from(symbol) * self.tone_spacing
    }

    /// Phase advance per sample, in radians, while `symbol` is active.
    #[inline]
    pub fn phase_increment(&self, symbol: u8) -> f64 {
        TAU * self.tone_frequency(symbol) / self.sample_rate
    }

    /// Nominal samples per symbol. Not necessarily an integer.
    pub fn samples_per_symbol(&self) -> f64 {
        self.sample_rate / self.symbol_rate
    }

    /// Number of samples [`FskSynthesizer`](crate::FskSynthesizer) emits for
    /// `num_symbols` symbols: `ceil(num_symbols * sample_rate / symbol_rate)`.
    ///
    /// A product within a relative 1e-9 of an integer is taken as that
    /// integer, so float noise on an exact product never adds a sample.
    pub fn burst_len(&self, num_symbols: usize) -> usize {
        if num_symbols == 0 {
            return 0;
        }
        let exact = num_symbols as f64 * self.samples_per_symbol();
        let nearest = libm::round(exact);
        if libm::fabs(exact - nearest) <= exact * 1e-9 {
            nearest as usize
        } else {
            libm::ceil(exact) as usize
        }
    }

    /// Duration in seconds of `num_symbols` symbols.
    pub fn burst_duration(&self, num_symbols: usize) -> f64 {
        num_symbols as f64 / self.symbol_rate
    }
}
