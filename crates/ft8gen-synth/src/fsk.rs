//! Continuous-phase FSK synthesis.
//!
//! Each symbol selects one of a set of evenly spaced tones. The phase
//! accumulator runs straight through symbol boundaries, so a change of symbol
//! is a step in frequency only, never a jump in phase. That is what keeps the
//! burst free of clicks and its spectrum compact.
//!
//! Symbol timing counts emitted samples against absolute boundaries rather
//! than a fixed sample count per symbol. Symbol `j` ends at sample
//! [`SynthParams::burst_len`]`(j + 1)`, so rates whose ratio is not an integer
//! still land every boundary on the right sample with no drift over long
//! bursts.

use crate::SynthParams;
use core::f64::consts::TAU;
use libm::{floor, sin};

/// Euclidean remainder for f64, compatible with no_std.
#[inline]
fn rem_euclid_f64(a: f64, b: f64) -> f64 {
    let r = a - b * floor(a / b);
    if r < 0.0 { r + b } else { r }
}

/// Sample-by-sample continuous-phase FSK generator.
///
/// Borrows the symbol sequence and yields one sample per call to
/// [`advance`](Self::advance) until every symbol has been played. Starts at
/// phase 0 and emits `sin(φ)` after each phase step, so the first sample is
/// `sin(2π·f/Rs)` rather than zero.
///
/// # Example
///
/// ```rust
/// use ft8gen_synth::{FskSynthesizer, SynthParams};
///
/// let symbols = [3u8, 1, 4];
/// let mut synth = FskSynthesizer::new(&symbols, SynthParams::FT8);
///
/// let mut out = vec![0.0f32; 3 * 1920];
/// let written = synth.render(&mut out);
///
/// assert_eq!(written, 3 * 1920);
/// assert!(synth.is_finished());
/// ```
#[derive(Debug, Clone)]
pub struct FskSynthesizer<'a> {
    symbols: &'a [u8],
    params: SynthParams,
    /// Accumulated phase in radians, kept in [0, 2π)
    phase: f64,
    /// Samples emitted so far
    emitted: usize,
    /// Sample count at which the active symbol ends
    boundary: usize,
    /// Index of the active symbol
    index: usize,
}

impl<'a> FskSynthesizer<'a> {
    /// Create a synthesizer over `symbols` with fresh phase and timing.
    pub fn new(symbols: &'a [u8], params: SynthParams) -> Self {
        Self {
            symbols,
            params,
            phase: 0.0,
            emitted: 0,
            boundary: params.burst_len(1),
            index: 0,
        }
    }

    /// Synthesis parameters.
    pub fn params(&self) -> &SynthParams {
        &self.params
    }

    /// Current phase in radians, in [0, 2π).
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Index of the symbol the next sample belongs to.
    pub fn symbol_index(&self) -> usize {
        self.index
    }

    /// True once every symbol has been played.
    pub fn is_finished(&self) -> bool {
        self.index >= self.symbols.len()
    }

    /// Total samples a full run emits.
    pub fn total_len(&self) -> usize {
        self.params.burst_len(self.symbols.len())
    }

    /// Rewind to the first symbol with phase 0.
    pub fn reset(&mut self) {
        self.phase = 0.0;
        self.emitted = 0;
        self.boundary = self.params.burst_len(1);
        self.index = 0;
    }

    /// Generate the next sample, or `None` once all symbols are consumed.
    #[inline]
    pub fn advance(&mut self) -> Option<f32> {
        let &symbol = self.symbols.get(self.index)?;

        self.phase = rem_euclid_f64(self.phase + self.params.phase_increment(symbol), TAU);
        let sample = sin(self.phase) as f32;

        self.emitted += 1;
        // Symbols shorter than one sample are skipped.
        while self.emitted >= self.boundary && self.index < self.symbols.len() {
            self.index += 1;
            self.boundary = self.params.burst_len(self.index + 1);
        }

        Some(sample)
    }

    /// Fill `out` from the front and return how many samples were written.
    ///
    /// Stops early when the symbols run out; never writes past `out`.
    pub fn render(&mut self, out: &mut [f32]) -> usize {
        let mut written = 0;
        for slot in out.iter_mut() {
            match self.advance() {
                Some(sample) => *slot = sample,
                None => break,
            }
            written += 1;
        }
        written
    }
}

impl Iterator for FskSynthesizer<'_> {
    type Item = f32;

    #[inline]
    fn next(&mut self) -> Option<f32> {
        self.advance()
    }
}

/// Synthesize `symbols` into the front of `out`, starting from phase 0.
///
/// Returns the number of samples written, which is
/// [`SynthParams::burst_len`] when `out` is large enough.
pub fn synth_fsk(symbols: &[u8], params: &SynthParams, out: &mut [f32]) -> usize {
    FskSynthesizer::new(symbols, *params).render(out)
}
