//! Property-based tests for FSK synthesis.
//!
//! Uses proptest to check that the sample count depends only on the number
//! of symbols and the rates, including rates with no exact binary form, and
//! that output stays finite and bounded.

use ft8gen_synth::{FskSynthesizer, SignalAssembler, SynthParams};
use proptest::prelude::*;

/// Symbol rates whose products with the sample rates are exact in binary
/// floating point.
const SYMBOL_RATES: [f64; 5] = [3.125, 6.25, 7.0, 10.0, 12.5];
/// Symbol rates with no exact binary representation.
const INEXACT_RATES: [f64; 6] = [1.1, 2.2, 3.3, 4.4, 6.7, 9.9];
const SAMPLE_RATES: [f64; 4] = [8000.0, 12000.0, 44100.0, 48000.0];

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// The burst length never depends on which tones are sent.
    #[test]
    fn sample_count_ignores_symbol_values(
        symbols in prop::collection::vec(0u8..8, 0..100),
    ) {
        let params = SynthParams::FT8;
        let count = FskSynthesizer::new(&symbols, params).count();
        prop_assert_eq!(count, symbols.len() * 1920);
        prop_assert_eq!(count, params.burst_len(symbols.len()));
    }

    /// With non-integral samples per symbol the count is still the ceiling.
    #[test]
    fn sample_count_is_ceiling_for_any_rates(
        num_symbols in 0usize..40,
        rate_idx in 0usize..SYMBOL_RATES.len(),
        sr_idx in 0usize..SAMPLE_RATES.len(),
    ) {
        let symbol_rate = SYMBOL_RATES[rate_idx];
        let sample_rate = SAMPLE_RATES[sr_idx];
        let params = SynthParams::new(1000.0, symbol_rate, symbol_rate, sample_rate);

        let symbols = vec![0u8; num_symbols];
        let count = FskSynthesizer::new(&symbols, params).count();

        let expected = (num_symbols as f64 * sample_rate / symbol_rate).ceil() as usize;
        prop_assert_eq!(count, expected);
        prop_assert_eq!(count, params.burst_len(num_symbols));
    }

    /// Rates with no exact binary form still emit exactly `burst_len` samples.
    #[test]
    fn sample_count_matches_burst_len_for_inexact_rates(
        num_symbols in 0usize..8,
        rate_idx in 0usize..INEXACT_RATES.len(),
        sr_idx in 0usize..SAMPLE_RATES.len(),
    ) {
        let symbol_rate = INEXACT_RATES[rate_idx];
        let params = SynthParams::new(1000.0, 6.25, symbol_rate, SAMPLE_RATES[sr_idx]);
        let symbols = vec![3u8; num_symbols];

        let count = FskSynthesizer::new(&symbols, params).count();
        prop_assert_eq!(count, params.burst_len(num_symbols));

        let exact = num_symbols as f64 * params.samples_per_symbol();
        prop_assert!((count as f64 - exact).abs() < 1.0);
    }

    /// Every sample is finite and within [-1, 1].
    #[test]
    fn output_is_finite_and_bounded(
        symbols in prop::collection::vec(0u8..8, 1..12),
        base in 200.0f64..3000.0,
    ) {
        let params = SynthParams::new(base, 6.25, 6.25, 12000.0);
        for sample in FskSynthesizer::new(&symbols, params) {
            prop_assert!(sample.is_finite());
            prop_assert!((-1.0..=1.0).contains(&sample));
        }
    }

    /// Silence is split evenly and the burst fills the rest.
    #[test]
    fn clip_silence_is_even(num_symbols in 0usize..=79) {
        let signal = SignalAssembler::FT8.assemble(&vec![0u8; num_symbols]);
        let layout = signal.layout();
        let trailing = signal.len() - signal.burst_range().end;

        prop_assert_eq!(layout.silence, trailing);
        prop_assert!(SignalAssembler::FT8.clip_len() - signal.len() <= 1);
    }
}
