//! Integration tests for ft8gen-synth.
//!
//! Tests cover burst placement inside the 15 s clip, spectral content of the
//! synthesized tones, phase continuity across symbol boundaries, and
//! repeatability.

use ft8gen_synth::{FskSynthesizer, SignalAssembler, SynthParams, synth_fsk};
use rustfft::{FftPlanner, num_complex::Complex};
use std::f64::consts::TAU;

const FT8: SynthParams = SynthParams::FT8;

/// Index of the strongest positive-frequency FFT bin.
fn peak_bin(samples: &[f32]) -> usize {
    let mut buffer: Vec<Complex<f32>> = samples.iter().map(|&x| Complex::new(x, 0.0)).collect();
    let mut planner = FftPlanner::new();
    planner.plan_fft_forward(buffer.len()).process(&mut buffer);

    buffer[..buffer.len() / 2]
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.norm().total_cmp(&b.1.norm()))
        .map(|(i, _)| i)
        .unwrap()
}

fn bin_to_hz(bin: usize, len: usize, sample_rate: f64) -> f64 {
    bin as f64 * sample_rate / len as f64
}

// ---------------------------------------------------------------------------
// Clip layout
// ---------------------------------------------------------------------------

#[test]
fn ft8_clip_is_180000_samples_with_symmetric_silence() {
    let symbols = [3u8; 79];
    let signal = SignalAssembler::FT8.assemble(&symbols);

    assert_eq!(signal.len(), 180_000);

    let range = signal.burst_range();
    let leading = range.start;
    let trailing = signal.len() - range.end;
    assert!(leading.abs_diff(trailing) <= 1);
    assert_eq!(leading, 14_160);

    assert!(signal.samples()[..range.start].iter().all(|&s| s == 0.0));
    assert!(signal.samples()[range.end..].iter().all(|&s| s == 0.0));
}

#[test]
fn burst_in_clip_matches_standalone_synthesis() {
    let symbols: Vec<u8> = (0..79).map(|i| (i * 5 % 8) as u8).collect();
    let signal = SignalAssembler::FT8.assemble(&symbols);

    let mut standalone = vec![0.0f32; FT8.burst_len(symbols.len())];
    synth_fsk(&symbols, &FT8, &mut standalone);

    assert_eq!(signal.burst(), standalone.as_slice());
}

// ---------------------------------------------------------------------------
// Spectral content
// ---------------------------------------------------------------------------

#[test]
fn all_zero_symbols_give_pure_base_tone() {
    let symbols = [0u8; 79];
    let samples: Vec<f32> = FskSynthesizer::new(&symbols, FT8).collect();
    assert_eq!(samples.len(), 151_680);

    let peak = bin_to_hz(peak_bin(&samples), samples.len(), FT8.sample_rate);
    let resolution = FT8.sample_rate / samples.len() as f64;
    assert!(
        (peak - 1000.0).abs() <= resolution,
        "peak at {peak} Hz, expected 1000 Hz"
    );
}

#[test]
fn each_tone_peaks_at_its_frequency() {
    for tone in 0u8..8 {
        let symbols = [tone; 4];
        let samples: Vec<f32> = FskSynthesizer::new(&symbols, FT8).collect();

        let peak = bin_to_hz(peak_bin(&samples), samples.len(), FT8.sample_rate);
        let expected = FT8.tone_frequency(tone);
        assert!(
            (peak - expected).abs() < 1.0,
            "tone {tone}: peak at {peak} Hz, expected {expected} Hz"
        );
    }
}

#[test]
fn frequency_steps_at_symbol_boundary() {
    let samples: Vec<f32> = FskSynthesizer::new(&[0, 1], FT8).collect();
    assert_eq!(samples.len(), 3840);

    let (first, second) = samples.split_at(1920);
    // 1920-point FFT at 12 kHz has 6.25 Hz bins
    assert_eq!(peak_bin(first), 160, "first symbol should sit at 1000 Hz");
    assert_eq!(peak_bin(second), 161, "second symbol should sit at 1006.25 Hz");

    // No jump at the boundary beyond what one sample of the faster tone allows
    let max_step = 2.0 * (std::f64::consts::PI * FT8.tone_frequency(1) / FT8.sample_rate).sin();
    let boundary_step = f64::from((samples[1920] - samples[1919]).abs());
    assert!(
        boundary_step <= max_step + 1e-6,
        "boundary step {boundary_step} exceeds {max_step}"
    );
}

// ---------------------------------------------------------------------------
// Phase continuity
// ---------------------------------------------------------------------------

#[test]
fn samples_follow_unbroken_phase_sum() {
    let symbols = [3u8, 1, 4, 0, 6, 5, 2, 7, 7, 0];
    let samples: Vec<f32> = FskSynthesizer::new(&symbols, FT8).collect();

    let spsym = FT8.samples_per_symbol() as usize;
    let mut phase = 0.0f64;
    for (i, &sample) in samples.iter().enumerate() {
        phase += TAU * FT8.tone_frequency(symbols[i / spsym]) / FT8.sample_rate;
        let expected = phase.sin() as f32;
        assert!(
            (sample - expected).abs() < 1e-4,
            "sample {i}: {sample} vs {expected}"
        );
    }
}

#[test]
fn no_sample_jump_exceeds_one_tone_step() {
    let symbols: Vec<u8> = (0..79).map(|i| ((i * 3 + 1) % 8) as u8).collect();
    let samples: Vec<f32> = FskSynthesizer::new(&symbols, FT8).collect();

    let max_step = 2.0 * (std::f64::consts::PI * FT8.tone_frequency(7) / FT8.sample_rate).sin();
    for pair in samples.windows(2) {
        let step = f64::from((pair[1] - pair[0]).abs());
        assert!(step <= max_step + 1e-6, "step {step} exceeds {max_step}");
    }
}

// ---------------------------------------------------------------------------
// Repeatability
// ---------------------------------------------------------------------------

#[test]
fn assembling_twice_is_bit_identical() {
    let symbols: Vec<u8> = (0..79).map(|i| (i % 8) as u8).collect();
    let a = SignalAssembler::FT8.assemble(&symbols);
    let b = SignalAssembler::FT8.assemble(&symbols);

    let bits_a: Vec<u32> = a.samples().iter().map(|s| s.to_bits()).collect();
    let bits_b: Vec<u32> = b.samples().iter().map(|s| s.to_bits()).collect();
    assert_eq!(bits_a, bits_b);
}
