//! Criterion benchmarks for ft8gen-synth components
//!
//! Run with: cargo bench -p ft8gen-synth

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use ft8gen_synth::{FskSynthesizer, SignalAssembler, SynthParams};

const BLOCK_SIZES: &[usize] = &[64, 256, 1024, 1920];

fn ft8_symbols() -> Vec<u8> {
    (0..79).map(|i| ((i * 7 + 3) % 8) as u8).collect()
}

fn bench_synthesizer_blocks(c: &mut Criterion) {
    let mut group = c.benchmark_group("FskSynthesizer");
    let symbols = ft8_symbols();

    for &block_size in BLOCK_SIZES {
        group.bench_with_input(
            BenchmarkId::new("render", block_size),
            &block_size,
            |b, &size| {
                let mut out = vec![0.0f32; size];
                b.iter(|| {
                    let mut synth = FskSynthesizer::new(&symbols, SynthParams::FT8);
                    black_box(synth.render(&mut out))
                })
            },
        );
    }

    group.finish();
}

fn bench_full_clip(c: &mut Criterion) {
    let symbols = ft8_symbols();
    c.bench_function("SignalAssembler/ft8_clip", |b| {
        b.iter(|| black_box(SignalAssembler::FT8.assemble(black_box(&symbols))))
    });
}

criterion_group!(benches, bench_synthesizer_blocks, bench_full_clip);
criterion_main!(benches);
