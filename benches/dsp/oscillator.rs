//! Benchmarks for the DDS phase accumulator.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use morph_dsp::dsp::oscillator::Oscillator;

use crate::BLOCK_SIZES;

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");

    for &size in BLOCK_SIZES {
        let mut osc = Oscillator::new();
        osc.set_frequency_chz(44_000, 20_000);

        group.bench_with_input(BenchmarkId::new("advance", size), &size, |b, _| {
            b.iter(|| {
                for _ in 0..size {
                    osc.advance();
                }
                black_box(osc.phase())
            })
        });
    }

    group.finish();
}
