//! Benchmarks for the one-pole filter cascade.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use morph_dsp::dsp::filter::FilterCascade;

use crate::BLOCK_SIZES;

pub fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/filter");

    for &size in BLOCK_SIZES {
        // Signed ramp input, the worst case for the saturating adds.
        let input: Vec<i8> = (0..size).map(|i| (i % 255) as i8).collect();

        let mut cascade = FilterCascade::new();
        group.bench_with_input(BenchmarkId::new("cascade", size), &size, |b, _| {
            b.iter(|| {
                let mut acc = 0i32;
                for &x in &input {
                    acc += cascade.feed(black_box(95), x) as i32;
                }
                acc
            })
        });
    }

    group.finish();
}
