//! Benchmarks for wavetable loading and the morphing sampler.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use morph_dsp::bank::{default_bank, FACTORY_WAVETABLES};
use morph_dsp::dsp::wavetable::Wavetable;

use crate::BLOCK_SIZES;

pub fn bench_wavetable(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/wavetable");

    let bank = default_bank();

    group.bench_function("load", |b| {
        b.iter(|| Wavetable::load(black_box(&bank), black_box(FACTORY_WAVETABLES)))
    });

    let (table, _) = Wavetable::load(&bank, FACTORY_WAVETABLES);
    for &size in BLOCK_SIZES {
        group.bench_with_input(BenchmarkId::new("sample", size), &size, |b, _| {
            b.iter(|| {
                let mut phase = 0u16;
                let mut acc = 0u32;
                for _ in 0..size {
                    acc += table.sample(black_box(30), phase) as u32;
                    phase = phase.wrapping_add(1442);
                }
                acc
            })
        });
    }

    group.finish();
}
