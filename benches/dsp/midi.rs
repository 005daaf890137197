//! Benchmarks for the MIDI byte-stream decoder.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use morph_dsp::io::midi::MidiDecoder;

use crate::BLOCK_SIZES;

pub fn bench_midi(c: &mut Criterion) {
    let mut group = c.benchmark_group("io/midi");

    for &size in BLOCK_SIZES {
        // A stream of note-on pairs with running status, the common case
        // from a keyboard.
        let mut stream = vec![0x90u8];
        for i in 0..size {
            stream.push(60 + (i % 12) as u8);
            stream.push(100);
        }

        let mut midi = MidiDecoder::new();
        group.bench_with_input(BenchmarkId::new("note_stream", size), &size, |b, _| {
            b.iter(|| {
                for &byte in &stream {
                    midi.process(black_box(byte), 0);
                }
                midi.note()
            })
        });
    }

    group.finish();
}
