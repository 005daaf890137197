//! Benchmarks for low-level DSP primitives.

mod filter;
mod midi;
mod oscillator;
mod wavetable;

pub use filter::bench_filter;
pub use midi::bench_midi;
pub use oscillator::bench_oscillator;
pub use wavetable::bench_wavetable;
