pub mod bank;
pub mod dsp;
pub mod hal; // Capability traits over device peripherals
pub mod io;
pub mod runtime; // Sample-clock driver executing the per-tick pipeline
pub mod synth; // Monophonic voice and integer tuning

/// Sample rate of the reference hardware, in Hz.
pub const SAMPLE_RATE: u32 = 20_000;

/// Idle output level: the center of the unsigned 8-bit sample range.
pub const CENTER_SAMPLE: u8 = 127;
