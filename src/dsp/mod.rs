//! Low-level fixed-point DSP primitives used by the voice layer.
//!
//! These components are allocation-free and realtime-safe, making them safe
//! to run inside a sample-clock interrupt with a hard per-sample budget.
//! Everything here is integer-only: the arithmetic is 8/16-bit fixed point
//! with explicit saturation, so the same code runs on targets without a
//! floating point unit.

/// Named Q8 fixed-point helpers.
pub mod fixed;
/// Saturating integrator and the one-pole filter cascade.
pub mod filter;
/// Phase-accumulating oscillator (DDS).
pub mod oscillator;
/// Read-only 64-sample waveform buffers with mirrored lookup.
pub mod waveform;
/// Wavetable descriptor loader and morphing sampler.
pub mod wavetable;
