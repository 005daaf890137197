//! Firmware-resident waveform data.
//!
//! The shapes are generated at compile time with integer-only `const fn`s,
//! standing in for the ROM dump a production build would link. Each entry
//! stores the direct half of a symmetric period; see
//! [`crate::dsp::waveform::sample_by_phase`] for the reconstruction.

use crate::dsp::waveform::{Waveform, WaveformBank, WAVEFORM_LEN};

/// Parabolic approximation of the upper half-sine arch.
const fn sine_arch() -> Waveform {
    let mut w = [0u8; WAVEFORM_LEN];
    let mut i = 0;
    while i < WAVEFORM_LEN {
        let d = 2 * (i as i32) - 63;
        w[i] = (127 + (128 * (3969 - d * d)) / 3969) as u8;
        i += 1;
    }
    w
}

const fn triangle() -> Waveform {
    let mut w = [0u8; WAVEFORM_LEN];
    let mut i = 0;
    while i < WAVEFORM_LEN {
        let v = if i < 32 {
            128 + 4 * (i as i32)
        } else {
            252 - 4 * (i as i32 - 32)
        };
        w[i] = v as u8;
        i += 1;
    }
    w
}

/// Plain ramp; mirroring turns it into a full-period sawtooth shape.
const fn ramp() -> Waveform {
    let mut w = [0u8; WAVEFORM_LEN];
    let mut i = 0;
    while i < WAVEFORM_LEN {
        w[i] = (128 + 2 * i as i32) as u8;
        i += 1;
    }
    w
}

const fn square() -> Waveform {
    [255u8; WAVEFORM_LEN]
}

const fn pulse() -> Waveform {
    let mut w = [128u8; WAVEFORM_LEN];
    let mut i = 52;
    while i < WAVEFORM_LEN {
        w[i] = 255;
        i += 1;
    }
    w
}

/// Ramp with a stepped overtone ripple.
const fn bright() -> Waveform {
    let mut w = [0u8; WAVEFORM_LEN];
    let mut i = 0;
    while i < WAVEFORM_LEN {
        w[i] = (128 + i as i32 + (i as i32 % 8) * 8) as u8;
        i += 1;
    }
    w
}

/// Damped fundamental with a third-partial ripple.
const fn hollow() -> Waveform {
    let mut w = [0u8; WAVEFORM_LEN];
    let mut i = 0;
    while i < WAVEFORM_LEN {
        let d = 2 * (i as i32) - 63;
        let fundamental = (96 * (3969 - d * d)) / 3969;
        let e = ((6 * i as i32) % 128) - 63;
        let ripple = (32 * (3969 - e * e)) / 4096;
        w[i] = (127 + fundamental + ripple) as u8;
        i += 1;
    }
    w
}

/// Near-flat body with a narrow spike, reed-organ flavored.
const fn reed() -> Waveform {
    let mut w = [0u8; WAVEFORM_LEN];
    let mut i = 0;
    while i < WAVEFORM_LEN {
        w[i] = if i > 56 { 255 } else { (130 + i as i32 / 2) as u8 };
        i += 1;
    }
    w
}

static DEFAULT_WAVEFORMS: [Waveform; 8] = [
    sine_arch(),
    triangle(),
    ramp(),
    square(),
    pulse(),
    bright(),
    hollow(),
    reed(),
];

/// The built-in waveform bank.
pub fn default_bank() -> WaveformBank<'static> {
    WaveformBank::new(&DEFAULT_WAVEFORMS)
}

/// Two factory wavetables in the binary descriptor format, packed back to
/// back. Table 0 morphs sine through triangle and saw into square; table 1
/// covers the harsher shapes.
pub const FACTORY_WAVETABLES: &[u8] = &[
    // table 0
    0x00, //
    0, 0, //
    1, 20, //
    2, 40, //
    3, 60, //
    // table 1
    0x00, //
    6, 0, //
    5, 25, //
    4, 45, //
    7, 60, //
];
