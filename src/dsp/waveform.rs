/// Number of stored samples per waveform. Only half of the rendered period
/// is stored; mirroring reconstructs the other half.
pub const WAVEFORM_LEN: usize = 64;

/// An immutable half-period waveform, unsigned 8-bit, center around 127.
pub type Waveform = [u8; WAVEFORM_LEN];

/// An indexed, read-only collection of waveforms.
///
/// Indices come from wavetable descriptors and are firmware-trusted: an
/// index past the end of the bank is a precondition violation, not a
/// recoverable error.
#[derive(Debug, Clone, Copy)]
pub struct WaveformBank<'a> {
    waveforms: &'a [Waveform],
}

impl<'a> WaveformBank<'a> {
    pub const fn new(waveforms: &'a [Waveform]) -> Self {
        Self { waveforms }
    }

    pub fn waveform(&self, index: u8) -> &'a Waveform {
        &self.waveforms[index as usize]
    }

    pub fn len(&self) -> usize {
        self.waveforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waveforms.is_empty()
    }
}

/// Read one sample from a half-stored waveform at a 16-bit phase.
///
/// Only the high byte of the phase matters. Shifted right once it becomes a
/// 0..=127 sub-phase over a reconstructed 128-sample period: bit 6 selects
/// the period half, the low 6 bits index the stored buffer. The first half
/// is read mirrored and inverted (`255 - w[63 - i]`), the second half
/// directly, which yields a symmetric full period from half the memory.
#[inline]
pub fn sample_by_phase(waveform: &Waveform, phase: u16) -> u8 {
    let sub_phase = ((phase >> 8) as u8) >> 1;
    let index = (sub_phase & 63) as usize;

    if sub_phase & 64 != 0 {
        waveform[index]
    } else {
        255 - waveform[63 - index]
    }
}
