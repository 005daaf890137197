//! Integer note-to-frequency mapping.
//!
//! The embedded target has no floating point, so equal temperament is
//! stored as one octave of centi-hertz values for the top MIDI octave;
//! every lower octave is an exact halving, i.e. a right shift.

/// Frequencies of MIDI notes 120..=131 in centi-hertz.
const TOP_OCTAVE_CHZ: [u32; 12] = [
    837_202,   // C9
    886_984,   // C#9
    939_727,   // D9
    995_606,   // D#9
    1_054_808, // E9
    1_117_530, // F9
    1_183_982, // F#9
    1_254_385, // G9
    1_328_975, // G#9
    1_408_000, // A9
    1_491_724, // A#9
    1_580_427, // B9
];

/// Frequency of a MIDI note in centi-hertz.
pub fn note_frequency_chz(note: u8) -> u32 {
    let note = note & 0x7F;
    TOP_OCTAVE_CHZ[(note % 12) as usize] >> (10 - note / 12)
}

/// Apply a 14-bit pitch-bend value to a phase step.
///
/// Full deflection is two semitones. The scaling is linear in the bend
/// value rather than exponential in pitch, which lands the full downward
/// bend about a quarter semitone flat; small bends, the common case for a
/// wheel, are accurate.
pub fn bend_step(step: u16, pitch_bend: u16) -> u16 {
    // 2 semitones: 2^(2/12) - 1 = 0.12246, as Q16.
    let span = (step as i32 * 8026) >> 16;
    let offset = pitch_bend as i32 - 0x2000;
    (step as i32 + ((span * offset) >> 13)) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_is_440_hz() {
        let chz = note_frequency_chz(69);
        assert_eq!(chz, 44_000, "A4 must map to 440.00 Hz");
    }

    #[test]
    fn test_octaves_are_exact_halvings() {
        for note in 12..=127u8 {
            assert_eq!(note_frequency_chz(note - 12), note_frequency_chz(note) / 2);
        }
    }

    #[test]
    fn test_semitones_ascend() {
        for note in 0..127u8 {
            assert!(note_frequency_chz(note) < note_frequency_chz(note + 1));
        }
    }

    #[test]
    fn test_bend_at_rest_is_identity() {
        assert_eq!(bend_step(1442, 0x2000), 1442);
    }

    #[test]
    fn test_bend_extremes_are_near_two_semitones() {
        let step = 1442u16;
        let up = bend_step(step, 0x3FFF);
        let down = bend_step(step, 0x0000);

        // 1442 * 2^(2/12) = 1618.6, 1442 * 2^(-2/12) = 1284.7
        assert!((1610..=1620).contains(&up), "bend up gave {}", up);
        assert!((1266..=1290).contains(&down), "bend down gave {}", down);
        assert!(up > step && down < step);
    }
}
