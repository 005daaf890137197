use crate::dsp::filter::FilterCascade;
use crate::dsp::oscillator::Oscillator;
use crate::dsp::wavetable::Wavetable;
use crate::io::midi::MidiDecoder;
use crate::synth::tuning;
use crate::CENTER_SAMPLE;

/// The monophonic voice: one oscillator, one wavetable, two chained
/// one-pole filters.
///
/// Control state (frequency, gate) changes between ticks; `tick` itself is
/// branch-light fixed-point work suitable for an interrupt context. The
/// wavetable is installed whole at construction or via
/// [`MonoVoice::replace_wavetable`] - there is no partial mutation, so a
/// swap is never observable half-done.
pub struct MonoVoice<'a> {
    oscillator: Oscillator,
    filters: FilterCascade,
    table: Wavetable<'a>,
    sample_rate: u32,
    gate: bool,
}

impl<'a> MonoVoice<'a> {
    pub fn new(table: Wavetable<'a>, sample_rate: u32) -> Self {
        Self {
            oscillator: Oscillator::new(),
            filters: FilterCascade::new(),
            table,
            sample_rate,
            gate: false,
        }
    }

    /// Re-map decoded MIDI state onto the voice: note and pitch bend set
    /// the oscillator step, the gate decides whether the wavetable output
    /// reaches the filters.
    pub fn apply_midi(&mut self, midi: &MidiDecoder) {
        self.oscillator
            .set_frequency_chz(tuning::note_frequency_chz(midi.note()), self.sample_rate);
        self.oscillator
            .set_step(tuning::bend_step(self.oscillator.step(), midi.pitch_bend()));
        self.gate = midi.gate();
    }

    /// Direct frequency control for callers that bypass MIDI.
    pub fn set_frequency_chz(&mut self, chz: u32) {
        self.oscillator.set_frequency_chz(chz, self.sample_rate);
    }

    pub fn set_gate(&mut self, gate: bool) {
        self.gate = gate;
    }

    pub fn gate(&self) -> bool {
        self.gate
    }

    /// Install a fully built wavetable. Requires `&mut self`, so the swap
    /// cannot race the sample pipeline.
    pub fn replace_wavetable(&mut self, table: Wavetable<'a>) {
        self.table = table;
    }

    pub fn wavetable(&self) -> &Wavetable<'a> {
        &self.table
    }

    /// Render one sample: wavetable lookup at the current phase, recenter
    /// to signed, two filter poles, back to unsigned. The phase advances
    /// after the lookup. With the gate closed the filters are fed silence
    /// so their tail decays instead of freezing.
    pub fn tick(&mut self, slot: u8, k: i8) -> u8 {
        let raw = self.table.sample(slot, self.oscillator.phase());
        self.oscillator.advance();

        let x = if self.gate {
            raw.wrapping_sub(CENTER_SAMPLE) as i8
        } else {
            0
        };
        let y = self.filters.feed(k, x);
        (CENTER_SAMPLE as i16 + y as i16) as u8
    }
}
