//! The sample-clock driver: glue between the HAL endpoints, the MIDI
//! decoder and the voice.
//!
//! Two entry points mirror the two execution contexts of the firmware.
//! [`SynthRuntime::tick`] is the interrupt body - it must finish within one
//! sample period and performs no unbounded waits. [`SynthRuntime::poll_midi`]
//! is the foreground step, preemptable at any point by the tick. On a host
//! both are typically called from the audio callback, which preserves the
//! ordering guarantee of exactly one sample per tick.

use crate::dsp::wavetable::{Wavetable, WAVETABLE_SIZE};
use crate::hal::{AnalogSource, ByteSource, SampleSink};
use crate::io::midi::MidiDecoder;
use crate::synth::voice::MonoVoice;

/// Analog channel carrying the wavetable slot modulation.
pub const SLOT_CHANNEL: u8 = 0;
/// Analog channel carrying the filter coefficient.
pub const CUTOFF_CHANNEL: u8 = 1;

pub struct SynthRuntime<'a, A, B, D> {
    voice: MonoVoice<'a>,
    midi: MidiDecoder,
    adc: A,
    uart: B,
    dac: D,
    channel_filter: u8,
}

impl<'a, A, B, D> SynthRuntime<'a, A, B, D>
where
    A: AnalogSource,
    B: ByteSource,
    D: SampleSink,
{
    /// The wavetable inside `voice` is expected to be fully loaded before
    /// the first tick; reloads go through [`Self::replace_wavetable`].
    pub fn new(voice: MonoVoice<'a>, adc: A, uart: B, dac: D, channel_filter: u8) -> Self {
        Self {
            voice,
            midi: MidiDecoder::new(),
            adc,
            uart,
            dac,
            channel_filter,
        }
    }

    /// One sample tick: poll the modulation inputs, render, write out.
    pub fn tick(&mut self) {
        let slot = (self.adc.read(SLOT_CHANNEL) >> 2).min(WAVETABLE_SIZE as u8 - 1);
        let k = (self.adc.read(CUTOFF_CHANNEL) >> 1) as i8;

        let sample = self.voice.tick(slot, k);
        self.dac.write(sample);
    }

    /// Foreground step: drain whatever bytes have arrived, re-map the
    /// decoded state onto the voice, and report whether the reset sentinel
    /// was seen. The caller owns the actual restart.
    pub fn poll_midi(&mut self) -> bool {
        while let Some(byte) = self.uart.poll() {
            self.midi.process(byte, self.channel_filter);
        }
        self.voice.apply_midi(&self.midi);
        self.midi.reset_requested()
    }

    /// Swap in a fully built replacement table. Going through `&mut self`
    /// means the swap is serialized with `tick` - the pipeline never sees
    /// a half-written table.
    pub fn replace_wavetable(&mut self, table: Wavetable<'a>) {
        self.voice.replace_wavetable(table);
    }

    pub fn voice(&self) -> &MonoVoice<'a> {
        &self.voice
    }

    pub fn midi(&self) -> &MidiDecoder {
        &self.midi
    }

    pub fn sink(&self) -> &D {
        &self.dac
    }

    pub fn sink_mut(&mut self) -> &mut D {
        &mut self.dac
    }
}
