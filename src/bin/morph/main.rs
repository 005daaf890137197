//! morph - host demo for the wavetable synthesis core
//!
//! Run with: cargo run
//!
//! Plays a scripted note pattern through the full pipeline: a producer
//! thread feeds raw MIDI bytes into a ring buffer, the audio callback
//! drains them, re-maps the decoder state and renders one sample per
//! frame. Slot and cutoff modulation are slow synthetic sweeps, standing
//! in for the front-panel pots of the hardware build.

use std::thread;
use std::time::Duration;

use color_eyre::eyre::eyre;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

use morph_dsp::bank::{default_bank, FACTORY_WAVETABLES};
use morph_dsp::dsp::wavetable::Wavetable;
use morph_dsp::hal::{AnalogSource, SampleSink};
use morph_dsp::runtime::{SynthRuntime, CUTOFF_CHANNEL};
use morph_dsp::synth::voice::MonoVoice;

/// Triangle sweeps for the two modulation channels, advanced once per tick.
#[derive(Default)]
struct Sweeps {
    t: u32,
}

impl AnalogSource for Sweeps {
    fn read(&mut self, channel: u8) -> u8 {
        if channel == CUTOFF_CHANNEL {
            // Faster cutoff wobble, kept off the very bottom of the range.
            let p = ((self.t >> 9) & 0x1FF) as u16;
            let tri = if p >= 256 { 511 - p } else { p };
            64 + (tri as u8 >> 1)
        } else {
            self.t = self.t.wrapping_add(1);
            // Slot sweep across the whole table, several seconds per pass.
            let p = ((self.t >> 12) & 0x1FF) as u16;
            if p >= 256 {
                (511 - p) as u8
            } else {
                p as u8
            }
        }
    }
}

/// Holds the last rendered sample for the callback to copy out.
#[derive(Default)]
struct Latch {
    sample: u8,
}

impl SampleSink for Latch {
    fn write(&mut self, sample: u8) {
        self.sample = sample;
    }
}

/// Note numbers for a little minor arpeggio.
const PATTERN: &[u8] = &[45, 57, 60, 64, 57, 60, 64, 67];

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| eyre!("no default audio output device"))?;
    let config = device.default_output_config()?;
    if config.sample_format() != cpal::SampleFormat::F32 {
        return Err(eyre!("expected an f32 output stream"));
    }
    let channels = config.channels() as usize;
    let sample_rate = config.sample_rate().0;

    let (mut tx, rx) = rtrb::RingBuffer::<u8>::new(1024);

    // Build the wavetable before the stream starts; the callback only ever
    // sees a complete table.
    let bank = default_bank();
    let (table, _) = Wavetable::load_nth(&bank, FACTORY_WAVETABLES, 0);
    let voice = MonoVoice::new(table, sample_rate);
    let mut runtime = SynthRuntime::new(voice, Sweeps::default(), rx, Latch::default(), 0);

    let stream = device.build_output_stream(
        &config.into(),
        move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
            for frame in data.chunks_mut(channels) {
                let _ = runtime.poll_midi();
                runtime.tick();
                let value = (runtime.sink().sample as f32 - 127.0) / 128.0;
                for out in frame.iter_mut() {
                    *out = value;
                }
            }
        },
        |err| eprintln!("stream error: {err}"),
        None,
    )?;
    stream.play()?;

    println!("morph demo playing at {sample_rate} Hz - ctrl-c to quit");

    loop {
        for &note in PATTERN {
            let _ = tx.push(0x90);
            let _ = tx.push(note);
            let _ = tx.push(100);
            thread::sleep(Duration::from_millis(230));
            let _ = tx.push(0x80);
            let _ = tx.push(note);
            let _ = tx.push(0);
            thread::sleep(Duration::from_millis(20));
        }
    }
}
