//! Capability traits standing in for device peripherals.
//!
//! The core never touches hardware registers; it depends on these small
//! interfaces instead, so the same pipeline runs against an ADC and a DAC
//! port on a microcontroller or against a ring buffer and an audio
//! callback on a host. The sample clock itself is inverted: whatever fires
//! at the sample rate (a timer interrupt, an audio callback) calls
//! [`crate::runtime::SynthRuntime::tick`] once per sample.

/// A bounded-latency analog input, 8 bits per channel. Read from inside
/// the sample tick, so implementations must not block.
pub trait AnalogSource {
    fn read(&mut self, channel: u8) -> u8;
}

/// Any closure over a channel number works as an analog source.
impl<F: FnMut(u8) -> u8> AnalogSource for F {
    fn read(&mut self, channel: u8) -> u8 {
        self(channel)
    }
}

/// A non-blocking byte input, polled from the foreground loop.
pub trait ByteSource {
    fn poll(&mut self) -> Option<u8>;
}

#[cfg(feature = "rtrb")]
impl ByteSource for rtrb::Consumer<u8> {
    fn poll(&mut self) -> Option<u8> {
        self.pop().ok()
    }
}

/// The digital output the rendered sample is written to, once per tick.
pub trait SampleSink {
    fn write(&mut self, sample: u8);
}

/// Collecting sink for offline rendering and tests.
impl SampleSink for Vec<u8> {
    fn write(&mut self, sample: u8) {
        self.push(sample);
    }
}
