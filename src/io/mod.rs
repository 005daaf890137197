// Purpose - external interfaces: the MIDI byte-stream decoder

pub mod midi;
