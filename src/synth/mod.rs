// Purpose: the monophonic voice layer
// Maps decoded MIDI state onto the DSP primitives and renders one sample
// per tick.

pub mod tuning;
pub mod voice;
