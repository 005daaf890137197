#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Non-standard sentinel byte requesting a full synthesizer restart.
pub const RESET_SENTINEL: u8 = 0xFF;

/// Channel-voice command classes, taken from bits 4-6 of a status byte.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MidiCommand {
    NoteOff,
    NoteOn,
    ControlChange,
    ProgramChange,
    PitchBend,
    #[default]
    Unknown,
}

impl MidiCommand {
    pub fn from_status(byte: u8) -> Self {
        match byte & 0x70 {
            0x00 => MidiCommand::NoteOff,
            0x10 => MidiCommand::NoteOn,
            0x30 => MidiCommand::ControlChange,
            0x40 => MidiCommand::ProgramChange,
            0x60 => MidiCommand::PitchBend,
            _ => MidiCommand::Unknown,
        }
    }

    /// Number of data bytes the command carries. Unknown commands carry
    /// none, so their data bytes fall through harmlessly.
    pub fn data_len(self) -> u8 {
        match self {
            MidiCommand::NoteOff
            | MidiCommand::NoteOn
            | MidiCommand::ControlChange
            | MidiCommand::PitchBend => 2,
            MidiCommand::ProgramChange => 1,
            MidiCommand::Unknown => 0,
        }
    }
}

/// Stateful one-byte-at-a-time decoder for a serial MIDI stream.
///
/// The decoder owns the channel state a monophonic voice needs: last note,
/// velocity, gate, program, pitch bend and the 128 controller values. It is
/// fed from the foreground loop and never raises errors - unknown commands
/// and filtered-out channels are absorbed so the audio path cannot stall on
/// malformed input.
#[derive(Debug, Clone)]
pub struct MidiDecoder {
    command: MidiCommand,
    channel: u8,
    data_count: u8,
    data_limit: u8,
    data: [u8; 2],

    note: u8,
    velocity: u8,
    gate: bool,
    program: u8,
    pitch_bend: u16,
    controllers: [u8; 128],
    reset: bool,
}

impl Default for MidiDecoder {
    fn default() -> Self {
        Self {
            command: MidiCommand::Unknown,
            channel: 0,
            data_count: 0,
            data_limit: 0,
            data: [0; 2],
            note: 0,
            velocity: 0,
            gate: false,
            program: 0,
            pitch_bend: 0x2000,
            controllers: [0; 128],
            reset: false,
        }
    }
}

impl MidiDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one byte from the stream. Data bytes whose command targets a
    /// channel other than `channel_filter` are ignored without advancing
    /// the data counter, so several decoders with different filters can
    /// share one stream without crosstalk.
    pub fn process(&mut self, byte: u8, channel_filter: u8) {
        // The reset sentinel takes priority and is never blocked by a
        // partially accumulated command.
        if byte == RESET_SENTINEL {
            self.reset = true;
        }

        if byte & 0x80 != 0 {
            // Status byte: start a new command. Data bytes that follow any
            // later status-less commands reuse this class (running status).
            self.command = MidiCommand::from_status(byte);
            self.channel = byte & 0x0F;
            self.data_count = 0;
            self.data_limit = self.command.data_len();
        } else if self.channel == channel_filter {
            self.data[self.data_count as usize] = byte;
            self.data_count += 1;

            if self.data_count >= self.data_limit {
                self.dispatch();
                self.data_count = 0;
            }
        }
    }

    fn dispatch(&mut self) {
        match self.command {
            MidiCommand::NoteOn => {
                self.note = self.data[0];
                self.velocity = self.data[1];
                self.gate = true;
            }
            MidiCommand::NoteOff => {
                // Only release the note that is actually held.
                if self.note == self.data[0] {
                    self.gate = false;
                }
            }
            MidiCommand::ControlChange => {
                // Data bytes have the high bit clear, so the index is
                // always 0..=127.
                self.controllers[self.data[0] as usize] = self.data[1];
            }
            MidiCommand::ProgramChange => {
                self.program = self.data[0];
            }
            MidiCommand::PitchBend => {
                self.pitch_bend = self.data[0] as u16 | ((self.data[1] as u16) << 7);
            }
            MidiCommand::Unknown => {}
        }
    }

    pub fn note(&self) -> u8 {
        self.note
    }

    pub fn velocity(&self) -> u8 {
        self.velocity
    }

    /// True while a note is held.
    pub fn gate(&self) -> bool {
        self.gate
    }

    pub fn program(&self) -> u8 {
        self.program
    }

    /// 14-bit pitch bend, 0x2000 at rest.
    pub fn pitch_bend(&self) -> u16 {
        self.pitch_bend
    }

    pub fn controller(&self, index: u8) -> u8 {
        self.controllers[(index & 0x7F) as usize]
    }

    /// True once the reset sentinel has been seen. The enclosing driver is
    /// expected to restart the whole system in response.
    pub fn reset_requested(&self) -> bool {
        self.reset
    }
}
