//! Timestamped MIDI input for one block.
//!
//! Only note-on matters to the kit; everything else is parsed so hosts can
//! hand over their raw queue unfiltered.

/// A short MIDI message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MidiMessage {
    /// Note on. Velocity 0 is treated as note off.
    NoteOn {
        /// Channel (0..16).
        channel: u8,
        /// Note number.
        note: u8,
        /// Velocity (0..128).
        velocity: u8,
    },
    /// Note off.
    NoteOff {
        /// Channel (0..16).
        channel: u8,
        /// Note number.
        note: u8,
    },
    /// Any other message.
    Other,
}

impl MidiMessage {
    /// Parse raw status and data bytes.
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        let [status, data1, data2] = bytes;
        let channel = status & 0x0f;
        match status & 0xf0 {
            0x90 if data2 > 0 => Self::NoteOn {
                channel,
                note: data1 & 0x7f,
                velocity: data2 & 0x7f,
            },
            0x80 | 0x90 => Self::NoteOff {
                channel,
                note: data1 & 0x7f,
            },
            _ => Self::Other,
        }
    }

    /// Note and velocity in `[0, 1]` for a sounding note-on.
    pub fn note_on(&self) -> Option<(u8, f32)> {
        match *self {
            Self::NoteOn { note, velocity, .. } if velocity > 0 => {
                Some((note, f32::from(velocity) / 127.0))
            }
            _ => None,
        }
    }
}

/// A MIDI message at a sample offset within the current block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MidiEvent {
    /// Sample offset from the start of the block.
    pub sample_offset: usize,
    /// The message.
    pub message: MidiMessage,
}

impl MidiEvent {
    /// Channel-1 note-on at `sample_offset`.
    pub const fn note_on(sample_offset: usize, note: u8, velocity: u8) -> Self {
        Self {
            sample_offset,
            message: MidiMessage::NoteOn {
                channel: 0,
                note,
                velocity,
            },
        }
    }

    /// Channel-1 note-off at `sample_offset`.
    pub const fn note_off(sample_offset: usize, note: u8) -> Self {
        Self {
            sample_offset,
            message: MidiMessage::NoteOff { channel: 0, note },
        }
    }
}
