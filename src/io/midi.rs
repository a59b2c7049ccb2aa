/// Channel voice messages a pool can act on. Channels are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MidiEvent {
    NoteOn { channel: u8, key: u8, velocity: u8 },
    NoteOff { channel: u8, key: u8, velocity: u8 },
    ControlChange { channel: u8, controller: u8, value: u8 },
    /// Centered on 0, -8192..=8191
    PitchBend { channel: u8, value: i16 },
    ProgramChange { channel: u8, program: u8 },
}

impl MidiEvent {
    /// Parse one complete message. Running status, system messages and
    /// anything truncated yield `None`.
    pub fn parse(bytes: &[u8]) -> Option<Self> {
        let (&status, data) = bytes.split_first()?;
        if status & 0x80 == 0 || data.iter().any(|b| b & 0x80 != 0) {
            return None;
        }
        let channel = status & 0x0f;
        let event = match (status & 0xf0, data) {
            (0x80, [key, velocity, ..]) => MidiEvent::NoteOff {
                channel,
                key: *key,
                velocity: *velocity,
            },
            (0x90, [key, velocity, ..]) => MidiEvent::NoteOn {
                channel,
                key: *key,
                velocity: *velocity,
            },
            (0xb0, [controller, value, ..]) => MidiEvent::ControlChange {
                channel,
                controller: *controller,
                value: *value,
            },
            (0xc0, [program, ..]) => MidiEvent::ProgramChange {
                channel,
                program: *program,
            },
            (0xe0, [lsb, msb, ..]) => MidiEvent::PitchBend {
                channel,
                value: (((*msb as i16) << 7) | *lsb as i16) - 8192,
            },
            _ => return None,
        };
        Some(event)
    }

    pub fn channel(&self) -> u8 {
        match *self {
            MidiEvent::NoteOn { channel, .. }
            | MidiEvent::NoteOff { channel, .. }
            | MidiEvent::ControlChange { channel, .. }
            | MidiEvent::PitchBend { channel, .. }
            | MidiEvent::ProgramChange { channel, .. } => channel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_channel_messages() {
        assert_eq!(
            MidiEvent::parse(&[0x91, 60, 100]),
            Some(MidiEvent::NoteOn { channel: 1, key: 60, velocity: 100 })
        );
        assert_eq!(
            MidiEvent::parse(&[0x80, 60, 0]),
            Some(MidiEvent::NoteOff { channel: 0, key: 60, velocity: 0 })
        );
        assert_eq!(
            MidiEvent::parse(&[0xb0, 64, 127]),
            Some(MidiEvent::ControlChange { channel: 0, controller: 64, value: 127 })
        );
        assert_eq!(
            MidiEvent::parse(&[0xc2, 5]),
            Some(MidiEvent::ProgramChange { channel: 2, program: 5 })
        );
    }

    #[test]
    fn pitch_bend_is_centered() {
        assert_eq!(
            MidiEvent::parse(&[0xe0, 0x00, 0x40]),
            Some(MidiEvent::PitchBend { channel: 0, value: 0 })
        );
        assert_eq!(
            MidiEvent::parse(&[0xe0, 0x00, 0x00]),
            Some(MidiEvent::PitchBend { channel: 0, value: -8192 })
        );
        assert_eq!(
            MidiEvent::parse(&[0xe0, 0x7f, 0x7f]),
            Some(MidiEvent::PitchBend { channel: 0, value: 8191 })
        );
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(MidiEvent::parse(&[]), None);
        assert_eq!(MidiEvent::parse(&[60, 100]), None);
        assert_eq!(MidiEvent::parse(&[0x90, 60]), None);
        assert_eq!(MidiEvent::parse(&[0x90, 0x80, 1]), None);
        assert_eq!(MidiEvent::parse(&[0xf8]), None);
    }
}
