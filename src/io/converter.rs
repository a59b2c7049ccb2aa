use crate::{
    io::midi::MidiEvent,
    synth::{SynthEvent, SUSTAIN_PEDAL},
};

/// Translate a MIDI event on `channel_filter` into a pool event.
///
/// Note-on with velocity 0 becomes a note-off. The sustain controller maps to
/// `Sustain` using the same thresholds as `VoicePool::control_change`; values
/// in between produce nothing.
pub fn midi_to_event(midi: MidiEvent, channel_filter: u8) -> Option<SynthEvent> {
    if midi.channel() != channel_filter {
        return None;
    }
    match midi {
        MidiEvent::NoteOn { key, velocity: 0, .. } | MidiEvent::NoteOff { key, .. } => {
            Some(SynthEvent::NoteOff { note: key })
        }
        MidiEvent::NoteOn { key, velocity, .. } => Some(SynthEvent::NoteOn {
            note: key,
            velocity: velocity as f32 / 127.0,
        }),
        MidiEvent::ControlChange {
            controller: SUSTAIN_PEDAL,
            value,
            ..
        } => match value {
            101..=u8::MAX => Some(SynthEvent::Sustain(true)),
            0..=59 => Some(SynthEvent::Sustain(false)),
            _ => None,
        },
        MidiEvent::ControlChange {
            controller, value, ..
        } => Some(SynthEvent::ControlChange { controller, value }),
        MidiEvent::ProgramChange { program, .. } => Some(SynthEvent::ProgramChange(program as u32)),
        MidiEvent::PitchBend { value, .. } => Some(SynthEvent::PitchBend(value as f32 / 8192.0)),
    }
}

pub fn midi_note_to_freq(note: u8) -> f32 {
    440.0 * 2.0_f32.powf((note as f32 - 69.0) / 12.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_by_channel() {
        let event = MidiEvent::NoteOn { channel: 3, key: 60, velocity: 127 };
        assert_eq!(midi_to_event(event, 0), None);
        assert_eq!(
            midi_to_event(event, 3),
            Some(SynthEvent::NoteOn { note: 60, velocity: 1.0 })
        );
    }

    #[test]
    fn zero_velocity_note_on_is_note_off() {
        let event = MidiEvent::NoteOn { channel: 0, key: 64, velocity: 0 };
        assert_eq!(midi_to_event(event, 0), Some(SynthEvent::NoteOff { note: 64 }));
    }

    #[test]
    fn sustain_pedal_thresholds() {
        let pedal = |value| MidiEvent::ControlChange { channel: 0, controller: SUSTAIN_PEDAL, value };
        assert_eq!(midi_to_event(pedal(127), 0), Some(SynthEvent::Sustain(true)));
        assert_eq!(midi_to_event(pedal(80), 0), None);
        assert_eq!(midi_to_event(pedal(0), 0), Some(SynthEvent::Sustain(false)));
    }

    #[test]
    fn pitch_bend_is_normalized() {
        let bend = MidiEvent::PitchBend { channel: 0, value: -8192 };
        assert_eq!(midi_to_event(bend, 0), Some(SynthEvent::PitchBend(-1.0)));
    }

    #[test]
    fn note_to_freq() {
        assert!((midi_note_to_freq(69) - 440.0).abs() < 1e-3);
        assert!((midi_note_to_freq(81) - 880.0).abs() < 1e-2);
    }
}
