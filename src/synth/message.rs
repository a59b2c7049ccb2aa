#[cfg(feature = "rtrb")]
use rtrb::Consumer;

/// Commands a [`VoicePool`](super::VoicePool) understands, for queue-driven use.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SynthEvent {
    NoteOn { note: u8, velocity: f32 },
    NoteOff { note: u8 },
    Sustain(bool),
    ControlChange { controller: u8, value: u8 },
    ProgramChange(u32),
    /// -1.0 ..= 1.0, global to the engine
    PitchBend(f32),
    AllNotesOff,
}

pub trait MessageReceiver {
    fn pop(&mut self) -> Option<SynthEvent>;
}

#[cfg(feature = "rtrb")]
impl MessageReceiver for Consumer<SynthEvent> {
    fn pop(&mut self) -> Option<SynthEvent> {
        Consumer::pop(self).ok()
    }
}

impl MessageReceiver for std::collections::VecDeque<SynthEvent> {
    fn pop(&mut self) -> Option<SynthEvent> {
        self.pop_front()
    }
}
