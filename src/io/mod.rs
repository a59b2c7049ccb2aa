// Purpose - external interfaces, format conversions
// Raw MIDI in, pool events out.

pub mod converter;
pub mod midi;

pub use converter::{midi_note_to_freq, midi_to_event};
pub use midi::MidiEvent;
