// Purpose: voice pools, note lifecycle, sustain
// This layer sits above the wire codec and decides which engine voice plays
// which note.

pub mod message;
pub mod pool;
pub mod sustain;
pub mod voice;

pub use message::{MessageReceiver, SynthEvent};
pub use pool::{VoicePool, SUSTAIN_PEDAL};
pub use sustain::SustainState;
pub use voice::{NoteState, Schedule, VoiceState};
