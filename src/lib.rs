pub mod engine; // Context, transports, voice ownership
pub mod error;
pub mod io; // MIDI in
pub mod juno; // Juno-106 patch dumps
pub mod patch;
pub mod synth; // Voice pools and note lifecycle
pub mod wire; // Message codec

pub use engine::{Context, ContextConfig, Transport};
pub use error::Error;
pub use patch::{PatchDef, PatchSource};
pub use synth::{Schedule, VoicePool};
pub use wire::{encode, Message};
