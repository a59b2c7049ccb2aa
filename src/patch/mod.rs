// Purpose: patch handles and client-defined patches

pub mod presets;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    engine::Context,
    wire::{EncodeError, Message},
    Error,
};

/// Anything that can stand in for a patch number.
pub trait Identifiable {
    fn id(&self) -> u32;
}

impl Identifiable for u32 {
    fn id(&self) -> u32 {
        *self
    }
}

/// What a pool should play.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchSource {
    /// A patch the engine already knows
    Stored(u32),
    /// Complete wire messages to upload under a freshly minted number
    Wire(String),
}

impl From<u32> for PatchSource {
    fn from(patch: u32) -> Self {
        PatchSource::Stored(patch)
    }
}

impl From<&PatchDef> for PatchSource {
    fn from(def: &PatchDef) -> Self {
        PatchSource::Stored(def.id)
    }
}

/// A client-side patch: its handle plus the messages that define it.
#[derive(Debug, Clone, PartialEq)]
pub struct PatchDef {
    pub id: u32,
    pub setup: Vec<Message>,
}

impl PatchDef {
    /// Mint a handle for `setup`. Nothing is sent until [`PatchDef::store`].
    pub fn new(ctx: &mut Context, setup: Vec<Message>) -> Self {
        Self {
            id: ctx.next_patch_number(),
            setup,
        }
    }

    /// The setup messages concatenated, terminators included.
    pub fn body(&self) -> String {
        self.setup.iter().map(Message::to_wire).collect()
    }

    /// `u<id>,<body>` as a message.
    pub fn store_message(&self) -> Result<Message, EncodeError> {
        Message::builder()
            .store_patch(format!("{},{}", self.id, self.body()))
            .build()
    }

    pub fn store(&self, ctx: &mut Context) -> Result<(), Error> {
        ctx.store_patch(self.id, &self.body())
    }
}

impl Identifiable for PatchDef {
    fn id(&self) -> u32 {
        self.id
    }
}
