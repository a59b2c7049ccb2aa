/// Where a pool voice sits in the allocation queues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceState {
    Released, // Free, reused oldest-first
    Active,   // Bound to a note
}

/// Lifecycle of one note within a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteState {
    Idle,
    Sounding,
    /// Note-off received while the pedal was down
    Sustained,
}

/// Optional scheduling for a note event, passed through to the engine as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    pub time: Option<i64>,
    pub sequence: Option<String>,
}

impl Schedule {
    /// As soon as the engine receives it.
    pub fn now() -> Self {
        Self::default()
    }

    pub fn at(time: i64) -> Self {
        Self {
            time: Some(time),
            sequence: None,
        }
    }

    pub fn sequence(mut self, tag: impl Into<String>) -> Self {
        self.sequence = Some(tag.into());
        self
    }
}
