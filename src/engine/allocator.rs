use std::collections::BTreeSet;

use tracing::debug;

/// Tracks which engine voice numbers are owned by some pool, so two pools
/// never drive the same voice.
#[derive(Debug, Default, Clone)]
pub struct VoiceAllocator {
    allocated: BTreeSet<u32>,
}

impl VoiceAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the `count` lowest free voice numbers.
    pub fn reserve(&mut self, count: usize) -> Vec<u32> {
        let mut voices = Vec::with_capacity(count);
        let mut candidate = 0u32;
        while voices.len() < count {
            if !self.allocated.contains(&candidate) {
                voices.push(candidate);
            }
            candidate += 1;
        }
        self.allocated.extend(voices.iter().copied());
        debug!(?voices, "reserved voices");
        voices
    }

    /// Hand voices back. Unknown numbers are ignored.
    pub fn release(&mut self, voices: &[u32]) {
        for voice in voices {
            self.allocated.remove(voice);
        }
        debug!(?voices, "returned voices");
    }

    pub fn is_allocated(&self, voice: u32) -> bool {
        self.allocated.contains(&voice)
    }

    pub fn allocated(&self) -> impl Iterator<Item = u32> + '_ {
        self.allocated.iter().copied()
    }

    pub fn clear(&mut self) {
        self.allocated.clear();
    }
}
