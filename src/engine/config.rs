#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// First handle minted for patches uploaded by the client. Lower numbers are
/// the engine's built-in presets.
pub const FIRST_USER_PATCH: u32 = 1024;

/// PCM frames per sample-upload payload. 94 frames = 188 bytes, which base64
/// expands to 252 characters.
pub const SAMPLE_CHUNK_FRAMES: usize = 94;

/// Largest single message the engine accepts.
pub const MAX_MESSAGE_LEN: usize = 255;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct ContextConfig {
    pub first_patch_number: u32,
    /// Log advisory field warnings
    pub show_warnings: bool,
    pub sample_chunk_frames: usize,
    pub max_message_len: usize,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            first_patch_number: FIRST_USER_PATCH,
            show_warnings: true,
            sample_chunk_frames: SAMPLE_CHUNK_FRAMES,
            max_message_len: MAX_MESSAGE_LEN,
        }
    }
}

impl ContextConfig {
    pub fn first_patch_number(mut self, number: u32) -> Self {
        self.first_patch_number = number;
        self
    }

    pub fn show_warnings(mut self, show: bool) -> Self {
        self.show_warnings = show;
        self
    }

    pub fn sample_chunk_frames(mut self, frames: usize) -> Self {
        self.sample_chunk_frames = frames;
        self
    }

    pub fn max_message_len(mut self, len: usize) -> Self {
        self.max_message_len = len;
        self
    }

    /// Chunk size actually used: the configured frame count, shrunk until its
    /// base64 form fits in one message. Never below one frame.
    pub fn effective_chunk_frames(&self) -> usize {
        let mut frames = self.sample_chunk_frames.max(1);
        while frames > 1 && base64_len(frames * 2) > self.max_message_len {
            frames -= 1;
        }
        frames
    }
}

fn base64_len(bytes: usize) -> usize {
    bytes.div_ceil(3) * 4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_chunk_fits_engine_limit() {
        let config = ContextConfig::default();
        assert_eq!(base64_len(config.sample_chunk_frames * 2), 252);
        assert_eq!(config.effective_chunk_frames(), 94);
    }

    #[test]
    fn oversized_chunk_is_shrunk() {
        let config = ContextConfig::default().sample_chunk_frames(200);
        assert_eq!(config.effective_chunk_frames(), 94);
        let tiny = ContextConfig::default().max_message_len(4).sample_chunk_frames(10);
        assert_eq!(tiny.effective_chunk_frames(), 1);
    }
}
