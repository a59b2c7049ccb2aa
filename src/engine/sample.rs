//! PCM sample upload framing.
//!
//! A header message announces the sample, then the raw 16-bit mono PCM
//! follows as independent base64 payloads, each small enough for one message.

use std::borrow::Cow;

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::wire::{EncodeError, Field, Message};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleHeader {
    /// Patch slot the sample is stored under
    pub patch: u32,
    pub sample_rate: u32,
    /// MIDI note at which the sample plays back unpitched
    pub base_note: u8,
    pub loop_start: u32,
    pub loop_end: u32,
}

impl SampleHeader {
    pub fn new(patch: u32, sample_rate: u32) -> Self {
        Self {
            patch,
            sample_rate,
            base_note: 60,
            loop_start: 0,
            loop_end: 0,
        }
    }

    pub fn base_note(mut self, note: u8) -> Self {
        self.base_note = note;
        self
    }

    pub fn looped(mut self, start: u32, end: u32) -> Self {
        self.loop_start = start;
        self.loop_end = end;
        self
    }

    /// `patch,frames,rate,base_note,loop_start,loop_end` on the `load_sample` field.
    pub fn message(&self, frames: usize) -> Result<Message, EncodeError> {
        let header = format!(
            "{},{},{},{},{},{}",
            self.patch, frames, self.sample_rate, self.base_note, self.loop_start, self.loop_end
        );
        Message::builder().field(Field::LoadSample, header).build()
    }
}

/// Message that frees a stored sample.
pub fn unload_message(patch: u32) -> Result<Message, EncodeError> {
    Message::builder()
        .field(Field::LoadSample, format!("{},0", patch))
        .build()
}

/// Keep only the first channel of interleaved 16-bit stereo.
pub fn mono_pcm(pcm: &[u8], stereo: bool) -> Cow<'_, [u8]> {
    if !stereo {
        return Cow::Borrowed(pcm);
    }
    Cow::Owned(
        pcm.chunks_exact(4)
            .flat_map(|frame| [frame[0], frame[1]])
            .collect(),
    )
}

/// Number of 16-bit frames in mono PCM. A dangling odd byte is ignored.
pub fn frame_count(mono: &[u8]) -> usize {
    mono.len() / 2
}

/// Base64 payloads of `chunk_frames` frames each; the last may be shorter.
pub fn chunk_payloads(mono: &[u8], chunk_frames: usize) -> impl Iterator<Item = String> + '_ {
    let usable = frame_count(mono) * 2;
    mono[..usable]
        .chunks(chunk_frames.max(1) * 2)
        .map(|chunk| STANDARD.encode(chunk))
}
