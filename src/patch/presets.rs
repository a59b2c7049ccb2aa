//! Small client-side patches. Each one mints a new handle from the context;
//! call [`PatchDef::store`] to upload it.

use crate::{
    engine::Context,
    wire::{
        consts::{FilterType, Wave},
        EncodeError, Field, Message,
    },
};

use super::PatchDef;

// Pitch-tracking frequency: middle C plus note and pitch-bend scaling.
const TRACKED_MIDDLE_C: &str = "261.63,1,0,0,0,1";

fn single(ctx: &mut Context, message: Result<Message, EncodeError>) -> Result<PatchDef, EncodeError> {
    Ok(PatchDef::new(ctx, vec![message?]))
}

/// Sine LFO on osc 1, used as the mod source of osc 0.
fn lfo(freq: f64, phase: Option<f64>) -> Result<Message, EncodeError> {
    let mut builder = Message::builder().osc(1).wave(Wave::Sine).amp(0.5).freq(freq);
    if let Some(phase) = phase {
        builder = builder.field(Field::Phase, phase);
    }
    builder.build()
}

pub fn simple_sine(ctx: &mut Context) -> Result<PatchDef, EncodeError> {
    single(
        ctx,
        Message::builder()
            .osc(0)
            .wave(Wave::Sine)
            .bp0("10,1,240,0.7,500,0")
            .build(),
    )
}

pub fn filter_bass(ctx: &mut Context) -> Result<PatchDef, EncodeError> {
    single(
        ctx,
        Message::builder()
            .osc(0)
            .wave(Wave::SawDown)
            .filter_freq("100,0,0,5")
            .field(Field::Resonance, 5.0)
            .field(Field::FilterType, FilterType::Lpf)
            .bp0("0,1,1000,0,100,0")
            .build(),
    )
}

pub fn amp_lfo(ctx: &mut Context) -> Result<PatchDef, EncodeError> {
    let setup = vec![
        lfo(1.5, None)?,
        Message::builder()
            .osc(0)
            .wave(Wave::Pulse)
            .bp0("150,1,1850,0.25,250,0")
            .amp("0,0,1,1,0,1")
            .field(Field::ModSource, 1)
            .build()?,
    ];
    Ok(PatchDef::new(ctx, setup))
}

pub fn pitch_lfo(ctx: &mut Context) -> Result<PatchDef, EncodeError> {
    let setup = vec![
        lfo(0.25, None)?,
        Message::builder()
            .osc(0)
            .wave(Wave::Pulse)
            .bp0("150,1,250,0,0,0")
            .freq(TRACKED_MIDDLE_C)
            .field(Field::ModSource, 1)
            .build()?,
    ];
    Ok(PatchDef::new(ctx, setup))
}

/// A falling sine: the LFO starts half way through its cycle.
pub fn bass_drum(ctx: &mut Context) -> Result<PatchDef, EncodeError> {
    let setup = vec![
        lfo(0.25, Some(0.5))?,
        Message::builder()
            .osc(0)
            .wave(Wave::Sine)
            .bp0("0,1,500,0,0,0")
            .freq(TRACKED_MIDDLE_C)
            .field(Field::ModSource, 1)
            .build()?,
    ];
    Ok(PatchDef::new(ctx, setup))
}

pub fn noise_snare(ctx: &mut Context) -> Result<PatchDef, EncodeError> {
    single(
        ctx,
        Message::builder()
            .osc(0)
            .wave(Wave::Noise)
            .bp0("0,1,250,0,0,0")
            .build(),
    )
}

pub fn closed_hat(ctx: &mut Context) -> Result<PatchDef, EncodeError> {
    single(
        ctx,
        Message::builder()
            .osc(0)
            .wave(Wave::Noise)
            .bp0("25,1,50,0,0,0")
            .build(),
    )
}
