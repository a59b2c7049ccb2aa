//! Numeric constants understood by the engine.

use super::message::Value;

/// Oscillator waveforms (`wave` field).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i64)]
pub enum Wave {
    Sine = 0,
    Pulse,
    SawDown,
    SawUp,
    Triangle,
    Noise,
    Karplus,
    Pcm,
    Algo,
    Partial,
    Partials,
    ByoPartials,
    InterpPartials,
    AudioIn0,
    AudioIn1,
    Custom,
    Off,
}

/// Filter types (`filter_type` field).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i64)]
pub enum FilterType {
    None = 0,
    Lpf,
    Bpf,
    Hpf,
    Lpf24,
}

/// Envelope shapes (`eg0_type` / `eg1_type` fields).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i64)]
pub enum EnvelopeType {
    Normal = 0,
    Linear,
    Dx7,
    TrueExponential,
}

// Flags for the `reset` field. Values below 4096 reset a single oscillator.
pub const RESET_SEQUENCER: i64 = 4096;
pub const RESET_ALL_OSCS: i64 = 8192;
pub const RESET_TIMEBASE: i64 = 16384;
pub const RESET_ENGINE: i64 = 32768;

impl From<Wave> for Value {
    fn from(wave: Wave) -> Self {
        Value::Int(wave as i64)
    }
}

impl From<FilterType> for Value {
    fn from(filter: FilterType) -> Self {
        Value::Int(filter as i64)
    }
}

impl From<EnvelopeType> for Value {
    fn from(env: EnvelopeType) -> Self {
        Value::Int(env as i64)
    }
}
