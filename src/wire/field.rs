use std::str::FromStr;

use super::error::EncodeError;

/// How a field's value is coerced to wire text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    /// Decimal integer, fractional part dropped
    Int,
    /// Six-decimal float with trailing zeros stripped
    Float,
    /// Free text, passed through untouched
    Raw,
    /// Comma-joined sequence, or a single scalar
    List,
    /// Control-coefficient vector
    Coefs,
}

/// Every field the engine understands. Declaration order is emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Osc,
    Note,
    Vel,
    Wave,
    Amp,
    Freq,
    Duty,
    Feedback,
    Time,
    Reset,
    Phase,
    Pan,
    Client,
    Volume,
    PitchBend,
    FilterFreq,
    Resonance,
    Bp0,
    Bp1,
    Eg0Type,
    Eg1Type,
    Debug,
    ChainedOsc,
    ModSource,
    Eq,
    FilterType,
    Ratio,
    LatencyMs,
    AlgoSource,
    LoadSample,
    Algorithm,
    Chorus,
    Reverb,
    Echo,
    LoadPatch,
    Voices,
    ExternalChannel,
    Portamento,
    Sequence,
    Tempo,
    Patch,
    NumPartials,
    StorePatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: Field,
    pub name: &'static str,
    pub code: &'static str,
    pub kind: ArgKind,
}

const fn spec(field: Field, name: &'static str, code: &'static str, kind: ArgKind) -> FieldSpec {
    FieldSpec {
        field,
        name,
        code,
        kind,
    }
}

/// Field table in priority order. `patch` and `num_partials` deliberately
/// share the `p` code.
pub const FIELD_TABLE: &[FieldSpec] = &[
    spec(Field::Osc, "osc", "v", ArgKind::Int),
    spec(Field::Note, "note", "n", ArgKind::Float),
    spec(Field::Vel, "vel", "l", ArgKind::Float),
    spec(Field::Wave, "wave", "w", ArgKind::Int),
    spec(Field::Amp, "amp", "a", ArgKind::Coefs),
    spec(Field::Freq, "freq", "f", ArgKind::Coefs),
    spec(Field::Duty, "duty", "d", ArgKind::Coefs),
    spec(Field::Feedback, "feedback", "b", ArgKind::Float),
    spec(Field::Time, "time", "t", ArgKind::Int),
    spec(Field::Reset, "reset", "S", ArgKind::Int),
    spec(Field::Phase, "phase", "P", ArgKind::Float),
    spec(Field::Pan, "pan", "Q", ArgKind::Coefs),
    spec(Field::Client, "client", "g", ArgKind::Int),
    spec(Field::Volume, "volume", "V", ArgKind::Float),
    spec(Field::PitchBend, "pitch_bend", "s", ArgKind::Float),
    spec(Field::FilterFreq, "filter_freq", "F", ArgKind::Coefs),
    spec(Field::Resonance, "resonance", "R", ArgKind::Float),
    spec(Field::Bp0, "bp0", "A", ArgKind::List),
    spec(Field::Bp1, "bp1", "B", ArgKind::List),
    spec(Field::Eg0Type, "eg0_type", "T", ArgKind::Int),
    spec(Field::Eg1Type, "eg1_type", "X", ArgKind::Int),
    spec(Field::Debug, "debug", "D", ArgKind::Int),
    spec(Field::ChainedOsc, "chained_osc", "c", ArgKind::Int),
    spec(Field::ModSource, "mod_source", "L", ArgKind::Int),
    spec(Field::Eq, "eq", "x", ArgKind::List),
    spec(Field::FilterType, "filter_type", "G", ArgKind::Int),
    spec(Field::Ratio, "ratio", "I", ArgKind::Float),
    spec(Field::LatencyMs, "latency_ms", "N", ArgKind::Int),
    spec(Field::AlgoSource, "algo_source", "O", ArgKind::List),
    spec(Field::LoadSample, "load_sample", "z", ArgKind::List),
    spec(Field::Algorithm, "algorithm", "o", ArgKind::Int),
    spec(Field::Chorus, "chorus", "k", ArgKind::List),
    spec(Field::Reverb, "reverb", "h", ArgKind::List),
    spec(Field::Echo, "echo", "M", ArgKind::List),
    spec(Field::LoadPatch, "load_patch", "K", ArgKind::Int),
    spec(Field::Voices, "voices", "r", ArgKind::List),
    spec(Field::ExternalChannel, "external_channel", "W", ArgKind::Int),
    spec(Field::Portamento, "portamento", "m", ArgKind::Int),
    spec(Field::Sequence, "sequence", "H", ArgKind::List),
    spec(Field::Tempo, "tempo", "j", ArgKind::Float),
    spec(Field::Patch, "patch", "p", ArgKind::Int),
    spec(Field::NumPartials, "num_partials", "p", ArgKind::Int),
    // Unterminated: runs to the end of the message, so it is always emitted last.
    spec(Field::StorePatch, "store_patch", "u", ArgKind::Raw),
];

impl Field {
    pub fn spec(self) -> &'static FieldSpec {
        &FIELD_TABLE[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }

    pub fn code(self) -> &'static str {
        self.spec().code
    }

    pub fn kind(self) -> ArgKind {
        self.spec().kind
    }

    pub fn priority(self) -> usize {
        self as usize
    }

    pub fn from_name(name: &str) -> Result<Self, EncodeError> {
        FIELD_TABLE
            .iter()
            .find(|spec| spec.name == name)
            .map(|spec| spec.field)
            .ok_or_else(|| EncodeError::UnknownField(name.to_string()))
    }

    /// Fields that may be given the absent marker; they are simply omitted.
    pub fn is_nullable(self) -> bool {
        matches!(self, Field::Time | Field::Sequence)
    }

    /// The raw payload field that must close the message.
    pub fn is_trailing(self) -> bool {
        self == Field::StorePatch
    }

    /// Sort key for emission: priority, with the trailing payload after everything.
    pub(crate) fn emission_key(self) -> (bool, usize) {
        (self.is_trailing(), self.priority())
    }
}

impl FromStr for Field {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::from_name(s)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
