use tracing::warn;

use super::{
    coefs::{CoefSpec, ControlCoefficients},
    consts::Wave,
    error::EncodeError,
    field::{ArgKind, Field},
    join_optional, trunc, trunc_str, TERMINATOR,
};

/// A value supplied for one field, before coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Explicitly no value. Only `time` and `sequence` accept it.
    Absent,
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<Option<f64>>),
    Coefs(CoefSpec),
}

macro_rules! value_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::Int(v as i64)
            }
        })*
    };
}

value_from_int!(i64, i32, u32, u16, u8, usize);

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v as f64)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Vec<Option<f64>>> for Value {
    fn from(v: Vec<Option<f64>>) -> Self {
        Value::List(v)
    }
}

impl From<&[u32]> for Value {
    fn from(v: &[u32]) -> Self {
        Value::List(v.iter().map(|&x| Some(x as f64)).collect())
    }
}

impl From<CoefSpec> for Value {
    fn from(v: CoefSpec) -> Self {
        Value::Coefs(v)
    }
}

impl From<ControlCoefficients> for Value {
    fn from(v: ControlCoefficients) -> Self {
        Value::Coefs(CoefSpec::Coefficients(v))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Absent, Into::into)
    }
}

/// Advisory findings about a message. They never block emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldWarning {
    /// `voices` + `patch` without `osc`: the command lands on each voice's osc 0
    VoicesPatchWithoutOsc,
    /// `store_patch` is meant to be the only field in its message
    StorePatchNotAlone,
}

impl std::fmt::Display for FieldWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldWarning::VoicesPatchWithoutOsc => f.write_str(
                "'voices' and 'patch' given without 'osc'; the command will apply to each voice's osc 0",
            ),
            FieldWarning::StorePatchNotAlone => {
                f.write_str("'store_patch' should be the only field in a message")
            }
        }
    }
}

/// A validated, fully coerced wire message. Fields are held in emission order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Message {
    fields: Vec<(Field, String)>,
    warnings: Vec<FieldWarning>,
}

impl Message {
    pub fn builder() -> MessageBuilder {
        MessageBuilder::default()
    }

    /// Build from `(name, value)` pairs. Input order does not matter.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, EncodeError>
    where
        I: IntoIterator<Item = (&'a str, Value)>,
    {
        pairs
            .into_iter()
            .fold(MessageBuilder::default(), |b, (name, value)| b.set(name, value))
            .build()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.fields.iter().any(|(f, _)| *f == field)
    }

    /// Encoded value of a field, without its code.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v.as_str())
    }

    pub fn fields(&self) -> impl Iterator<Item = (Field, &str)> {
        self.fields.iter().map(|(f, v)| (*f, v.as_str()))
    }

    pub fn warnings(&self) -> &[FieldWarning] {
        &self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Add a field that was not given, e.g. a default timestamp. Existing
    /// values win.
    pub fn or_insert(&mut self, field: Field, value: impl Into<Value>) -> Result<(), EncodeError> {
        if self.contains(field) {
            return Ok(());
        }
        match value.into() {
            Value::Absent => Ok(()),
            value => {
                let encoded = coerce(field, &value)?;
                self.fields.push((field, encoded));
                self.fields.sort_by_key(|(f, _)| f.emission_key());
                Ok(())
            }
        }
    }

    /// `code value` for each field, then the terminator.
    pub fn to_wire(&self) -> String {
        let mut wire = self.body();
        wire.push(TERMINATOR);
        wire
    }

    /// Fields without the terminator.
    pub fn body(&self) -> String {
        let mut body = String::new();
        for (field, value) in &self.fields {
            body.push_str(field.code());
            body.push_str(value);
        }
        body
    }

    pub(crate) fn log_warnings(&self) {
        for warning in &self.warnings {
            warn!(wire = %self.body(), "{}", warning);
        }
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_wire())
    }
}

/// Encode one message from named fields and return its wire string.
/// Advisory warnings are logged.
pub fn encode<'a, I>(pairs: I) -> Result<String, EncodeError>
where
    I: IntoIterator<Item = (&'a str, Value)>,
{
    let message = Message::from_pairs(pairs)?;
    message.log_warnings();
    Ok(message.to_wire())
}

/// Collects fields; nothing is validated until [`MessageBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct MessageBuilder {
    entries: Vec<(Result<Field, String>, Value)>,
}

impl MessageBuilder {
    /// Set a field by name. Unknown names fail at build time.
    pub fn set(mut self, name: &str, value: impl Into<Value>) -> Self {
        let field = Field::from_name(name).map_err(|_| name.to_string());
        self.entries.push((field, value.into()));
        self
    }

    pub fn field(mut self, field: Field, value: impl Into<Value>) -> Self {
        self.entries.push((Ok(field), value.into()));
        self
    }

    pub fn osc(self, osc: u32) -> Self {
        self.field(Field::Osc, osc)
    }

    pub fn voices(self, voices: &[u32]) -> Self {
        self.field(Field::Voices, voices)
    }

    pub fn note(self, note: f64) -> Self {
        self.field(Field::Note, note)
    }

    pub fn vel(self, vel: f64) -> Self {
        self.field(Field::Vel, vel)
    }

    pub fn wave(self, wave: Wave) -> Self {
        self.field(Field::Wave, wave)
    }

    pub fn amp(self, coefs: impl Into<CoefSpec>) -> Self {
        self.field(Field::Amp, coefs.into())
    }

    pub fn freq(self, coefs: impl Into<CoefSpec>) -> Self {
        self.field(Field::Freq, coefs.into())
    }

    pub fn duty(self, coefs: impl Into<CoefSpec>) -> Self {
        self.field(Field::Duty, coefs.into())
    }

    pub fn filter_freq(self, coefs: impl Into<CoefSpec>) -> Self {
        self.field(Field::FilterFreq, coefs.into())
    }

    pub fn bp0(self, breakpoints: &str) -> Self {
        self.field(Field::Bp0, breakpoints)
    }

    pub fn time(self, time: Option<i64>) -> Self {
        self.field(Field::Time, time)
    }

    pub fn sequence(self, sequence: Option<&str>) -> Self {
        self.field(Field::Sequence, sequence)
    }

    pub fn load_patch(self, patch: u32) -> Self {
        self.field(Field::LoadPatch, patch)
    }

    pub fn store_patch(self, payload: impl Into<String>) -> Self {
        self.field(Field::StorePatch, Value::Text(payload.into()))
    }

    pub fn build(self) -> Result<Message, EncodeError> {
        // Later settings of the same field replace earlier ones.
        let mut resolved: Vec<(Field, Value)> = Vec::with_capacity(self.entries.len());
        for (field, value) in self.entries {
            let field = field.map_err(EncodeError::UnknownField)?;
            resolved.retain(|(f, _)| *f != field);
            resolved.push((field, value));
        }

        let mut present = Vec::with_capacity(resolved.len());
        for (field, value) in resolved {
            match value {
                Value::Absent if field.is_nullable() => {}
                Value::Absent => return Err(EncodeError::MissingValue(field.name())),
                value => present.push((field, value)),
            }
        }

        check_conflicts(&present)?;
        let warnings = collect_warnings(&present);

        let mut fields = present
            .iter()
            .map(|(field, value)| Ok((*field, coerce(*field, value)?)))
            .collect::<Result<Vec<_>, EncodeError>>()?;
        fields.sort_by_key(|(f, _)| f.emission_key());

        Ok(Message { fields, warnings })
    }
}

fn has(fields: &[(Field, Value)], field: Field) -> bool {
    fields.iter().any(|(f, _)| *f == field)
}

fn check_conflicts(fields: &[(Field, Value)]) -> Result<(), EncodeError> {
    if has(fields, Field::NumPartials) {
        // Both travel on the `p` code.
        if has(fields, Field::Patch) {
            return Err(EncodeError::ConflictingFields {
                first: Field::Patch.name(),
                second: Field::NumPartials.name(),
            });
        }
        let byo = fields
            .iter()
            .any(|(f, v)| *f == Field::Wave && *v == Value::Int(Wave::ByoPartials as i64));
        if !byo {
            return Err(EncodeError::ConflictingFields {
                first: Field::NumPartials.name(),
                second: Field::Wave.name(),
            });
        }
    }
    Ok(())
}

fn collect_warnings(fields: &[(Field, Value)]) -> Vec<FieldWarning> {
    let mut warnings = Vec::new();
    if has(fields, Field::Voices) && has(fields, Field::Patch) && !has(fields, Field::Osc) {
        warnings.push(FieldWarning::VoicesPatchWithoutOsc);
    }
    if has(fields, Field::StorePatch) && fields.len() > 1 {
        warnings.push(FieldWarning::StorePatchNotAlone);
    }
    warnings
}

fn invalid(field: Field, value: &Value) -> EncodeError {
    EncodeError::InvalidValue {
        field: field.name(),
        value: format!("{:?}", value),
    }
}

fn coerce(field: Field, value: &Value) -> Result<String, EncodeError> {
    let encoded = match (field.kind(), value) {
        (ArgKind::Int, Value::Int(v)) => v.to_string(),
        (ArgKind::Int, Value::Float(v)) if v.is_finite() => (v.trunc() as i64).to_string(),
        (ArgKind::Int, Value::Text(s)) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| invalid(field, value))?
            .to_string(),

        (ArgKind::Float, Value::Int(v)) => v.to_string(),
        (ArgKind::Float, Value::Float(v)) if v.is_finite() => trunc(*v),
        (ArgKind::Float, Value::Text(s)) => trunc_str(field.name(), s)?,

        (ArgKind::Raw, Value::Text(s)) => return Ok(s.clone()),

        (ArgKind::List, Value::List(items)) if items.iter().flatten().all(|v| v.is_finite()) => {
            join_optional(items)
        }
        (ArgKind::List, Value::Int(v)) => v.to_string(),
        (ArgKind::List, Value::Float(v)) if v.is_finite() => trunc(*v),
        (ArgKind::List, Value::Text(s)) => s.clone(),

        (ArgKind::Coefs, Value::Coefs(spec)) => spec.normalize()?,
        (ArgKind::Coefs, Value::Int(v)) => CoefSpec::Scalar(*v as f64).normalize()?,
        (ArgKind::Coefs, Value::Float(v)) => CoefSpec::Scalar(*v).normalize()?,
        (ArgKind::Coefs, Value::Text(s)) => CoefSpec::Wire(s.clone()).normalize()?,
        (ArgKind::Coefs, Value::List(items)) => CoefSpec::List(items.clone()).normalize()?,

        _ => return Err(invalid(field, value)),
    };
    // Only the trailing raw payload may carry the terminator.
    if encoded.contains(TERMINATOR) {
        return Err(invalid(field, value));
    }
    Ok(encoded)
}
