/// Errors raised while building a wire message. All of them are raised before
/// any bytes are produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Field name outside the fixed vocabulary
    UnknownField(String),
    /// Control-coefficient key outside `const, note, vel, eg0, eg1, mod, bend`
    UnknownCoefficientKey(String),
    /// A non-nullable field was given the absent marker
    MissingValue(&'static str),
    /// Two fields that cannot be combined in one message
    ConflictingFields {
        first: &'static str,
        second: &'static str,
    },
    /// Value cannot be coerced to the field's wire type
    InvalidValue { field: &'static str, value: String },
}

impl std::fmt::Display for EncodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EncodeError::UnknownField(name) => write!(f, "Unknown field '{}'", name),
            EncodeError::UnknownCoefficientKey(key) => write!(
                f,
                "'{}' is not a recognized control coefficient (expected one of const, note, vel, eg0, eg1, mod, bend)",
                key
            ),
            EncodeError::MissingValue(field) => write!(f, "No value for field '{}'", field),
            EncodeError::ConflictingFields { first, second } => write!(
                f,
                "Fields '{}' and '{}' cannot be used together",
                first, second
            ),
            EncodeError::InvalidValue { field, value } => {
                write!(f, "Invalid value '{}' for field '{}'", value, field)
            }
        }
    }
}

impl std::error::Error for EncodeError {}
