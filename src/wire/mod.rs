// Purpose: wire-message encoding
// Everything the engine receives is built here: field table, value coercion,
// control-coefficient vectors.

pub mod coefs;
pub mod consts;
pub mod error;
pub mod field;
pub mod message;

pub use coefs::{Coef, CoefSpec, ControlCoefficients};
pub use error::EncodeError;
pub use field::{ArgKind, Field, FieldSpec, FIELD_TABLE};
pub use message::{encode, FieldWarning, Message, MessageBuilder, Value};

/// Terminates every wire message.
pub const TERMINATOR: char = 'Z';

/// Format a float the way the engine expects it: six decimals, then trailing
/// zeros and a dangling decimal point removed.
///
/// `1.0 -> "1"`, `0.1 -> "0.1"`, `220.0 -> "220"`, `-0.9 -> "-0.9"`.
/// Non-finite input is formatted as-is; message building rejects it earlier.
pub fn trunc(value: f64) -> String {
    let formatted = format!("{:.6}", value);
    if !formatted.contains('.') {
        // inf / NaN
        return formatted;
    }
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Parse a single numeric wire field and re-emit it through [`trunc`].
/// Blank fields stay blank; `inf` and `NaN` are rejected.
pub(crate) fn trunc_str(field: &'static str, text: &str) -> Result<String, EncodeError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(trunc(value)),
        _ => Err(EncodeError::InvalidValue {
            field,
            value: text.to_string(),
        }),
    }
}

/// Comma-join optional numbers, rendering `None` as an empty field.
pub(crate) fn join_optional(values: &[Option<f64>]) -> String {
    values
        .iter()
        .map(|v| v.map(trunc).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trunc_strips_trailing_zeros() {
        assert_eq!(trunc(1.0), "1");
        assert_eq!(trunc(0.100000), "0.1");
        assert_eq!(trunc(220.0), "220");
        assert_eq!(trunc(-0.9), "-0.9");
        assert_eq!(trunc(0.0), "0");
        assert_eq!(trunc(261.63), "261.63");
    }

    #[test]
    fn trunc_rounds_to_six_places() {
        assert_eq!(trunc(0.1234567), "0.123457");
        assert_eq!(trunc(1e-7), "0");
    }

    #[test]
    fn trunc_str_keeps_blanks() {
        assert_eq!(trunc_str("x", "").unwrap(), "");
        assert_eq!(trunc_str("x", " ").unwrap(), "");
        assert_eq!(trunc_str("x", "440.0").unwrap(), "440");
        assert!(trunc_str("x", "abc").is_err());
        assert!(trunc_str("x", "inf").is_err());
        assert!(trunc_str("x", "NaN").is_err());
    }

    #[test]
    fn join_optional_keeps_positions() {
        assert_eq!(join_optional(&[Some(1.0), None, Some(0.5)]), "1,,0.5");
        assert_eq!(join_optional(&[]), "");
    }
}
