//! Control coefficients: the 7-slot modulation vector attached to amplitude,
//! frequency, duty, pan and filter frequency.
//!
//! Each slot scales one control input: a constant 1, the note's log-frequency,
//! the note velocity, envelope generators 0 and 1, the modulation oscillator,
//! and the global pitch bend. Unset slots leave the engine's current value
//! untouched, so `",,,,,0.01"` only changes the modulation depth.

use super::{error::EncodeError, join_optional, trunc_str};

pub const NUM_COEFS: usize = 7;

/// One slot of a control-coefficient vector, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coef {
    Const,
    Note,
    Vel,
    Eg0,
    Eg1,
    Mod,
    Bend,
}

impl Coef {
    pub const ALL: [Coef; NUM_COEFS] = [
        Coef::Const,
        Coef::Note,
        Coef::Vel,
        Coef::Eg0,
        Coef::Eg1,
        Coef::Mod,
        Coef::Bend,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Coef::Const => "const",
            Coef::Note => "note",
            Coef::Vel => "vel",
            Coef::Eg0 => "eg0",
            Coef::Eg1 => "eg1",
            Coef::Mod => "mod",
            Coef::Bend => "bend",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, EncodeError> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name() == name)
            .ok_or_else(|| EncodeError::UnknownCoefficientKey(name.to_string()))
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Ordered 7-tuple of optional coefficients.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControlCoefficients {
    slots: [Option<f64>; NUM_COEFS],
}

impl ControlCoefficients {
    pub fn new() -> Self {
        Self::default()
    }

    /// Positional slots; a short slice leaves the remaining slots unset.
    pub fn from_slots(values: &[Option<f64>]) -> Result<Self, EncodeError> {
        if values.len() > NUM_COEFS {
            return Err(EncodeError::InvalidValue {
                field: "ctrl_coefs",
                value: format!("{} coefficients (at most {})", values.len(), NUM_COEFS),
            });
        }
        let mut coefs = Self::default();
        coefs.slots[..values.len()].copy_from_slice(values);
        Ok(coefs)
    }

    /// Named slots. Every key must be one of the seven coefficient names.
    pub fn from_named<'a, I>(pairs: I) -> Result<Self, EncodeError>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut coefs = Self::default();
        for (key, value) in pairs {
            let slot = Coef::from_name(key)?;
            coefs.slots[slot.index()] = Some(value);
        }
        Ok(coefs)
    }

    pub fn set(mut self, slot: Coef, value: f64) -> Self {
        self.slots[slot.index()] = Some(value);
        self
    }

    pub fn constant(self, value: f64) -> Self {
        self.set(Coef::Const, value)
    }

    pub fn get(&self, slot: Coef) -> Option<f64> {
        self.slots[slot.index()]
    }

    pub fn slots(&self) -> &[Option<f64>; NUM_COEFS] {
        &self.slots
    }

    /// Canonical wire form: trailing unset slots dropped, interior ones blank.
    pub fn to_wire(&self) -> String {
        let len = self
            .slots
            .iter()
            .rposition(Option::is_some)
            .map_or(0, |last| last + 1);
        join_optional(&self.slots[..len])
    }

    /// [`to_wire`](Self::to_wire), refusing `inf` and `NaN` slots.
    fn checked_wire(&self) -> Result<String, EncodeError> {
        match self.slots.iter().flatten().find(|v| !v.is_finite()) {
            Some(bad) => Err(EncodeError::InvalidValue {
                field: "ctrl_coefs",
                value: bad.to_string(),
            }),
            None => Ok(self.to_wire()),
        }
    }
}

/// Any of the accepted ways of writing a control-coefficient field.
#[derive(Debug, Clone, PartialEq)]
pub enum CoefSpec {
    /// Constant slot only
    Scalar(f64),
    /// Already comma-formatted; fields are re-truncated but kept verbatim otherwise
    Wire(String),
    /// Positional slots, padded with unset
    List(Vec<Option<f64>>),
    /// Key/value pairs
    Named(Vec<(String, f64)>),
    Coefficients(ControlCoefficients),
}

impl CoefSpec {
    pub fn named<K: Into<String>>(pairs: impl IntoIterator<Item = (K, f64)>) -> Self {
        CoefSpec::Named(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Normalize to the canonical wire string.
    pub fn normalize(&self) -> Result<String, EncodeError> {
        let coefs = match self {
            CoefSpec::Wire(text) => {
                return text
                    .split(',')
                    .map(|field| trunc_str("ctrl_coefs", field))
                    .collect::<Result<Vec<_>, _>>()
                    .map(|fields| fields.join(","));
            }
            CoefSpec::Scalar(value) => ControlCoefficients::new().constant(*value),
            CoefSpec::List(values) => ControlCoefficients::from_slots(values)?,
            CoefSpec::Named(pairs) => {
                ControlCoefficients::from_named(pairs.iter().map(|(k, v)| (k.as_str(), *v)))?
            }
            CoefSpec::Coefficients(coefs) => *coefs,
        };
        coefs.checked_wire()
    }
}

impl From<f64> for CoefSpec {
    fn from(value: f64) -> Self {
        CoefSpec::Scalar(value)
    }
}

impl From<&str> for CoefSpec {
    fn from(text: &str) -> Self {
        CoefSpec::Wire(text.to_string())
    }
}

impl From<String> for CoefSpec {
    fn from(text: String) -> Self {
        CoefSpec::Wire(text)
    }
}

impl From<Vec<Option<f64>>> for CoefSpec {
    fn from(values: Vec<Option<f64>>) -> Self {
        CoefSpec::List(values)
    }
}

impl From<ControlCoefficients> for CoefSpec {
    fn from(coefs: ControlCoefficients) -> Self {
        CoefSpec::Coefficients(coefs)
    }
}

/// Normalize any accepted coefficient shape to its canonical wire string.
pub fn normalize(spec: impl Into<CoefSpec>) -> Result<String, EncodeError> {
    spec.into().normalize()
}
