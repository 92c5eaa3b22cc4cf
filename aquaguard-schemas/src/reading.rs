//! Validated water-quality readings.
//!
//! A `Reading` can only be obtained through `Reading::new` (or by
//! deserializing, which goes through the same checks), so every reading the
//! evaluator sees has all three fields present, finite and inside its sanity
//! domain.

use crate::parameter::Parameter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a set of raw sensor values cannot become a `Reading`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReadingError {
    #[error("Field '{}' is missing (expected a number in {})", .field.key(), range_text(.field))]
    Missing { field: Parameter },

    #[error("Field '{}' must be numeric, got '{raw}' (expected a number in {})", .field.key(), range_text(.field))]
    NonNumeric { field: Parameter, raw: String },

    #[error("Field '{}' value {value} is outside the valid range {}", .field.key(), range_text(.field))]
    OutOfRange { field: Parameter, value: f64 },
}

impl ReadingError {
    pub fn field(&self) -> Parameter {
        match self {
            ReadingError::Missing { field }
            | ReadingError::NonNumeric { field, .. }
            | ReadingError::OutOfRange { field, .. } => *field,
        }
    }
}

/// Renders the sanity domain of a parameter, e.g. `[0.0, 14.0]` or `>= 0.0`.
pub fn range_text(parameter: &Parameter) -> String {
    match parameter.sanity_range() {
        (Some(min), Some(max)) => format!("[{:?}, {:?}]", min, max),
        (Some(min), None) => format!(">= {:?}", min),
        (None, Some(max)) => format!("<= {:?}", max),
        (None, None) => "any finite value".to_string(),
    }
}

/// One snapshot of the three measured parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ReadingFields")]
pub struct Reading {
    temperature: f64,
    ph: f64,
    dissolved_oxygen: f64,
}

#[derive(Deserialize)]
struct ReadingFields {
    temperature: f64,
    ph: f64,
    dissolved_oxygen: f64,
}

impl TryFrom<ReadingFields> for Reading {
    type Error = ReadingError;

    fn try_from(fields: ReadingFields) -> Result<Self, Self::Error> {
        Reading::new(fields.temperature, fields.ph, fields.dissolved_oxygen)
    }
}

impl Reading {
    /// Builds a reading, rejecting non-finite values and values outside the
    /// sanity domain of their parameter.
    pub fn new(temperature: f64, ph: f64, dissolved_oxygen: f64) -> Result<Self, ReadingError> {
        check_value(Parameter::Temperature, temperature)?;
        check_value(Parameter::Ph, ph)?;
        check_value(Parameter::DissolvedOxygen, dissolved_oxygen)?;
        Ok(Self {
            temperature,
            ph,
            dissolved_oxygen,
        })
    }

    /// Water temperature in °C.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn ph(&self) -> f64 {
        self.ph
    }

    /// Dissolved oxygen in mg/L.
    pub fn dissolved_oxygen(&self) -> f64 {
        self.dissolved_oxygen
    }

    pub fn value(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::Temperature => self.temperature,
            Parameter::Ph => self.ph,
            Parameter::DissolvedOxygen => self.dissolved_oxygen,
        }
    }
}

fn check_value(parameter: Parameter, value: f64) -> Result<(), ReadingError> {
    if !value.is_finite() {
        return Err(ReadingError::NonNumeric {
            field: parameter,
            raw: value.to_string(),
        });
    }
    let (min, max) = parameter.sanity_range();
    let below = min.map_or(false, |min| value < min);
    let above = max.map_or(false, |max| value > max);
    if below || above {
        return Err(ReadingError::OutOfRange {
            field: parameter,
            value,
        });
    }
    Ok(())
}

/// A reading as it arrives from an input file, with the optional label the
/// file gave it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorSample {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_id: Option<String>,
    #[serde(flatten)]
    pub reading: Reading,
}

impl SensorSample {
    pub fn new(sample_id: Option<String>, reading: Reading) -> Self {
        Self { sample_id, reading }
    }

    /// The sample label, or `#<position>` when the input carried none.
    pub fn label(&self, position: usize) -> String {
        self.sample_id
            .clone()
            .unwrap_or_else(|| format!("#{}", position))
    }
}
