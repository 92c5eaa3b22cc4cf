use serde::{Deserialize, Serialize};
use std::fmt;

/// A measured water-quality parameter.
///
/// The declaration order is the evaluation order: alerts for a reading are
/// always reported temperature first, then pH, then dissolved oxygen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    Temperature,
    Ph,
    DissolvedOxygen,
}

impl Parameter {
    /// Every parameter, in evaluation order.
    pub const ALL: [Parameter; 3] = [
        Parameter::Temperature,
        Parameter::Ph,
        Parameter::DissolvedOxygen,
    ];

    /// The field name used in input files and exports.
    pub fn key(self) -> &'static str {
        match self {
            Parameter::Temperature => "temperature",
            Parameter::Ph => "ph",
            Parameter::DissolvedOxygen => "dissolved_oxygen",
        }
    }

    /// The human-readable name used in alert messages.
    pub fn display_name(self) -> &'static str {
        match self {
            Parameter::Temperature => "Temperature",
            Parameter::Ph => "pH",
            Parameter::DissolvedOxygen => "Dissolved oxygen",
        }
    }

    /// Unit suffix appended directly after a value. pH is dimensionless.
    pub fn unit(self) -> &'static str {
        match self {
            Parameter::Temperature => "°C",
            Parameter::Ph => "",
            Parameter::DissolvedOxygen => "mg/L",
        }
    }

    /// The physically plausible domain a sensor value must fall in before it
    /// is accepted as a reading. `None` means unbounded on that side.
    pub fn sanity_range(self) -> (Option<f64>, Option<f64>) {
        match self {
            Parameter::Temperature => (Some(-50.0), Some(60.0)),
            Parameter::Ph => (Some(0.0), Some(14.0)),
            Parameter::DissolvedOxygen => (Some(0.0), None),
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
