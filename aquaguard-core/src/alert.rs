use aquaguard_schemas::parameter::Parameter;
use serde::Serialize;
use std::fmt;

/// Which side of its bound a value fell on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    TooLow,
    TooHigh,
}

impl Direction {
    /// The phrase used in alert messages.
    pub fn phrase(self) -> &'static str {
        match self {
            Direction::TooLow => "too low",
            Direction::TooHigh => "too high",
        }
    }

    /// The label of the bound this direction violates.
    pub fn bound_label(self) -> &'static str {
        match self {
            Direction::TooLow => "min",
            Direction::TooHigh => "max",
        }
    }
}

/// One violated bound. `bound` is the minimum for `TooLow` and the maximum
/// for `TooHigh`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Alert {
    pub parameter: Parameter,
    pub direction: Direction,
    pub actual: f64,
    pub bound: f64,
}

impl Alert {
    pub fn too_low(parameter: Parameter, actual: f64, minimum: f64) -> Self {
        Self {
            parameter,
            direction: Direction::TooLow,
            actual,
            bound: minimum,
        }
    }

    pub fn too_high(parameter: Parameter, actual: f64, maximum: f64) -> Self {
        Self {
            parameter,
            direction: Direction::TooHigh,
            actual,
            bound: maximum,
        }
    }

    pub fn message(&self) -> String {
        crate::formatter::format_alert(self)
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
