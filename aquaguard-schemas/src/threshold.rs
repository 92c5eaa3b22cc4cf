use crate::parameter::Parameter;
use serde::Serialize;

/// The acceptable range for one parameter. At least one side is present.
/// Both sides are inclusive: a value equal to a bound is acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bound {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
}

impl Bound {
    pub const fn range(minimum: f64, maximum: f64) -> Self {
        Self {
            minimum: Some(minimum),
            maximum: Some(maximum),
        }
    }

    pub const fn at_least(minimum: f64) -> Self {
        Self {
            minimum: Some(minimum),
            maximum: None,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.minimum.map_or(true, |min| value >= min)
            && self.maximum.map_or(true, |max| value <= max)
    }
}

/// The safe ranges for every measured parameter of one species.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdTable {
    pub temperature: Bound,
    pub ph: Bound,
    pub dissolved_oxygen: Bound,
}

impl ThresholdTable {
    pub fn bound(&self, parameter: Parameter) -> &Bound {
        match parameter {
            Parameter::Temperature => &self.temperature,
            Parameter::Ph => &self.ph,
            Parameter::DissolvedOxygen => &self.dissolved_oxygen,
        }
    }

    /// Yields each parameter with its bound, in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (Parameter, &Bound)> + '_ {
        Parameter::ALL
            .into_iter()
            .map(move |parameter| (parameter, self.bound(parameter)))
    }
}
