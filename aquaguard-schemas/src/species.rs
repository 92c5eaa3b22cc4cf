//! Species profiles. Each farmed species is a fixed, hard-coded threshold
//! table; the evaluator never branches on species.

use crate::threshold::{Bound, ThresholdTable};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Anything that can supply a threshold table.
pub trait ThresholdProfile {
    /// The profile's display name.
    fn name(&self) -> &'static str;

    fn thresholds(&self) -> ThresholdTable;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Salmon;

impl Salmon {
    pub const THRESHOLDS: ThresholdTable = ThresholdTable {
        temperature: Bound::range(12.0, 18.0),
        ph: Bound::range(6.5, 8.5),
        dissolved_oxygen: Bound::at_least(7.0),
    };
}

impl ThresholdProfile for Salmon {
    fn name(&self) -> &'static str {
        "Salmon"
    }

    fn thresholds(&self) -> ThresholdTable {
        Self::THRESHOLDS
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tilapia;

impl Tilapia {
    pub const THRESHOLDS: ThresholdTable = ThresholdTable {
        temperature: Bound::range(25.0, 30.0),
        ph: Bound::range(6.5, 9.0),
        dissolved_oxygen: Bound::at_least(5.0),
    };
}

impl ThresholdProfile for Tilapia {
    fn name(&self) -> &'static str {
        "Tilapia"
    }

    fn thresholds(&self) -> ThresholdTable {
        Self::THRESHOLDS
    }
}

/// Raised when a caller names a species that has no registered profile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown species '{0}' (known: salmon, tilapia)")]
pub struct UnknownSpecies(pub String);

/// The registry of built-in species, used by callers that pick a profile by
/// name at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    Salmon,
    Tilapia,
}

impl Species {
    pub const ALL: [Species; 2] = [Species::Salmon, Species::Tilapia];

    /// Lower-case identifier accepted by `FromStr`.
    pub fn id(self) -> &'static str {
        match self {
            Species::Salmon => "salmon",
            Species::Tilapia => "tilapia",
        }
    }
}

impl ThresholdProfile for Species {
    fn name(&self) -> &'static str {
        match self {
            Species::Salmon => Salmon.name(),
            Species::Tilapia => Tilapia.name(),
        }
    }

    fn thresholds(&self) -> ThresholdTable {
        match self {
            Species::Salmon => Salmon::THRESHOLDS,
            Species::Tilapia => Tilapia::THRESHOLDS,
        }
    }
}

impl FromStr for Species {
    type Err = UnknownSpecies;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Species::ALL
            .into_iter()
            .find(|species| species.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownSpecies(s.to_string()))
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
