//! Weight selection for path queries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown weight mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown weight mode: {0}")]
pub struct InvalidWeightMode(String);

/// Which section attribute a query minimizes.
///
/// A graph is built for exactly one mode; the two are never mixed within
/// one query because the shortest path by distance need not be the
/// fastest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WeightMode {
    /// Minimize total distance
    Distance,
    /// Minimize total duration
    Duration,
}

impl WeightMode {
    /// Returns the metric that breaks ties between equally cheap paths.
    pub fn secondary(self) -> Self {
        match self {
            WeightMode::Distance => WeightMode::Duration,
            WeightMode::Duration => WeightMode::Distance,
        }
    }

    /// Returns the canonical upper-case spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            WeightMode::Distance => "DISTANCE",
            WeightMode::Duration => "DURATION",
        }
    }
}

impl FromStr for WeightMode {
    type Err = InvalidWeightMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("distance") {
            Ok(WeightMode::Distance)
        } else if s.eq_ignore_ascii_case("duration") {
            Ok(WeightMode::Duration)
        } else {
            Err(InvalidWeightMode(s.to_string()))
        }
    }
}

impl fmt::Display for WeightMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
