//! Line types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier of a line.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(pub u64);

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A subway line.
///
/// Only the surcharge matters for pricing: a rider pays the highest
/// surcharge among the lines their path uses, once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Unique identity
    pub id: LineId,
    /// Display name
    pub name: String,
    /// Extra fare added when this line is used, in the smallest currency unit
    #[serde(default)]
    pub surcharge: u64,
}

impl Line {
    /// Creates a new line.
    pub fn new(id: u64, name: impl Into<String>, surcharge: u64) -> Self {
        Self {
            id: LineId(id),
            name: name.into(),
            surcharge,
        }
    }
}
