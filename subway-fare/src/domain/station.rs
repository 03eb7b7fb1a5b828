//! Station types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier of a station.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(pub u64);

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A station in the network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    /// Unique identity
    pub id: StationId,
    /// Display name
    pub name: String,
}

impl Station {
    /// Creates a new station.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: StationId(id),
            name: name.into(),
        }
    }
}
