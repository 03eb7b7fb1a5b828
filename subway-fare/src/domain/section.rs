//! Section types.

use serde::{Deserialize, Serialize};

use super::{LineId, StationId};

/// A direct connection between two stations, owned by one line.
///
/// Sections are stored directed (`up` to `down`) as they appear in the
/// line's chain, but travel along them is symmetric. Distance and duration
/// are signed so that malformed input reaches graph validation instead of
/// being rejected at deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Owning line
    pub line: LineId,
    /// Upstream station
    pub up: StationId,
    /// Downstream station
    pub down: StationId,
    /// Distance in distance units, must be positive
    pub distance: i64,
    /// Duration in time units, must be positive
    pub duration: i64,
}

impl Section {
    /// Creates a new section.
    pub fn new(line: u64, up: u64, down: u64, distance: i64, duration: i64) -> Self {
        Self {
            line: LineId(line),
            up: StationId(up),
            down: StationId(down),
            distance,
            duration,
        }
    }
}
