//! Graph construction errors.

use crate::domain::{LineId, StationId};

/// Invalid network topology found while building a graph.
///
/// Every variant is a malformed snapshot; none are retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A section references a station not present in the snapshot
    #[error("invalid topology: section on line {line} references unknown station {station}")]
    UnknownStation { line: LineId, station: StationId },

    /// A section or query references a line not present in the snapshot
    #[error("invalid topology: unknown line {0}")]
    UnknownLine(LineId),

    /// A section connects a station to itself
    #[error("invalid topology: section on line {line} loops on station {station}")]
    SelfLoop { line: LineId, station: StationId },

    /// A section has zero or negative distance
    #[error("invalid topology: section {up}-{down} on line {line} has non-positive distance {distance}")]
    NonPositiveDistance {
        line: LineId,
        up: StationId,
        down: StationId,
        distance: i64,
    },

    /// A section has zero or negative duration
    #[error("invalid topology: section {up}-{down} on line {line} has non-positive duration {duration}")]
    NonPositiveDuration {
        line: LineId,
        up: StationId,
        down: StationId,
        duration: i64,
    },

    /// A section's distance or duration exceeds [`MAX_SECTION_WEIGHT`](super::MAX_SECTION_WEIGHT)
    #[error("invalid topology: section {up}-{down} on line {line} has weight {weight} above the per-section limit")]
    WeightTooLarge {
        line: LineId,
        up: StationId,
        down: StationId,
        weight: i64,
    },

    /// Two stations share an id
    #[error("invalid topology: duplicate station id {0}")]
    DuplicateStation(StationId),

    /// Two lines share an id
    #[error("invalid topology: duplicate line id {0}")]
    DuplicateLine(LineId),

    /// A line's sections do not form a single gapless chain
    #[error("invalid topology: sections of line {0} do not form a single chain")]
    BrokenChain(LineId),
}
