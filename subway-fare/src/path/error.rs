//! Path search errors.

use crate::domain::StationId;

/// Error from path search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// Source and destination are the same station
    #[error("source and destination are the same station ({0})")]
    SameStation(StationId),

    /// Station is not a vertex of the graph
    #[error("station {0} not found")]
    StationNotFound(StationId),

    /// No sequence of sections connects the two stations
    #[error("no path from station {from} to station {to}")]
    NoPath { from: StationId, to: StationId },
}
