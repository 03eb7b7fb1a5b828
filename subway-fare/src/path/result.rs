//! Path search result.

use serde::Serialize;

use crate::domain::{Line, Station, StationId};

/// The path found between two stations.
///
/// Constructed once by the path finder and consumed by fare calculation.
/// `distance` and `duration` are sums over the sections actually used,
/// and `lines` holds the lines owning those sections, ordered by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult {
    pub(crate) stations: Vec<Station>,
    pub(crate) distance: u64,
    pub(crate) duration: u64,
    pub(crate) lines: Vec<Line>,
}

impl PathResult {
    /// Ordered stations from source to destination, both inclusive.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Ids of the stations along the path.
    pub fn station_ids(&self) -> Vec<StationId> {
        self.stations.iter().map(|s| s.id).collect()
    }

    /// First station of the path.
    pub fn source(&self) -> &Station {
        &self.stations[0]
    }

    /// Last station of the path.
    pub fn destination(&self) -> &Station {
        &self.stations[self.stations.len() - 1]
    }

    /// Number of sections travelled.
    pub fn hops(&self) -> usize {
        self.stations.len() - 1
    }

    /// Total distance of the traversed sections.
    pub fn distance(&self) -> u64 {
        self.distance
    }

    /// Total duration of the traversed sections.
    pub fn duration(&self) -> u64 {
        self.duration
    }

    /// Lines whose sections the path uses, ordered by id.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Highest surcharge among the traversed lines, zero if none.
    pub fn max_surcharge(&self) -> u64 {
        self.lines.iter().map(|l| l.surcharge).max().unwrap_or(0)
    }
}
