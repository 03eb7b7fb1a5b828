//! Network snapshot supplied by the host.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::{Line, LineId, Section, Station, StationId};
use crate::graph::{Graph, GraphError, WeightMode};

/// An immutable view of the network for the duration of one query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    pub stations: Vec<Station>,
    pub lines: Vec<Line>,
    pub sections: Vec<Section>,
}

impl NetworkSnapshot {
    /// Create a snapshot from its parts.
    pub fn new(stations: Vec<Station>, lines: Vec<Line>, sections: Vec<Section>) -> Self {
        Self {
            stations,
            lines,
            sections,
        }
    }

    /// Look up a station by id.
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.iter().find(|s| s.id == id)
    }

    /// Look up a line by id.
    pub fn line(&self, id: LineId) -> Option<&Line> {
        self.lines.iter().find(|l| l.id == id)
    }

    /// Build a graph over this snapshot weighted by `mode`.
    pub fn graph(&self, mode: WeightMode) -> Result<Graph, GraphError> {
        Graph::build(&self.stations, &self.lines, &self.sections, mode)
    }

    /// Returns the stations of a line in chain order, upstream end first.
    ///
    /// A line's sections must form one gapless, unbranched chain. A line
    /// without sections has no stations.
    pub fn line_stations(&self, line: LineId) -> Result<Vec<StationId>, GraphError> {
        if self.line(line).is_none() {
            return Err(GraphError::UnknownLine(line));
        }

        let mut next: HashMap<StationId, StationId> = HashMap::new();
        let mut downs: HashSet<StationId> = HashSet::new();
        for section in self.sections.iter().filter(|s| s.line == line) {
            if next.insert(section.up, section.down).is_some() || !downs.insert(section.down) {
                return Err(GraphError::BrokenChain(line));
            }
        }

        if next.is_empty() {
            return Ok(Vec::new());
        }

        let mut heads = next.keys().filter(|up| !downs.contains(*up));
        let head = match (heads.next(), heads.next()) {
            (Some(&head), None) => head,
            _ => return Err(GraphError::BrokenChain(line)),
        };

        let mut ordered = Vec::with_capacity(next.len() + 1);
        let mut current = Some(head);
        while let Some(station) = current {
            ordered.push(station);
            current = next.get(&station).copied();
        }

        // A detached cycle leaves sections unvisited
        if ordered.len() != next.len() + 1 {
            return Err(GraphError::BrokenChain(line));
        }

        Ok(ordered)
    }
}
