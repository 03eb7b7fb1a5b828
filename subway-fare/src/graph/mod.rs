//! Weighted multigraph over a network snapshot.
//!
//! A `Graph` is a transient value built fresh for each query. Vertices are
//! stations, edges are sections traversable in both directions, and each
//! edge remembers the line that owns it so surcharges can be resolved from
//! the edges a path actually uses. Parallel edges between the same pair of
//! stations (one per line) are kept.

mod error;
mod weight;

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use tracing::debug;

use crate::domain::{Line, LineId, Section, Station, StationId};

pub use error::GraphError;
pub use weight::{InvalidWeightMode, WeightMode};

/// Largest distance or duration a single section may carry.
///
/// Keeps path totals exact: a path has fewer than `u32::MAX` sections, so
/// summing them cannot overflow `u64`.
pub const MAX_SECTION_WEIGHT: i64 = u32::MAX as i64;

/// A traversable section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// Line serving this section
    pub line: Arc<Line>,
    /// Distance in distance units (always positive)
    pub distance: u64,
    /// Duration in time units (always positive)
    pub duration: u64,
}

impl Edge {
    /// Returns this edge's weight under the given mode.
    pub fn weight(&self, mode: WeightMode) -> u64 {
        match mode {
            WeightMode::Distance => self.distance,
            WeightMode::Duration => self.duration,
        }
    }
}

/// Undirected weighted multigraph of stations.
#[derive(Debug, Clone)]
pub struct Graph {
    mode: WeightMode,
    inner: UnGraph<Station, Edge>,
    index: HashMap<StationId, NodeIndex>,
}

impl Graph {
    /// Build a graph from a snapshot of stations, lines and sections.
    ///
    /// Fails if ids are duplicated, if a section references an unknown
    /// station or line, loops on one station, or carries a distance or
    /// duration that is non-positive or above [`MAX_SECTION_WEIGHT`].
    pub fn build(
        stations: &[Station],
        lines: &[Line],
        sections: &[Section],
        mode: WeightMode,
    ) -> Result<Self, GraphError> {
        let mut inner = UnGraph::with_capacity(stations.len(), sections.len());
        let mut index = HashMap::with_capacity(stations.len());

        for station in stations {
            match index.entry(station.id) {
                Entry::Occupied(_) => return Err(GraphError::DuplicateStation(station.id)),
                Entry::Vacant(slot) => {
                    slot.insert(inner.add_node(station.clone()));
                }
            }
        }

        let mut line_index: HashMap<LineId, Arc<Line>> = HashMap::with_capacity(lines.len());
        for line in lines {
            if line_index.insert(line.id, Arc::new(line.clone())).is_some() {
                return Err(GraphError::DuplicateLine(line.id));
            }
        }

        for section in sections {
            let line = line_index
                .get(&section.line)
                .cloned()
                .ok_or(GraphError::UnknownLine(section.line))?;
            let (up, down) = resolve_endpoints(&index, section)?;
            let (distance, duration) = validate_weights(section)?;

            inner.add_edge(
                up,
                down,
                Edge {
                    line,
                    distance,
                    duration,
                },
            );
        }

        debug!(
            mode = %mode,
            vertices = inner.node_count(),
            edges = inner.edge_count(),
            "Built network graph"
        );

        Ok(Self { mode, inner, index })
    }

    /// Returns the weight mode this graph was built for.
    pub fn mode(&self) -> WeightMode {
        self.mode
    }

    /// Returns true if the station is a vertex of this graph.
    pub fn contains(&self, station: StationId) -> bool {
        self.index.contains_key(&station)
    }

    /// Returns the number of stations.
    pub fn vertex_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Returns the number of sections, counting parallel ones separately.
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    pub(crate) fn node(&self, station: StationId) -> Option<NodeIndex> {
        self.index.get(&station).copied()
    }

    pub(crate) fn station(&self, node: NodeIndex) -> &Station {
        &self.inner[node]
    }

    pub(crate) fn edge(&self, edge: EdgeIndex) -> &Edge {
        &self.inner[edge]
    }

    /// Iterate over `(neighbour, edge id, edge)` for every section touching `node`.
    pub(crate) fn neighbours(
        &self,
        node: NodeIndex,
    ) -> impl Iterator<Item = (NodeIndex, EdgeIndex, &Edge)> + '_ {
        self.inner.edges(node).map(move |e| {
            let other = if e.source() == node {
                e.target()
            } else {
                e.source()
            };
            (other, e.id(), e.weight())
        })
    }
}

fn resolve_endpoints(
    index: &HashMap<StationId, NodeIndex>,
    section: &Section,
) -> Result<(NodeIndex, NodeIndex), GraphError> {
    if section.up == section.down {
        return Err(GraphError::SelfLoop {
            line: section.line,
            station: section.up,
        });
    }

    let lookup = |station: StationId| {
        index
            .get(&station)
            .copied()
            .ok_or(GraphError::UnknownStation {
                line: section.line,
                station,
            })
    };

    Ok((lookup(section.up)?, lookup(section.down)?))
}

fn validate_weights(section: &Section) -> Result<(u64, u64), GraphError> {
    if section.distance <= 0 {
        return Err(GraphError::NonPositiveDistance {
            line: section.line,
            up: section.up,
            down: section.down,
            distance: section.distance,
        });
    }
    if section.duration <= 0 {
        return Err(GraphError::NonPositiveDuration {
            line: section.line,
            up: section.up,
            down: section.down,
            duration: section.duration,
        });
    }
    for weight in [section.distance, section.duration] {
        if weight > MAX_SECTION_WEIGHT {
            return Err(GraphError::WeightTooLarge {
                line: section.line,
                up: section.up,
                down: section.down,
                weight,
            });
        }
    }
    Ok((section.distance as u64, section.duration as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stations() -> Vec<Station> {
        vec![
            Station::new(1, "Gangnam"),
            Station::new(2, "Yangjae"),
            Station::new(3, "Gyodae"),
        ]
    }

    fn lines() -> Vec<Line> {
        vec![Line::new(1, "Line 2", 0), Line::new(2, "Shinbundang", 900)]
    }

    #[test]
    fn builds_vertices_and_parallel_edges() {
        let sections = vec![
            Section::new(1, 1, 2, 10, 5),
            Section::new(2, 1, 2, 8, 7),
            Section::new(1, 2, 3, 4, 4),
        ];
        let graph =
            Graph::build(&stations(), &lines(), &sections, WeightMode::Distance).unwrap();

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.mode(), WeightMode::Distance);
        assert!(graph.contains(StationId(3)));
        assert!(!graph.contains(StationId(4)));
    }

    #[test]
    fn edges_are_traversable_both_ways() {
        let sections = vec![Section::new(1, 1, 2, 10, 5)];
        let graph =
            Graph::build(&stations(), &lines(), &sections, WeightMode::Duration).unwrap();

        let a = graph.node(StationId(1)).unwrap();
        let b = graph.node(StationId(2)).unwrap();

        let from_a: Vec<_> = graph
            .neighbours(a)
            .map(|(n, _, e)| (n, e.weight(graph.mode())))
            .collect();
        let from_b: Vec<_> = graph
            .neighbours(b)
            .map(|(n, _, e)| (n, e.weight(graph.mode())))
            .collect();

        assert_eq!(from_a, vec![(b, 5)]);
        assert_eq!(from_b, vec![(a, 5)]);
    }

    #[test]
    fn edge_weight_follows_mode() {
        let edge = Edge {
            line: Arc::new(Line::new(1, "Line 2", 0)),
            distance: 12,
            duration: 3,
        };
        assert_eq!(edge.weight(WeightMode::Distance), 12);
        assert_eq!(edge.weight(WeightMode::Duration), 3);
    }

    #[test]
    fn reject_unknown_station() {
        let sections = vec![Section::new(1, 1, 9, 10, 5)];
        let err = Graph::build(&stations(), &lines(), &sections, WeightMode::Distance).unwrap_err();
        assert_eq!(
            err,
            GraphError::UnknownStation {
                line: LineId(1),
                station: StationId(9)
            }
        );
    }

    #[test]
    fn reject_unknown_line() {
        let sections = vec![Section::new(7, 1, 2, 10, 5)];
        let err = Graph::build(&stations(), &lines(), &sections, WeightMode::Distance).unwrap_err();
        assert_eq!(err, GraphError::UnknownLine(LineId(7)));
    }

    #[test]
    fn reject_self_loop() {
        let sections = vec![Section::new(1, 2, 2, 10, 5)];
        let err = Graph::build(&stations(), &lines(), &sections, WeightMode::Distance).unwrap_err();
        assert!(matches!(err, GraphError::SelfLoop { .. }));
    }

    #[test]
    fn reject_non_positive_weights() {
        for distance in [0, -3] {
            let sections = vec![Section::new(1, 1, 2, distance, 5)];
            let err =
                Graph::build(&stations(), &lines(), &sections, WeightMode::Duration).unwrap_err();
            assert!(matches!(err, GraphError::NonPositiveDistance { .. }));
        }

        for duration in [0, -1] {
            let sections = vec![Section::new(1, 1, 2, 10, duration)];
            let err =
                Graph::build(&stations(), &lines(), &sections, WeightMode::Distance).unwrap_err();
            assert!(matches!(err, GraphError::NonPositiveDuration { .. }));
        }
    }

    #[test]
    fn reject_oversized_weights() {
        let sections = vec![Section::new(1, 1, 2, i64::MAX, 5)];
        let err = Graph::build(&stations(), &lines(), &sections, WeightMode::Duration).unwrap_err();
        assert_eq!(
            err,
            GraphError::WeightTooLarge {
                line: LineId(1),
                up: StationId(1),
                down: StationId(2),
                weight: i64::MAX,
            }
        );

        let sections = vec![Section::new(1, 1, 2, 10, MAX_SECTION_WEIGHT + 1)];
        let err = Graph::build(&stations(), &lines(), &sections, WeightMode::Distance).unwrap_err();
        assert!(matches!(err, GraphError::WeightTooLarge { .. }));

        let sections = vec![Section::new(1, 1, 2, MAX_SECTION_WEIGHT, MAX_SECTION_WEIGHT)];
        assert!(Graph::build(&stations(), &lines(), &sections, WeightMode::Distance).is_ok());
    }

    #[test]
    fn reject_duplicate_ids() {
        let mut dup_stations = stations();
        dup_stations.push(Station::new(1, "Gangnam again"));
        let err = Graph::build(&dup_stations, &lines(), &[], WeightMode::Distance).unwrap_err();
        assert_eq!(err, GraphError::DuplicateStation(StationId(1)));

        let mut dup_lines = lines();
        dup_lines.push(Line::new(2, "Shinbundang again", 0));
        let err = Graph::build(&stations(), &dup_lines, &[], WeightMode::Distance).unwrap_err();
        assert_eq!(err, GraphError::DuplicateLine(LineId(2)));
    }

    #[test]
    fn empty_snapshot_builds_empty_graph() {
        let graph = Graph::build(&[], &[], &[], WeightMode::Distance).unwrap();
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }
}
