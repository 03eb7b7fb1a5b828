//! Dijkstra search over a network graph.

use std::collections::{BTreeMap, BinaryHeap};

use petgraph::graph::{EdgeIndex, NodeIndex};
use tracing::{debug, trace};

use super::error::PathError;
use super::result::PathResult;
use super::state::{Cost, State};
use crate::domain::{LineId, StationId};
use crate::graph::Graph;

/// Find the minimum-weight path between two stations.
///
/// The graph's weight mode is minimized; the other metric only breaks ties
/// between equally cheap paths, which keeps both totals symmetric between
/// `a -> b` and `b -> a`. Remaining ties between predecessor sections are
/// resolved towards the lowest line id, then the lowest neighbouring
/// station id, so parallel sections of equal weight always resolve to the
/// same line.
///
/// # Errors
///
/// - [`PathError::SameStation`] if `source == destination`
/// - [`PathError::StationNotFound`] if either station is not in the graph
/// - [`PathError::NoPath`] if the stations are not connected
pub fn find_path(
    graph: &Graph,
    source: StationId,
    destination: StationId,
) -> Result<PathResult, PathError> {
    if source == destination {
        return Err(PathError::SameStation(source));
    }

    let start = graph
        .node(source)
        .ok_or(PathError::StationNotFound(source))?;
    let goal = graph
        .node(destination)
        .ok_or(PathError::StationNotFound(destination))?;

    let predecessors = search(graph, start, goal).ok_or(PathError::NoPath {
        from: source,
        to: destination,
    })?;

    let path = assemble(graph, start, goal, &predecessors);

    debug!(
        from = %source,
        to = %destination,
        mode = %graph.mode(),
        hops = path.hops(),
        distance = path.distance,
        duration = path.duration,
        "Found path"
    );

    Ok(path)
}

/// Predecessor of a settled vertex: the vertex it was reached from and the
/// section used.
type Predecessors = Vec<Option<(NodeIndex, EdgeIndex)>>;

/// Run Dijkstra from `start` until `goal` is settled.
///
/// Returns `None` if `goal` is unreachable.
fn search(graph: &Graph, start: NodeIndex, goal: NodeIndex) -> Option<Predecessors> {
    let primary = graph.mode();
    let secondary = primary.secondary();
    let n = graph.vertex_count();

    let mut best: Vec<Option<Cost>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut predecessors: Predecessors = vec![None; n];
    let mut heap = BinaryHeap::new();

    best[start.index()] = Some(Cost::default());
    heap.push(State {
        cost: Cost::default(),
        node: start,
    });

    while let Some(State { cost, node }) = heap.pop() {
        if settled[node.index()] {
            continue;
        }
        settled[node.index()] = true;

        if node == goal {
            return Some(predecessors);
        }

        for (next, edge_id, edge) in graph.neighbours(node) {
            if settled[next.index()] {
                continue;
            }

            let candidate = cost.extend(edge.weight(primary), edge.weight(secondary));

            match best[next.index()] {
                Some(known) if candidate > known => {}
                Some(known) if candidate == known => {
                    // Every equal-cost predecessor is settled before `next`,
                    // so the final choice is the smallest tie key
                    if let Some(current) = predecessors[next.index()] {
                        if tie_key(graph, node, edge_id) < tie_key(graph, current.0, current.1) {
                            predecessors[next.index()] = Some((node, edge_id));
                        }
                    }
                }
                _ => {
                    trace!(
                        from = %graph.station(node).id,
                        to = %graph.station(next).id,
                        line = %edge.line.id,
                        primary = candidate.primary,
                        secondary = candidate.secondary,
                        "Relaxed section"
                    );
                    best[next.index()] = Some(candidate);
                    predecessors[next.index()] = Some((node, edge_id));
                    heap.push(State {
                        cost: candidate,
                        node: next,
                    });
                }
            }
        }
    }

    None
}

fn tie_key(graph: &Graph, from: NodeIndex, edge: EdgeIndex) -> (LineId, StationId) {
    (graph.edge(edge).line.id, graph.station(from).id)
}

/// Walk predecessors back from `goal` and total the sections used.
fn assemble(
    graph: &Graph,
    start: NodeIndex,
    goal: NodeIndex,
    predecessors: &Predecessors,
) -> PathResult {
    let mut nodes = vec![goal];
    let mut edges = Vec::new();
    let mut current = goal;

    while current != start {
        match predecessors[current.index()] {
            Some((previous, edge)) => {
                nodes.push(previous);
                edges.push(edge);
                current = previous;
            }
            // Only `start` lacks a predecessor among settled vertices
            None => break,
        }
    }
    nodes.reverse();

    // Section weights are capped at MAX_SECTION_WEIGHT, so the sums fit
    let mut distance = 0;
    let mut duration = 0;
    let mut lines = BTreeMap::new();
    for edge in edges.iter().rev().map(|&e| graph.edge(e)) {
        distance += edge.distance;
        duration += edge.duration;
        lines
            .entry(edge.line.id)
            .or_insert_with(|| edge.line.as_ref().clone());
    }

    PathResult {
        stations: nodes
            .into_iter()
            .map(|n| graph.station(n).clone())
            .collect(),
        distance,
        duration,
        lines: lines.into_values().collect(),
    }
}
