use std::cmp::Ordering;

use petgraph::graph::NodeIndex;

/// Accumulated path cost: the query's weight first, the other metric
/// breaking ties.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd)]
pub(super) struct Cost {
    pub(super) primary: u64,
    pub(super) secondary: u64,
}

impl Cost {
    pub(super) fn extend(self, primary: u64, secondary: u64) -> Self {
        Self {
            primary: self.primary.saturating_add(primary),
            secondary: self.secondary.saturating_add(secondary),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq)]
pub(super) struct State {
    pub(super) cost: Cost,
    pub(super) node: NodeIndex,
}

// Min-heap by cost, then by vertex insertion order
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
