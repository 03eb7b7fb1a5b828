//! Shortest-path search over a network graph.
//!
//! Runs Dijkstra over the weight the graph was built for. Totals and the
//! set of traversed lines are always derived from the edges of the path
//! actually returned.

mod error;
mod finder;
mod result;
mod state;


pub use error::PathError;
pub use finder::find_path;
pub use result::PathResult;
