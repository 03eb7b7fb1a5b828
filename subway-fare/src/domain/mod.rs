//! Domain types for the subway network.
//!
//! These are immutable snapshot values supplied by the host. Identity is
//! carried by typed ids so stations and lines are referenced, never copied
//! with mutable state.

mod line;
mod network;
mod section;
mod station;

pub use line::{Line, LineId};
pub use network::NetworkSnapshot;
pub use section::Section;
pub use station::{Station, StationId};
