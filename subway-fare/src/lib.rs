//! Subway route and fare engine.
//!
//! Given a snapshot of stations, lines and sections, finds the optimal
//! path between two stations and prices it according to distance bands,
//! line surcharges and the rider's age bracket.

pub mod domain;
pub mod fare;
pub mod graph;
pub mod path;
pub mod route;
