//! Route planning: path search followed by fare calculation.
//!
//! This is the entry point for hosts. Each call builds its own graph from
//! the snapshot it is given, so a planner can be shared freely between
//! threads.

use serde::Serialize;
use tracing::debug;

use crate::domain::{NetworkSnapshot, StationId};
use crate::fare::{FareCalculator, FareConfig, FareError};
use crate::graph::{GraphError, WeightMode};
use crate::path::{PathError, PathResult, find_path};

/// Any error route planning can produce.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// The snapshot is malformed
    #[error(transparent)]
    InvalidTopology(#[from] GraphError),

    /// Path search failed
    #[error(transparent)]
    Path(#[from] PathError),

    /// Fare calculation failed
    #[error(transparent)]
    Fare(#[from] FareError),
}

/// A priced path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub path: PathResult,
    pub fare: u64,
}

/// Finds and prices routes.
#[derive(Debug, Clone, Default)]
pub struct RoutePlanner {
    calculator: FareCalculator,
}

impl RoutePlanner {
    /// Create a planner with the given fare configuration.
    pub fn new(config: FareConfig) -> Result<Self, RouteError> {
        Ok(Self {
            calculator: FareCalculator::new(config)?,
        })
    }

    /// Returns the fare calculator in use.
    pub fn calculator(&self) -> &FareCalculator {
        &self.calculator
    }

    /// Find the best path from `source` to `destination` under `mode` and
    /// price it for a rider of the given age.
    ///
    /// # Examples
    ///
    /// ```
    /// use subway_fare::domain::{Line, NetworkSnapshot, Section, Station, StationId};
    /// use subway_fare::graph::WeightMode;
    /// use subway_fare::route::RoutePlanner;
    ///
    /// let snapshot = NetworkSnapshot::new(
    ///     vec![Station::new(1, "A"), Station::new(2, "B"), Station::new(3, "C")],
    ///     vec![Line::new(1, "X", 0), Line::new(2, "Y", 500)],
    ///     vec![Section::new(1, 1, 2, 10, 10), Section::new(2, 2, 3, 10, 15)],
    /// );
    ///
    /// let route = RoutePlanner::default()
    ///     .plan(&snapshot, StationId(1), StationId(3), WeightMode::Distance, None)
    ///     .unwrap();
    ///
    /// assert_eq!(route.path.distance(), 20);
    /// assert_eq!(route.path.duration(), 25);
    /// assert_eq!(route.fare, 1250 + 200 + 500);
    /// ```
    pub fn plan(
        &self,
        snapshot: &NetworkSnapshot,
        source: StationId,
        destination: StationId,
        mode: WeightMode,
        age: Option<i32>,
    ) -> Result<Route, RouteError> {
        let graph = snapshot.graph(mode)?;
        let path = find_path(&graph, source, destination)?;
        let fare = self.calculator.calculate(&path, age)?;

        debug!(
            from = %source,
            to = %destination,
            mode = %mode,
            fare,
            "Planned route"
        );

        Ok(Route { path, fare })
    }
}
