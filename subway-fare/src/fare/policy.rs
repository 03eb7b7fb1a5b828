//! Fare policies and the order they run in.

use tracing::debug;

use super::{AgeBracket, FareConfig, FareError};
use crate::path::PathResult;

/// Inputs available to every fare policy.
#[derive(Debug, Clone, Copy)]
pub struct FareContext<'a> {
    /// Path being priced
    pub path: &'a PathResult,
    /// Rider's age, `None` if unknown
    pub age: Option<i32>,
}

impl<'a> FareContext<'a> {
    /// Create a new context.
    pub fn new(path: &'a PathResult, age: Option<i32>) -> Self {
        Self { path, age }
    }
}

/// One step of the fare pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FarePolicy {
    /// Adds the banded distance fare
    BaseDistance,
    /// Adds the highest surcharge among traversed lines
    LineSurcharge,
    /// Applies the rider's age bracket discount
    AgeDiscount,
}

impl FarePolicy {
    /// Policies in the order they are applied.
    pub const PIPELINE: [FarePolicy; 3] = [
        FarePolicy::BaseDistance,
        FarePolicy::LineSurcharge,
        FarePolicy::AgeDiscount,
    ];

    /// Transform the running fare.
    pub fn apply(
        self,
        config: &FareConfig,
        context: &FareContext<'_>,
        fare: u64,
    ) -> Result<u64, FareError> {
        match self {
            FarePolicy::BaseDistance => {
                Ok(fare.saturating_add(config.distance_fare(context.path.distance())))
            }
            FarePolicy::LineSurcharge => Ok(fare.saturating_add(context.path.max_surcharge())),
            FarePolicy::AgeDiscount => {
                let bracket = AgeBracket::from_age(context.age, config)?;
                debug!(bracket = bracket.name(), age = ?context.age, "Selected age bracket");
                Ok(bracket.apply(fare))
            }
        }
    }
}
