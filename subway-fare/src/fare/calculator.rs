//! Fare calculator running the policy pipeline.

use tracing::debug;

use super::{FareConfig, FareContext, FareError, FarePolicy};
use crate::path::PathResult;

/// Prices paths using a validated configuration.
#[derive(Debug, Clone, Default)]
pub struct FareCalculator {
    config: FareConfig,
}

impl FareCalculator {
    /// Create a calculator, rejecting configurations that cannot be evaluated.
    pub fn new(config: FareConfig) -> Result<Self, FareError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &FareConfig {
        &self.config
    }

    /// Calculate the fare for a path and an optional rider age.
    ///
    /// Runs every policy of [`FarePolicy::PIPELINE`] in order starting
    /// from zero. Either the whole pipeline succeeds or the first error is
    /// returned.
    pub fn calculate(&self, path: &PathResult, age: Option<i32>) -> Result<u64, FareError> {
        let context = FareContext::new(path, age);

        let mut fare = 0;
        for policy in FarePolicy::PIPELINE {
            let next = policy.apply(&self.config, &context, fare)?;
            debug!(?policy, before = fare, after = next, "Applied fare policy");
            fare = next;
        }

        debug!(
            distance = path.distance(),
            lines = path.lines().len(),
            ?age,
            fare,
            "Calculated fare"
        );

        Ok(fare)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{Line, Station};
    use proptest::prelude::*;

    fn path(distance: u64, surcharges: Vec<u64>) -> PathResult {
        PathResult {
            stations: vec![Station::new(1, "A"), Station::new(2, "B")],
            distance,
            duration: 1,
            lines: surcharges
                .into_iter()
                .enumerate()
                .map(|(i, s)| Line::new(i as u64, "L", s))
                .collect(),
        }
    }

    fn age() -> impl Strategy<Value = Option<i32>> {
        prop_oneof![Just(None), (0..100i32).prop_map(Some)]
    }

    proptest! {
        /// Fares never decrease as distance grows
        #[test]
        fn monotonic_in_distance(distance in 1..500u64, extra in 0..100u64, age in age()) {
            let calculator = FareCalculator::default();
            let shorter = calculator.calculate(&path(distance, vec![]), age).unwrap();
            let longer = calculator.calculate(&path(distance + extra, vec![]), age).unwrap();
            prop_assert!(shorter <= longer);
        }

        /// Only the highest surcharge counts
        #[test]
        fn surcharge_max_not_sum(
            distance in 1..200u64,
            surcharges in prop::collection::vec(0..2000u64, 1..5),
            age in age(),
        ) {
            let calculator = FareCalculator::default();
            let max = surcharges.iter().copied().max().unwrap_or(0);
            let all = calculator.calculate(&path(distance, surcharges), age).unwrap();
            let single = calculator.calculate(&path(distance, vec![max]), age).unwrap();
            prop_assert_eq!(all, single);
        }

        /// Discounts never raise the fare
        #[test]
        fn discount_never_exceeds_adult_fare(distance in 1..200u64, age in 0..100i32) {
            let calculator = FareCalculator::default();
            let adult = calculator.calculate(&path(distance, vec![]), None).unwrap();
            let discounted = calculator.calculate(&path(distance, vec![]), Some(age)).unwrap();
            prop_assert!(discounted <= adult);
        }
    }
}
