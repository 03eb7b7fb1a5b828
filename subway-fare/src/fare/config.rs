//! Fare configuration.

use serde::{Deserialize, Serialize};

use super::FareError;

/// A distance range priced per started increment.
///
/// Distance beyond `from` (up to `to`, if bounded) is split into increments
/// of `step`; every started increment costs `fee`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FareBand {
    /// Distance at which the band starts (exclusive)
    pub from: u64,
    /// Distance at which the band ends (inclusive), unbounded if `None`
    pub to: Option<u64>,
    /// Length of one increment
    pub step: u64,
    /// Price of one increment
    pub fee: u64,
}

impl FareBand {
    /// Create a new band.
    pub fn new(from: u64, to: Option<u64>, step: u64, fee: u64) -> Self {
        Self {
            from,
            to,
            step,
            fee,
        }
    }

    /// Number of started increments `distance` covers in this band.
    ///
    /// A partial increment counts in full.
    pub fn increments(&self, distance: u64) -> u64 {
        if distance <= self.from || self.step == 0 {
            return 0;
        }
        let upper = self.to.map_or(distance, |to| distance.min(to));
        (upper - self.from).div_ceil(self.step)
    }

    /// Price of the part of `distance` falling into this band.
    pub fn charge(&self, distance: u64) -> u64 {
        self.increments(distance).saturating_mul(self.fee)
    }
}

/// Deduct-then-discount constants of an age bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketDiscount {
    /// Amount subtracted from the fare before discounting
    pub deduction: u64,
    /// Percentage taken off what remains, 0 to 100
    pub discount_percent: u64,
}

impl BracketDiscount {
    /// Create new bracket constants.
    pub fn new(deduction: u64, discount_percent: u64) -> Self {
        Self {
            deduction,
            discount_percent,
        }
    }

    /// Subtract the deduction, discount the remainder and round down.
    ///
    /// Fares below the deduction come out as zero.
    pub fn apply(&self, fare: u64) -> u64 {
        let payable = 100 - self.discount_percent.min(100);
        let remainder = u128::from(fare.saturating_sub(self.deduction));
        // At most `fare`, so it fits back into u64
        (remainder * u128::from(payable) / 100) as u64
    }
}

/// Configuration parameters for fare calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FareConfig {
    /// Fare charged for any path up to `base_distance`.
    pub base_fare: u64,

    /// Distance covered by the base fare. The first band starts here.
    pub base_distance: u64,

    /// Additional distance bands, in ascending order.
    pub bands: Vec<FareBand>,

    /// Discount for riders aged 6 to 12.
    pub child: BracketDiscount,

    /// Discount for riders aged 13 to 18.
    pub youth: BracketDiscount,
}

impl FareConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        base_fare: u64,
        base_distance: u64,
        bands: Vec<FareBand>,
        child: BracketDiscount,
        youth: BracketDiscount,
    ) -> Self {
        Self {
            base_fare,
            base_distance,
            bands,
            child,
            youth,
        }
    }

    /// Check the configuration can be evaluated.
    ///
    /// Bands must have a positive step and be non-empty. The first starts at
    /// the base distance and each following one starts where the previous
    /// ends, so every distance beyond the base is priced by exactly one
    /// band. Only the last may be unbounded.
    /// Discount percentages may not exceed 100.
    pub fn validate(&self) -> Result<(), FareError> {
        let mut floor = self.base_distance;
        let mut open_ended = false;

        for band in &self.bands {
            if open_ended {
                return Err(FareError::InvalidConfig(
                    "only the last band may be unbounded",
                ));
            }
            if band.step == 0 {
                return Err(FareError::InvalidConfig("band step must be positive"));
            }
            if band.from != floor {
                return Err(FareError::InvalidConfig(
                    "bands must start at the base distance and follow each other without gaps",
                ));
            }
            match band.to {
                Some(to) if to <= band.from => {
                    return Err(FareError::InvalidConfig("band must not be empty"));
                }
                Some(to) => floor = to,
                None => open_ended = true,
            }
        }

        if self.child.discount_percent > 100 || self.youth.discount_percent > 100 {
            return Err(FareError::InvalidConfig(
                "discount percentage must not exceed 100",
            ));
        }

        Ok(())
    }

    /// Price of a path of the given distance before surcharge and discount.
    pub fn distance_fare(&self, distance: u64) -> u64 {
        self.bands
            .iter()
            .fold(self.base_fare, |fare, band| {
                fare.saturating_add(band.charge(distance))
            })
    }
}

impl Default for FareConfig {
    fn default() -> Self {
        Self {
            base_fare: 1250,
            base_distance: 10,
            bands: vec![
                FareBand::new(10, Some(50), 5, 100),
                FareBand::new(50, None, 8, 100),
            ],
            child: BracketDiscount::new(350, 50),
            youth: BracketDiscount::new(350, 20),
        }
    }
}
