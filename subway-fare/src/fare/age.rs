//! Age bracket selection.

use std::ops::RangeInclusive;

use super::{BracketDiscount, FareConfig, FareError};

/// Ages paying the child fare.
pub const CHILD_AGES: RangeInclusive<i32> = 6..=12;

/// Ages paying the youth fare.
pub const YOUTH_AGES: RangeInclusive<i32> = 13..=18;

/// A rider's age bracket with the discount it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeBracket {
    /// Ages 6 to 12
    Child(BracketDiscount),
    /// Ages 13 to 18
    Youth(BracketDiscount),
    /// Everyone else, including riders of unknown age
    Adult,
}

impl AgeBracket {
    /// Select the bracket for an age.
    ///
    /// `None` means the age is unknown and selects `Adult`.
    ///
    /// # Examples
    ///
    /// ```
    /// use subway_fare::fare::{AgeBracket, FareConfig};
    ///
    /// let config = FareConfig::default();
    /// assert!(matches!(AgeBracket::from_age(Some(12), &config), Ok(AgeBracket::Child(_))));
    /// assert!(matches!(AgeBracket::from_age(Some(13), &config), Ok(AgeBracket::Youth(_))));
    /// assert_eq!(AgeBracket::from_age(None, &config), Ok(AgeBracket::Adult));
    /// assert!(AgeBracket::from_age(Some(-1), &config).is_err());
    /// ```
    pub fn from_age(age: Option<i32>, config: &FareConfig) -> Result<Self, FareError> {
        match age {
            Some(age) if age < 0 => Err(FareError::InvalidAge(age)),
            Some(age) if CHILD_AGES.contains(&age) => Ok(AgeBracket::Child(config.child)),
            Some(age) if YOUTH_AGES.contains(&age) => Ok(AgeBracket::Youth(config.youth)),
            _ => Ok(AgeBracket::Adult),
        }
    }

    /// Apply this bracket's discount to a fare.
    pub fn apply(&self, fare: u64) -> u64 {
        match self {
            AgeBracket::Child(discount) | AgeBracket::Youth(discount) => discount.apply(fare),
            AgeBracket::Adult => fare,
        }
    }

    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            AgeBracket::Child(_) => "child",
            AgeBracket::Youth(_) => "youth",
            AgeBracket::Adult => "adult",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bracket(age: Option<i32>) -> AgeBracket {
        AgeBracket::from_age(age, &FareConfig::default()).unwrap()
    }

    #[test]
    fn bracket_boundaries() {
        assert_eq!(bracket(Some(0)).name(), "adult");
        assert_eq!(bracket(Some(5)).name(), "adult");
        assert_eq!(bracket(Some(6)).name(), "child");
        assert_eq!(bracket(Some(12)).name(), "child");
        assert_eq!(bracket(Some(13)).name(), "youth");
        assert_eq!(bracket(Some(18)).name(), "youth");
        assert_eq!(bracket(Some(19)).name(), "adult");
        assert_eq!(bracket(Some(65)).name(), "adult");
        assert_eq!(bracket(None).name(), "adult");
    }

    #[test]
    fn negative_age_rejected() {
        let config = FareConfig::default();
        assert_eq!(
            AgeBracket::from_age(Some(-3), &config),
            Err(FareError::InvalidAge(-3))
        );
    }

    #[test]
    fn adult_is_a_no_op() {
        assert_eq!(AgeBracket::Adult.apply(1250), 1250);
        assert_eq!(AgeBracket::Adult.apply(0), 0);
    }

    #[test]
    fn brackets_carry_configured_constants() {
        let mut config = FareConfig::default();
        config.child = BracketDiscount::new(100, 10);

        let child = AgeBracket::from_age(Some(8), &config).unwrap();
        assert_eq!(child, AgeBracket::Child(BracketDiscount::new(100, 10)));
        assert_eq!(child.apply(1100), 900);
    }

    #[test]
    fn child_and_youth_differ() {
        assert_eq!(bracket(Some(12)).apply(1250), 450);
        assert_eq!(bracket(Some(13)).apply(1250), 720);
    }
}
