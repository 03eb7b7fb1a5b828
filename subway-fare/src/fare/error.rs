//! Fare calculation errors.

/// Error from fare calculation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FareError {
    /// A negative age was supplied
    #[error("invalid age: {0}")]
    InvalidAge(i32),

    /// The fare configuration cannot be evaluated
    #[error("invalid fare configuration: {0}")]
    InvalidConfig(&'static str),
}
