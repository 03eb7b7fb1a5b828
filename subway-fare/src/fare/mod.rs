//! Fare calculation.
//!
//! A path is priced by a fixed pipeline of policies, each transforming a
//! running fare: base distance fare, then line surcharge, then age
//! discount. All amounts are in the smallest currency unit.

mod age;
mod calculator;
mod config;
mod error;
mod policy;

pub use age::{AgeBracket, CHILD_AGES, YOUTH_AGES};
pub use calculator::FareCalculator;
pub use config::{BracketDiscount, FareBand, FareConfig};
pub use error::FareError;
pub use policy::{FareContext, FarePolicy};
