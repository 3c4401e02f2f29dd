//! Domain models for the care-transition assessment system.

mod condition;
mod outcome;
mod snapshot;

pub use condition::*;
pub use outcome::*;
pub use snapshot::*;
