//! River simulation engine.
//!
//! This module implements the one-dimensional river where predators and prey
//! move, collide, eat and breed.

pub mod census;
pub mod random;
pub mod river;
pub mod run;

pub use census::Census;
pub use random::RandomSource;
pub use river::{River, StepReport};
pub use run::{Run, Snapshot};
