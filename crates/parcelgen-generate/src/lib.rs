//! Fixture generators for parcelgen.
//!
//! This crate turns the rule catalog into drivers with randomized rule
//! assignments and packages with randomized attributes. Every generator
//! takes an explicit random source; the seeded wrappers make runs
//! reproducible.

pub mod drivers;
pub mod engine;
pub mod errors;
pub mod model;
pub mod packages;
pub mod rng;

pub use drivers::{generate_driver_rules, generate_driver_rules_with_rng};
pub use engine::{FixtureEngine, FixtureSet};
pub use errors::GenerationError;
pub use model::{GenerateOptions, GenerationReport};
pub use packages::{generate_packages, generate_packages_with_rng};
