//! Sequence module - seeds and the deterministic variant generator.

mod generator;
mod seed;

pub use generator::SeededSequence;
pub use seed::{Seed, SeedOrigin, SEQUENCE_ALGORITHM_VERSION};
