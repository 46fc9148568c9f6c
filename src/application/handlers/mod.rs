//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod design;

pub use design::{
    BuildSpecCommand, BuildSpecHandler, BuildSpecResult, GenerateArtworkCommand,
    GenerateArtworkError, GenerateArtworkHandler, GenerateArtworkResult,
};
