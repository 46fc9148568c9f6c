//! Design handlers - building specifications and generating artwork.

mod build_spec;
mod generate_artwork;

pub use build_spec::{BuildSpecCommand, BuildSpecHandler, BuildSpecResult};
pub use generate_artwork::{
    GenerateArtworkCommand, GenerateArtworkError, GenerateArtworkHandler, GenerateArtworkResult,
};
