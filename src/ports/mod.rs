//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `Clock` - Time source for unseeded builds
//! - `ImageGenerator` - Downstream image-generation service

mod clock;
mod image_generator;

pub use clock::Clock;
pub use image_generator::{GeneratedImage, GenerationError, ImageGenerator};
