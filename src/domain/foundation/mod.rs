//! Foundation module - Shared domain primitives.
//!
//! Contains the closed slug enumerations, small value objects and error types
//! that form the vocabulary of the design specification engine.

mod accent_type;
mod energy_level;
mod errors;
mod hex_color;
mod layout_archetype;
mod mood_slug;
mod sampling_weight;
mod theme_slug;
mod typography;

pub use accent_type::AccentType;
pub use energy_level::EnergyLevel;
pub use errors::{DomainError, ErrorCode, UnknownSlug, ValidationError};
pub use hex_color::HexColor;
pub use layout_archetype::LayoutArchetype;
pub use mood_slug::MoodSlug;
pub use sampling_weight::SamplingWeight;
pub use theme_slug::ThemeSlug;
pub use typography::{TypographyPairing, TypographyStyle};
