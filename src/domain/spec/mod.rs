//! Spec module - the Spec Builder, its request and output types, and the
//! brief renderer.

mod brief;
mod builder;
mod errors;
mod request;
mod specification;

pub use brief::render_brief;
pub use builder::SpecBuilder;
pub use errors::SpecError;
pub use request::{
    BuildSpecRequest, VariantKnobs, VariantOverrides, ACCENT_VARIANT_MAX, COPY_VARIANT_MAX,
    MAX_HEADLINE_CHARS, PALETTE_VARIANT_MAX, STYLE_VARIANT_MAX, TEXTURE_VARIANT_MAX,
};
pub use specification::{Constraints, DesignSpecification, SPEC_VERSION};
