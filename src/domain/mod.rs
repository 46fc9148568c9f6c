//! Domain layer containing the design specification engine.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (slugs, value objects, errors)
//! - `registry` - Immutable theme, mood and layout knowledge bases
//! - `keywords` - Keyword sanitizing and motif detection
//! - `sequence` - Seeds and the deterministic sequence generator
//! - `palette` - Palette tokens, color analysis and blending
//! - `accents` - Accent composition policy
//! - `spec` - Spec Builder, the output contract and the brief renderer

pub mod accents;
pub mod foundation;
pub mod keywords;
pub mod palette;
pub mod registry;
pub mod sequence;
pub mod spec;
