//! Affirmation Studio - Design Specification Engine
//!
//! Turns a theme, a mood, free-text keywords and an optional seed into a
//! fully resolved, reproducible design specification for an image
//! generation service.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
