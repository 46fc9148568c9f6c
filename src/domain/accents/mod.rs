//! Accents module - ordered, bounded accent list composition.

mod composer;

pub use composer::{AccentComposer, MAX_ACCENTS};
