//! Keywords module - sanitizing and two-tier motif detection.

mod detector;
mod dictionary;
mod sanitizer;

pub use detector::{KeywordDetectionResult, KeywordDetector, MatchMode, MAX_MOTIFS};
pub use dictionary::KeywordCategory;
pub use sanitizer::{sanitize_keywords, DEFAULT_MAX_KEYWORD_CHARS};
