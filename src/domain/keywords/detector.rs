//! Keyword Detector - maps free text to at most three motifs and one category.
//!
//! Matching runs in two tiers. Tier 1 looks for specific objects and
//! collects every hit in declaration order. Tier 2 only runs when tier 1
//! found nothing and assigns the first broad category whose terms appear.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::dictionary::{KeywordCategory, OBJECTS};
use super::sanitizer::{sanitize_keywords, DEFAULT_MAX_KEYWORD_CHARS};

/// Maximum motifs reported per detection.
pub const MAX_MOTIFS: usize = 3;

/// How trigger terms are matched against the keyword text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Trigger may appear anywhere, including inside longer words.
    #[default]
    Substring,
    /// Trigger must start and end on word boundaries.
    WordBoundary,
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MatchMode::Substring => "substring",
            MatchMode::WordBoundary => "word_boundary",
        };
        write!(f, "{}", s)
    }
}

/// Outcome of keyword detection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeywordDetectionResult {
    /// Motif descriptions, at most three.
    pub objects: Vec<String>,
    pub category: Option<KeywordCategory>,
}

impl KeywordDetectionResult {
    /// Category label, empty when nothing matched.
    pub fn category_label(&self) -> &'static str {
        self.category.map(|c| c.as_str()).unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty() && self.category.is_none()
    }
}

/// Stateless two-tier keyword matcher.
#[derive(Debug, Clone, Copy)]
pub struct KeywordDetector {
    max_chars: usize,
    mode: MatchMode,
}

impl Default for KeywordDetector {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_KEYWORD_CHARS, MatchMode::default())
    }
}

impl KeywordDetector {
    pub fn new(max_chars: usize, mode: MatchMode) -> Self {
        Self { max_chars, mode }
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Detects motifs and a category in raw user keywords.
    pub fn detect(&self, raw: &str) -> KeywordDetectionResult {
        let text = sanitize_keywords(raw, self.max_chars).to_lowercase();
        if text.is_empty() {
            return KeywordDetectionResult::default();
        }

        let hits: Vec<_> = OBJECTS
            .iter()
            .filter(|entry| entry.triggers.iter().any(|t| self.contains(&text, t)))
            .take(MAX_MOTIFS)
            .collect();

        if let Some(first) = hits.first() {
            return KeywordDetectionResult {
                objects: hits.iter().map(|e| e.motif.to_string()).collect(),
                category: Some(first.category),
            };
        }

        KeywordCategory::all()
            .iter()
            .find(|category| category.terms().iter().any(|t| self.contains(&text, t)))
            .map(|category| KeywordDetectionResult {
                objects: vec![category.generic_motif().to_string()],
                category: Some(*category),
            })
            .unwrap_or_default()
    }

    fn contains(&self, text: &str, term: &str) -> bool {
        match self.mode {
            MatchMode::Substring => text.contains(term),
            MatchMode::WordBoundary => text.match_indices(term).any(|(start, _)| {
                let end = start + term.len();
                let before = text[..start].chars().next_back();
                let after = text[end..].chars().next();
                !before.map_or(false, char::is_alphanumeric) && !after.map_or(false, char::is_alphanumeric)
            }),
        }
    }
}
