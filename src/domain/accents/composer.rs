//! Accent Composer - merges keyword motifs, layout accents and mood accents.
//!
//! Priority and caps:
//!
//! 1. keyword motifs, up to three
//! 2. layout accents, truncated to `ceil(0.3 * len)`
//! 3. two mood/keyword accent phrases: the mood's first accent, then the
//!    keyword category's accent (or the mood's second accent when no
//!    category was detected)
//!
//! Phrases are compared case-insensitively and only the first occurrence
//! is kept.

use std::collections::HashSet;

use crate::domain::keywords::{KeywordDetectionResult, MAX_MOTIFS};
use crate::domain::registry::{LayoutDefinition, MoodDefinition};

/// Upper bound on accents in a specification.
pub const MAX_ACCENTS: usize = 7;

const LAYOUT_ACCENT_SHARE: f64 = 0.3;
const MOOD_ACCENT_SLOTS: usize = 2;

/// Stateless accent list composition.
pub struct AccentComposer;

impl AccentComposer {
    pub fn compose(
        keywords: &KeywordDetectionResult,
        layout: &LayoutDefinition,
        mood: &MoodDefinition,
    ) -> Vec<String> {
        let mut composed = Accents::default();

        for motif in keywords.objects.iter().take(MAX_MOTIFS) {
            composed.push(motif);
        }

        let layout_share = Self::layout_share(layout.accents.len());
        for accent in layout.accents.iter().take(layout_share) {
            composed.push(accent);
        }

        let mut mood_phrases = mood.accents.iter().map(|a| a.phrase());
        let first = mood_phrases.next();
        let second = match keywords.category {
            Some(category) => Some(category.accent()),
            None => mood_phrases.next(),
        };
        for phrase in first.into_iter().chain(second).take(MOOD_ACCENT_SLOTS) {
            composed.push(phrase);
        }

        composed.into_vec()
    }

    /// Number of layout accents kept out of `len`.
    pub fn layout_share(len: usize) -> usize {
        ((len as f64) * LAYOUT_ACCENT_SHARE).ceil() as usize
    }
}

#[derive(Default)]
struct Accents {
    items: Vec<String>,
    seen: HashSet<String>,
}

impl Accents {
    fn push(&mut self, phrase: &str) {
        let phrase = phrase.trim();
        if phrase.is_empty() || self.items.len() >= MAX_ACCENTS {
            return;
        }
        if self.seen.insert(phrase.to_lowercase()) {
            self.items.push(phrase.to_string());
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.items
    }
}
