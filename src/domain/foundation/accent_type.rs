//! AccentType tags carried by moods.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Decorative accent family a mood leans on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccentType {
    Minimal,
    Organic,
    Botanical,
    Textured,
    GradientHeavy,
    Playful,
    Celestial,
    Ornamental,
}

impl AccentType {
    /// Returns the accent phrase this tag contributes to a specification.
    pub fn phrase(&self) -> &'static str {
        match self {
            AccentType::Minimal => "fine hairline rules and generous negative space",
            AccentType::Organic => "hand-drawn organic dots and soft irregular shapes",
            AccentType::Botanical => "delicate botanical line sprigs",
            AccentType::Textured => "subtle cotton-paper grain texture",
            AccentType::GradientHeavy => "smooth tonal gradient washes",
            AccentType::Playful => "playful confetti marks and tiny doodles",
            AccentType::Celestial => "scattered star points and thin crescent arcs",
            AccentType::Ornamental => "engraved flourishes and vintage corner ornaments",
        }
    }
}

impl fmt::Display for AccentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AccentType::Minimal => "minimal",
            AccentType::Organic => "organic",
            AccentType::Botanical => "botanical",
            AccentType::Textured => "textured",
            AccentType::GradientHeavy => "gradient-heavy",
            AccentType::Playful => "playful",
            AccentType::Celestial => "celestial",
            AccentType::Ornamental => "ornamental",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_serde_slug() {
        let json = serde_json::to_string(&AccentType::GradientHeavy).unwrap();
        assert_eq!(json, format!("\"{}\"", AccentType::GradientHeavy));
    }

    #[test]
    fn every_tag_has_a_phrase() {
        for tag in [
            AccentType::Minimal,
            AccentType::Organic,
            AccentType::Botanical,
            AccentType::Textured,
            AccentType::GradientHeavy,
            AccentType::Playful,
            AccentType::Celestial,
            AccentType::Ornamental,
        ] {
            assert!(!tag.phrase().is_empty());
        }
    }
}
