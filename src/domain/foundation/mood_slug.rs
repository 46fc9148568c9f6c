//! MoodSlug enum naming the 13 visual moods.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::UnknownSlug;

/// The accent-texture and layout-compatibility axis of a design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoodSlug {
    Minimalist,
    Bohemian,
    ModernSerif,
    Coastal,
    Earthy,
    Vibrant,
    Pastel,
    Monochrome,
    Sunset,
    Forest,
    Celestial,
    Vintage,
    Romantic,
}

impl MoodSlug {
    /// Returns all moods in catalog order.
    pub fn all() -> &'static [MoodSlug] {
        &[
            MoodSlug::Minimalist,
            MoodSlug::Bohemian,
            MoodSlug::ModernSerif,
            MoodSlug::Coastal,
            MoodSlug::Earthy,
            MoodSlug::Vibrant,
            MoodSlug::Pastel,
            MoodSlug::Monochrome,
            MoodSlug::Sunset,
            MoodSlug::Forest,
            MoodSlug::Celestial,
            MoodSlug::Vintage,
            MoodSlug::Romantic,
        ]
    }

    /// Returns the canonical slug.
    pub fn as_str(&self) -> &'static str {
        match self {
            MoodSlug::Minimalist => "minimalist",
            MoodSlug::Bohemian => "bohemian",
            MoodSlug::ModernSerif => "modern-serif",
            MoodSlug::Coastal => "coastal",
            MoodSlug::Earthy => "earthy",
            MoodSlug::Vibrant => "vibrant",
            MoodSlug::Pastel => "pastel",
            MoodSlug::Monochrome => "monochrome",
            MoodSlug::Sunset => "sunset",
            MoodSlug::Forest => "forest",
            MoodSlug::Celestial => "celestial",
            MoodSlug::Vintage => "vintage",
            MoodSlug::Romantic => "romantic",
        }
    }

    fn from_synonym(value: &str) -> Option<MoodSlug> {
        match value {
            "minimal" => Some(MoodSlug::Minimalist),
            "boho" => Some(MoodSlug::Bohemian),
            "modern" | "modern serif" => Some(MoodSlug::ModernSerif),
            "coast" | "beach" => Some(MoodSlug::Coastal),
            "mono" | "black-and-white" => Some(MoodSlug::Monochrome),
            "cosmic" => Some(MoodSlug::Celestial),
            "retro" => Some(MoodSlug::Vintage),
            _ => None,
        }
    }
}

impl FromStr for MoodSlug {
    type Err = UnknownSlug;

    /// Parses a canonical slug (case-insensitive) or one of the known synonyms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        MoodSlug::all()
            .iter()
            .copied()
            .find(|m| m.as_str() == normalized)
            .or_else(|| MoodSlug::from_synonym(&normalized))
            .ok_or_else(|| UnknownSlug::new("mood", s))
    }
}

impl fmt::Display for MoodSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
