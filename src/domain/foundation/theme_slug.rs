//! ThemeSlug enum naming the 15 emotional themes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::UnknownSlug;

/// The emotional-tone axis of a design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeSlug {
    Confidence,
    Peace,
    Focus,
    Gratitude,
    Abundance,
    Healing,
    Strength,
    Joy,
    Balance,
    Courage,
    Clarity,
    Renewal,
    Freedom,
    Passion,
    Wisdom,
}

impl ThemeSlug {
    /// Returns all themes in catalog order.
    pub fn all() -> &'static [ThemeSlug] {
        &[
            ThemeSlug::Confidence,
            ThemeSlug::Peace,
            ThemeSlug::Focus,
            ThemeSlug::Gratitude,
            ThemeSlug::Abundance,
            ThemeSlug::Healing,
            ThemeSlug::Strength,
            ThemeSlug::Joy,
            ThemeSlug::Balance,
            ThemeSlug::Courage,
            ThemeSlug::Clarity,
            ThemeSlug::Renewal,
            ThemeSlug::Freedom,
            ThemeSlug::Passion,
            ThemeSlug::Wisdom,
        ]
    }

    /// Returns the canonical slug.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeSlug::Confidence => "confidence",
            ThemeSlug::Peace => "peace",
            ThemeSlug::Focus => "focus",
            ThemeSlug::Gratitude => "gratitude",
            ThemeSlug::Abundance => "abundance",
            ThemeSlug::Healing => "healing",
            ThemeSlug::Strength => "strength",
            ThemeSlug::Joy => "joy",
            ThemeSlug::Balance => "balance",
            ThemeSlug::Courage => "courage",
            ThemeSlug::Clarity => "clarity",
            ThemeSlug::Renewal => "renewal",
            ThemeSlug::Freedom => "freedom",
            ThemeSlug::Passion => "passion",
            ThemeSlug::Wisdom => "wisdom",
        }
    }

    fn from_synonym(value: &str) -> Option<ThemeSlug> {
        match value {
            "calm" | "calm-morning" | "calm morning" | "serenity" => Some(ThemeSlug::Peace),
            "confident" => Some(ThemeSlug::Confidence),
            "grateful" | "thankful" => Some(ThemeSlug::Gratitude),
            "happiness" | "happy" => Some(ThemeSlug::Joy),
            "resilience" => Some(ThemeSlug::Strength),
            "brave" | "bravery" => Some(ThemeSlug::Courage),
            _ => None,
        }
    }
}

impl FromStr for ThemeSlug {
    type Err = UnknownSlug;

    /// Parses a canonical slug (case-insensitive) or one of the known synonyms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        ThemeSlug::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == normalized)
            .or_else(|| ThemeSlug::from_synonym(&normalized))
            .ok_or_else(|| UnknownSlug::new("theme", s))
    }
}

impl fmt::Display for ThemeSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_15_themes() {
        assert_eq!(ThemeSlug::all().len(), 15);
    }

    #[test]
    fn parses_every_canonical_slug() {
        for theme in ThemeSlug::all() {
            assert_eq!(theme.as_str().parse::<ThemeSlug>(), Ok(*theme));
        }
    }

    #[test]
    fn parsing_ignores_case_and_whitespace() {
        assert_eq!(" Confidence ".parse::<ThemeSlug>(), Ok(ThemeSlug::Confidence));
    }

    #[test]
    fn parses_synonyms() {
        assert_eq!("calm".parse::<ThemeSlug>(), Ok(ThemeSlug::Peace));
        assert_eq!("happiness".parse::<ThemeSlug>(), Ok(ThemeSlug::Joy));
    }

    #[test]
    fn rejects_unknown_slug() {
        let err = "melancholy".parse::<ThemeSlug>().unwrap_err();
        assert_eq!(err.kind, "theme");
        assert_eq!(err.value, "melancholy");
    }

    #[test]
    fn serializes_to_kebab_case_json() {
        let json = serde_json::to_string(&ThemeSlug::Gratitude).unwrap();
        assert_eq!(json, "\"gratitude\"");
    }
}
