//! Typography value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A broad typeface family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypographyStyle {
    Serif,
    Sans,
    Display,
    Script,
}

impl TypographyStyle {
    /// Returns the renderer-facing description of this style.
    pub fn description(&self) -> &'static str {
        match self {
            TypographyStyle::Serif => "refined serif with classic proportions",
            TypographyStyle::Sans => "clean geometric sans-serif",
            TypographyStyle::Display => "expressive display face with strong character",
            TypographyStyle::Script => "flowing hand-lettered script",
        }
    }
}

impl fmt::Display for TypographyStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TypographyStyle::Serif => "serif",
            TypographyStyle::Sans => "sans",
            TypographyStyle::Display => "display",
            TypographyStyle::Script => "script",
        };
        write!(f, "{}", s)
    }
}

/// Headline and supporting-copy typefaces used together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypographyPairing {
    pub headline: TypographyStyle,
    pub support: TypographyStyle,
}

impl TypographyPairing {
    pub const fn new(headline: TypographyStyle, support: TypographyStyle) -> Self {
        Self { headline, support }
    }
}

impl fmt::Display for TypographyPairing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.headline, self.support)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairing_displays_headline_then_support() {
        let pairing = TypographyPairing::new(TypographyStyle::Serif, TypographyStyle::Script);
        assert_eq!(format!("{}", pairing), "serif/script");
    }

    #[test]
    fn pairing_serializes_with_named_fields() {
        let pairing = TypographyPairing::new(TypographyStyle::Display, TypographyStyle::Sans);
        let json = serde_json::to_string(&pairing).unwrap();
        assert_eq!(json, r#"{"headline":"display","support":"sans"}"#);
    }
}
