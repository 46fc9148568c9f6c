//! PaletteToken value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::HexColor;

/// Qualitative contrast between a palette's darkest and lightest colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Contrast {
    Low,
    Medium,
    High,
}

impl Contrast {
    /// Classifies a WCAG contrast ratio.
    ///
    /// 7:1 and above is high (AAA body text), 3:1 and above is medium
    /// (AA large text), anything lower is low.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= 7.0 {
            Contrast::High
        } else if ratio >= 3.0 {
            Contrast::Medium
        } else {
            Contrast::Low
        }
    }
}

impl fmt::Display for Contrast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Contrast::Low => "low",
            Contrast::Medium => "medium",
            Contrast::High => "high",
        };
        write!(f, "{}", s)
    }
}

/// A named, ordered set of colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteToken {
    pub name: String,
    pub description: String,
    pub hex: Vec<HexColor>,
    pub contrast: Contrast,
}

impl PaletteToken {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        hex: Vec<HexColor>,
        contrast: Contrast,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            hex,
            contrast,
        }
    }

    /// Returns the color at `index`, if present.
    pub fn color(&self, index: usize) -> Option<&HexColor> {
        self.hex.get(index)
    }

    /// Returns the last color, which layouts use as their accent.
    pub fn last(&self) -> Option<&HexColor> {
        self.hex.last()
    }

    /// Number of colors in the token.
    pub fn len(&self) -> usize {
        self.hex.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hex.is_empty()
    }
}
