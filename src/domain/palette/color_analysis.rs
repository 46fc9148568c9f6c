//! Color analysis - translates hex codes into measurable and verbal qualities.
//!
//! Luminance and contrast follow the WCAG 2.x definitions.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::HexColor;

use super::Contrast;

/// Perceived warmth of a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Temperature {
    Warm,
    Cool,
    Neutral,
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Temperature::Warm => "warm",
            Temperature::Cool => "cool",
            Temperature::Neutral => "neutral",
        };
        write!(f, "{}", s)
    }
}

/// Stateless color calculations.
pub struct ColorAnalysis;

impl ColorAnalysis {
    /// WCAG relative luminance in 0.0 (black) to 1.0 (white).
    pub fn relative_luminance(color: &HexColor) -> f64 {
        let [r, g, b] = color.rgb().map(|channel| {
            let c = f64::from(channel) / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        });
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }

    /// WCAG contrast ratio between two colors, 1.0 to 21.0.
    pub fn contrast_ratio(a: &HexColor, b: &HexColor) -> f64 {
        let la = Self::relative_luminance(a);
        let lb = Self::relative_luminance(b);
        let (light, dark) = if la >= lb { (la, lb) } else { (lb, la) };
        (light + 0.05) / (dark + 0.05)
    }

    /// Contrast level between the darkest and lightest colors of a set.
    ///
    /// Sets with fewer than two colors have no contrast.
    pub fn palette_contrast(colors: &[HexColor]) -> Contrast {
        let mut luminances = colors.iter().map(Self::relative_luminance);
        let Some(first) = luminances.next() else {
            return Contrast::Low;
        };
        let (min, max) = luminances.fold((first, first), |(lo, hi), l| (lo.min(l), hi.max(l)));
        Contrast::from_ratio((max + 0.05) / (min + 0.05))
    }

    /// Classifies a color as warm, cool or neutral.
    pub fn temperature(color: &HexColor) -> Temperature {
        let [r, g, b] = color.rgb().map(i32::from);

        if r > g + 20 && r > b + 20 {
            return Temperature::Warm;
        }
        if b > r + 20 || (g > r + 10 && b > r) {
            return Temperature::Cool;
        }
        Temperature::Neutral
    }

    /// A human-readable approximate name for the color.
    pub fn describe(color: &HexColor) -> &'static str {
        let [r, g, b] = color.rgb().map(i32::from);
        let luminance = Self::relative_luminance(color);

        if luminance < 0.15 {
            if r < 30 && g < 30 && b < 30 {
                return "deep charcoal";
            }
            if r > g && r > b {
                return "deep burgundy";
            }
            if g > r && g > b {
                return "deep forest green";
            }
            if b > r && b > g {
                return "midnight blue";
            }
            return "dark earth tone";
        }

        if luminance > 0.85 {
            if r > 250 && g > 250 && b > 250 {
                return "pure white";
            }
            if (r - g).abs() < 10 && (g - b).abs() < 10 {
                return "soft cream";
            }
            return "light neutral";
        }

        if r > g + 30 && r > b + 30 {
            if r > 200 && g > 150 {
                return "warm terracotta";
            }
            if r > 180 {
                return "coral";
            }
            return "warm rust";
        }
        if g > r + 20 && g > b {
            return "sage green";
        }
        if b > r + 30 {
            return "soft blue";
        }
        if r > 180 && g > 140 && b < 80 {
            return "metallic gold";
        }
        if r > g && g > b && r < 160 {
            return "warm brown";
        }
        "neutral tone"
    }
}
