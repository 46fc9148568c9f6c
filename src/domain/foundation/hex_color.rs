//! HexColor value object (`#RGB` or `#RRGGBB`).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A CSS-style hex color, kept exactly as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    /// Validates and wraps a hex color string.
    ///
    /// Accepts `#RGB` and `#RRGGBB` in either case. The original spelling is
    /// preserved so overrides round-trip verbatim.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let digits = value
            .strip_prefix('#')
            .ok_or_else(|| ValidationError::invalid_format("color", format!("'{}' must start with '#'", value)))?;

        if digits.len() != 3 && digits.len() != 6 {
            return Err(ValidationError::invalid_format(
                "color",
                format!("'{}' must have 3 or 6 hex digits", value),
            ));
        }

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ValidationError::invalid_format(
                "color",
                format!("'{}' contains non-hex characters", value),
            ));
        }

        Ok(Self(value.to_string()))
    }

    /// Returns the color as written.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the 8-bit red, green and blue channels.
    pub fn rgb(&self) -> [u8; 3] {
        let digits = &self.0[1..];
        let channel = |s: &str| u8::from_str_radix(s, 16).unwrap_or(0);

        if digits.len() == 3 {
            let mut out = [0u8; 3];
            for (i, c) in digits.chars().enumerate() {
                let nibble = c.to_digit(16).unwrap_or(0) as u8;
                out[i] = nibble * 17;
            }
            out
        } else {
            [
                channel(&digits[0..2]),
                channel(&digits[2..4]),
                channel(&digits[4..6]),
            ]
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
