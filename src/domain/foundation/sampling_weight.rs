//! SamplingWeight value object (0.0-1.0 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A relative, non-normalized preference between 0.0 and 1.0 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SamplingWeight(f64);

impl SamplingWeight {
    /// No preference.
    pub const ZERO: Self = Self(0.0);

    /// Creates a weight, returning error if outside 0.0-1.0 or not finite.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            // Reported in hundredths so the integer range error stays readable.
            return Err(ValidationError::out_of_range(
                "weight",
                0,
                100,
                (value * 100.0).round() as i32,
            ));
        }
        Ok(Self(value))
    }

    /// Creates a weight, clamping to the valid range. NaN becomes zero.
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for SamplingWeight {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for SamplingWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
