//! EnergyLevel enum describing how forcefully a theme speaks.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Energy of a theme's copy and composition, from gentlest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyLevel {
    Soft,
    Supportive,
    Direct,
    Intense,
}

impl EnergyLevel {
    /// Returns true for energies whose headline is set uppercase with wide tracking.
    pub fn is_assertive(&self) -> bool {
        matches!(self, EnergyLevel::Direct | EnergyLevel::Intense)
    }
}

impl fmt::Display for EnergyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EnergyLevel::Soft => "soft",
            EnergyLevel::Supportive => "supportive",
            EnergyLevel::Direct => "direct",
            EnergyLevel::Intense => "intense",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_runs_soft_to_intense() {
        assert!(EnergyLevel::Soft < EnergyLevel::Supportive);
        assert!(EnergyLevel::Direct < EnergyLevel::Intense);
    }

    #[test]
    fn assertive_only_for_direct_and_intense() {
        assert!(!EnergyLevel::Soft.is_assertive());
        assert!(!EnergyLevel::Supportive.is_assertive());
        assert!(EnergyLevel::Direct.is_assertive());
        assert!(EnergyLevel::Intense.is_assertive());
    }

    #[test]
    fn serializes_to_snake_case_json() {
        let json = serde_json::to_string(&EnergyLevel::Supportive).unwrap();
        assert_eq!(json, "\"supportive\"");
    }
}
