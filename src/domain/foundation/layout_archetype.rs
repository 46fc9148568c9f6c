//! LayoutArchetype enum naming the 20 compositional patterns.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::UnknownSlug;

/// A named compositional pattern describing where text and decoration sit.
///
/// Purely descriptive: the engine only selects one, the renderer interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutArchetype {
    Centered,
    CleanSerif,
    Botanical,
    GritDirectional,
    HaloOrbital,
    ArcFlow,
    Circular,
    Asymmetric,
    StackedVertical,
    DiagonalCascade,
    FramedBorder,
    SplitHorizon,
    ScatteredConstellation,
    GridModular,
    WaveFlow,
    LayeredDepth,
    MinimalCorner,
    RadialBurst,
    RibbonBanner,
    WindowArch,
}

impl LayoutArchetype {
    /// Returns all layout archetypes in catalog order.
    pub fn all() -> &'static [LayoutArchetype] {
        &[
            LayoutArchetype::Centered,
            LayoutArchetype::CleanSerif,
            LayoutArchetype::Botanical,
            LayoutArchetype::GritDirectional,
            LayoutArchetype::HaloOrbital,
            LayoutArchetype::ArcFlow,
            LayoutArchetype::Circular,
            LayoutArchetype::Asymmetric,
            LayoutArchetype::StackedVertical,
            LayoutArchetype::DiagonalCascade,
            LayoutArchetype::FramedBorder,
            LayoutArchetype::SplitHorizon,
            LayoutArchetype::ScatteredConstellation,
            LayoutArchetype::GridModular,
            LayoutArchetype::WaveFlow,
            LayoutArchetype::LayeredDepth,
            LayoutArchetype::MinimalCorner,
            LayoutArchetype::RadialBurst,
            LayoutArchetype::RibbonBanner,
            LayoutArchetype::WindowArch,
        ]
    }

    /// Returns the canonical slug.
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutArchetype::Centered => "centered",
            LayoutArchetype::CleanSerif => "clean-serif",
            LayoutArchetype::Botanical => "botanical",
            LayoutArchetype::GritDirectional => "grit-directional",
            LayoutArchetype::HaloOrbital => "halo-orbital",
            LayoutArchetype::ArcFlow => "arc-flow",
            LayoutArchetype::Circular => "circular",
            LayoutArchetype::Asymmetric => "asymmetric",
            LayoutArchetype::StackedVertical => "stacked-vertical",
            LayoutArchetype::DiagonalCascade => "diagonal-cascade",
            LayoutArchetype::FramedBorder => "framed-border",
            LayoutArchetype::SplitHorizon => "split-horizon",
            LayoutArchetype::ScatteredConstellation => "scattered-constellation",
            LayoutArchetype::GridModular => "grid-modular",
            LayoutArchetype::WaveFlow => "wave-flow",
            LayoutArchetype::LayeredDepth => "layered-depth",
            LayoutArchetype::MinimalCorner => "minimal-corner",
            LayoutArchetype::RadialBurst => "radial-burst",
            LayoutArchetype::RibbonBanner => "ribbon-banner",
            LayoutArchetype::WindowArch => "window-arch",
        }
    }
}

impl FromStr for LayoutArchetype {
    type Err = UnknownSlug;

    /// Parses a canonical slug, case-insensitively. Layouts have no synonyms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        LayoutArchetype::all()
            .iter()
            .copied()
            .find(|l| l.as_str() == normalized)
            .ok_or_else(|| UnknownSlug::new("layout", s))
    }
}

impl fmt::Display for LayoutArchetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_returns_20_layouts() {
        assert_eq!(LayoutArchetype::all().len(), 20);
    }

    #[test]
    fn slugs_are_unique() {
        let slugs: HashSet<_> = LayoutArchetype::all().iter().map(|l| l.as_str()).collect();
        assert_eq!(slugs.len(), 20);
    }

    #[test]
    fn parses_every_canonical_slug() {
        for layout in LayoutArchetype::all() {
            assert_eq!(layout.as_str().parse::<LayoutArchetype>(), Ok(*layout));
        }
    }

    #[test]
    fn rejects_unknown_slug() {
        let err = "zigzag".parse::<LayoutArchetype>().unwrap_err();
        assert_eq!(err.kind, "layout");
        assert_eq!(err.value, "zigzag");
    }

    #[test]
    fn serde_slug_matches_as_str() {
        for layout in LayoutArchetype::all() {
            let json = serde_json::to_string(layout).unwrap();
            assert_eq!(json, format!("\"{}\"", layout.as_str()));
        }
    }
}
