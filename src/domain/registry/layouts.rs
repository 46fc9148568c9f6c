//! Layout catalog table - description, native palette and native accents.

use crate::domain::foundation::{LayoutArchetype, ValidationError};
use crate::domain::palette::{Contrast, PaletteToken};

use super::palette_entry::PaletteEntry;

/// Catalog entry for one layout archetype.
#[derive(Debug, Clone)]
pub struct LayoutDefinition {
    pub archetype: LayoutArchetype,
    pub description: &'static str,
    /// The layout's own colors. The last one is its accent.
    pub palette: PaletteToken,
    /// Decorative elements native to the layout, most characteristic first.
    pub accents: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub(super) struct LayoutEntry {
    pub archetype: LayoutArchetype,
    pub description: &'static str,
    pub palette: PaletteEntry,
    pub accents: &'static [&'static str],
}

impl LayoutEntry {
    pub(super) fn to_definition(self) -> Result<LayoutDefinition, ValidationError> {
        Ok(LayoutDefinition {
            archetype: self.archetype,
            description: self.description,
            palette: self.palette.to_token()?,
            accents: self.accents,
        })
    }
}

const fn palette(
    name: &'static str,
    description: &'static str,
    hex: &'static [&'static str],
) -> PaletteEntry {
    PaletteEntry {
        name,
        description,
        hex,
        contrast: Contrast::Medium,
    }
}

pub(super) const LAYOUT_ENTRIES: &[LayoutEntry] = &[
    LayoutEntry {
        archetype: LayoutArchetype::Centered,
        description: "Headline dead center with supporting lines stacked symmetrically beneath. Maximum negative space, calm axial balance.",
        palette: palette("centered_neutral", "paper white and graphite", &["#F4F1EC", "#5B5B5B"]),
        accents: &["single thin circle embracing the headline", "small centered divider dot", "soft vignette edge"],
    },
    LayoutEntry {
        archetype: LayoutArchetype::CleanSerif,
        description: "Centered headline with horizontal rules or underlines, clear grid rhythm, generous margins. Typography-forward with minimal decoration. Strong vertical alignment.",
        palette: palette("clean_serif_rules", "soft grey rules with a taupe accent", &["#DAD5CE", "#8C7B6B"]),
        accents: &["hairline horizontal rules", "confident underline beneath the headline", "small typographic ornament", "column guide marks"],
    },
    LayoutEntry {
        archetype: LayoutArchetype::Botanical,
        description: "Curved, organic text flow with leaf and floral accents. Soft edges, nature-inspired ornaments. Text may wrap gently or follow natural curves.",
        palette: palette("botanical_greens", "leaf green with olive accent", &["#A7B79A", "#6B7F4F"]),
        accents: &["trailing leaf vines", "pressed wildflower sprigs", "fern fronds unfurling", "scattered petals", "curved stem flourishes"],
    },
    LayoutEntry {
        archetype: LayoutArchetype::GritDirectional,
        description: "Dynamic composition with angled text fragments, arrows, or compass motifs. Directional energy, bold hierarchy, assertive placement.",
        palette: palette("grit_rust", "concrete grey with rust accent", &["#8A8580", "#B5532A"]),
        accents: &["bold directional arrows", "compass rose fragment", "angled stripe blocks", "distressed ink texture"],
    },
    LayoutEntry {
        archetype: LayoutArchetype::HaloOrbital,
        description: "Circular or radial text arrangement with dot clusters or radiating lines. Central focal point with orbital supporting elements.",
        palette: palette("halo_gold", "warm halo glow with gold accent", &["#F3E6C8", "#C9A227"]),
        accents: &["orbital dot clusters", "radiating fine lines", "halo ring around the headline", "small satellite circles"],
    },
    LayoutEntry {
        archetype: LayoutArchetype::ArcFlow,
        description: "Headline set on a gentle arc with supporting phrases following concentric curves below. Flowing, rhythmic, rainbow-like lift.",
        palette: palette("arc_dusk", "dusky rose with apricot accent", &["#E9C9C1", "#E39B6B"]),
        accents: &["concentric arc lines", "small rising sun half-circle", "dotted curve trail"],
    },
    LayoutEntry {
        archetype: LayoutArchetype::Circular,
        description: "Text wrapped around a circular badge or wreath, headline inside the circle. Seal-like, contained, complete.",
        palette: palette("circular_seal", "wreath green with antique gold accent", &["#C8CFC0", "#B8964A"]),
        accents: &["circular wreath border", "text set on a circle path", "small star at the circle's crown"],
    },
    LayoutEntry {
        archetype: LayoutArchetype::Asymmetric,
        description: "Off-center headline balanced by a single decorative counterweight. Tension and equilibrium, editorial whitespace.",
        palette: palette("asymmetric_clay", "warm clay with charcoal accent", &["#D8C3B0", "#3E3A36"]),
        accents: &["single oversized motif as counterweight", "offset rectangle block", "thin vertical rule"],
    },
    LayoutEntry {
        archetype: LayoutArchetype::StackedVertical,
        description: "Bold vertical stack of words filling the width, sizes stepping down line by line. Poster-like, declarative, powerful.",
        palette: palette("stacked_ink", "ink black with signal red accent", &["#2A2A2A", "#C8102E"]),
        accents: &["heavy horizontal bars between lines", "oversized quotation mark", "geometric corner frames"],
    },
    LayoutEntry {
        archetype: LayoutArchetype::DiagonalCascade,
        description: "Phrases cascade diagonally from upper left to lower right at varying sizes. Movement, momentum, forward progress.",
        palette: palette("cascade_dawn", "dawn blue with marigold accent", &["#AFC6D9", "#E5A823"]),
        accents: &["diagonal speed lines", "stepping stair blocks", "scattered motion dashes"],
    },
    LayoutEntry {
        archetype: LayoutArchetype::FramedBorder,
        description: "Text contained inside an ornamental or fine-line border with inset margins. Classic, gift-like, finished.",
        palette: palette("framed_heritage", "parchment with oxblood accent", &["#EDE3D1", "#6E2B2B"]),
        accents: &["double fine-line border", "corner ornaments", "small crest above the headline", "inset rule frame"],
    },
    LayoutEntry {
        archetype: LayoutArchetype::SplitHorizon,
        description: "Canvas divided by a horizon line, headline above and supporting phrases below. Landscape calm, grounded duality.",
        palette: palette("split_horizon", "sky haze with sand accent", &["#CBD8E0", "#D6B98C"]),
        accents: &["low horizon line", "half sun resting on the horizon", "distant hill silhouettes"],
    },
    LayoutEntry {
        archetype: LayoutArchetype::ScatteredConstellation,
        description: "Short phrases scattered like stars and joined by fine connecting lines. Playful discovery, airy and open.",
        palette: palette("constellation_night", "night blue with silver accent", &["#2C3550", "#C9CED6"]),
        accents: &["dotted constellation lines", "tiny four-point stars", "small planet circles", "sparkle clusters"],
    },
    LayoutEntry {
        archetype: LayoutArchetype::GridModular,
        description: "Phrases placed in a modular grid of cells around a dominant headline cell. Swiss structure, orderly and precise.",
        palette: palette("grid_swiss", "cool grey with cobalt accent", &["#E1E3E6", "#2456A6"]),
        accents: &["visible grid hairlines", "numbered cell markers", "solid color block cell"],
    },
    LayoutEntry {
        archetype: LayoutArchetype::WaveFlow,
        description: "Text following soft horizontal waves, phrases riding the crests. Tidal rhythm, soothing repetition.",
        palette: palette("wave_tide", "sea glass with deep teal accent", &["#CFE3DD", "#2F6F73"]),
        accents: &["gentle wave lines", "ripple rings", "sea foam dots"],
    },
    LayoutEntry {
        archetype: LayoutArchetype::LayeredDepth,
        description: "Overlapping translucent shapes behind the type, headline on the top layer. Dimensional, rich, immersive.",
        palette: palette("layered_velvet", "smoked mauve with plum accent", &["#D9C7CF", "#5B3256"]),
        accents: &["overlapping translucent circles", "soft drop shadows behind type", "paper cut-out layers"],
    },
    LayoutEntry {
        archetype: LayoutArchetype::MinimalCorner,
        description: "Small headline anchored in a corner, the rest of the canvas left open. Quiet confidence, gallery restraint.",
        palette: palette("corner_quiet", "bone white with stone accent", &["#F2EFEA", "#9A948B"]),
        accents: &["tiny corner mark", "single short rule", "whisper of grain texture"],
    },
    LayoutEntry {
        archetype: LayoutArchetype::RadialBurst,
        description: "Rays radiating from a central headline with phrases placed between the rays. Exuberant energy, sunburst optimism.",
        palette: palette("radial_sun", "pale butter with saffron accent", &["#F6E7B8", "#E08E0B"]),
        accents: &["sunburst rays", "radiating dash rings", "central glow", "small spark marks"],
    },
    LayoutEntry {
        archetype: LayoutArchetype::RibbonBanner,
        description: "Headline carried on a flowing ribbon banner, supporting phrases tucked above and below. Celebratory, crafted, festive.",
        palette: palette("ribbon_festive", "blush ribbon with berry accent", &["#F1D3D3", "#A23B5A"]),
        accents: &["folded ribbon banner", "small bunting flags", "hand-drawn sparkles"],
    },
    LayoutEntry {
        archetype: LayoutArchetype::WindowArch,
        description: "Text framed within a tall arched window shape, as if seen through a doorway. Sanctuary, threshold, quiet reverence.",
        palette: palette("arch_terracotta", "sand plaster with terracotta accent", &["#EADFD2", "#B5654D"]),
        accents: &["tall arched window outline", "soft light beam through the arch", "small potted plant at the sill"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_one_row_per_layout() {
        assert_eq!(LAYOUT_ENTRIES.len(), LayoutArchetype::all().len());
        for archetype in LayoutArchetype::all() {
            let rows = LAYOUT_ENTRIES.iter().filter(|e| e.archetype == *archetype).count();
            assert_eq!(rows, 1, "layout {} should have exactly one row", archetype);
        }
    }

    #[test]
    fn every_row_converts() {
        for entry in LAYOUT_ENTRIES {
            assert!(entry.to_definition().is_ok(), "layout {} failed", entry.archetype);
        }
    }

    #[test]
    fn every_layout_has_accents_and_an_accent_color() {
        for entry in LAYOUT_ENTRIES {
            assert!(!entry.accents.is_empty());
            assert!(!entry.palette.hex.is_empty());
        }
    }
}
