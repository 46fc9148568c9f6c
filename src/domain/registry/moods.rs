//! Mood registry table - accents, compatible layouts and sampling weight.

use crate::domain::foundation::{
    AccentType, LayoutArchetype, MoodSlug, SamplingWeight, ValidationError,
};

use crate::domain::foundation::AccentType as A;
use crate::domain::foundation::LayoutArchetype as L;

/// Everything the engine knows about one mood.
#[derive(Debug, Clone)]
pub struct MoodDefinition {
    pub slug: MoodSlug,
    /// Visual style direction handed to the renderer.
    pub description: &'static str,
    pub accents: &'static [AccentType],
    pub allowed_layouts: &'static [LayoutArchetype],
    /// How strongly the mood pulls toward the theme's most preferred layout.
    pub weight: SamplingWeight,
}

impl MoodDefinition {
    /// Returns true if the mood accepts the given layout.
    pub fn allows(&self, layout: LayoutArchetype) -> bool {
        self.allowed_layouts.contains(&layout)
    }
}

#[derive(Debug, Clone, Copy)]
pub(super) struct MoodEntry {
    pub slug: MoodSlug,
    pub description: &'static str,
    pub accents: &'static [AccentType],
    pub allowed_layouts: &'static [LayoutArchetype],
    pub weight: f64,
}

impl MoodEntry {
    pub(super) fn to_definition(self) -> Result<MoodDefinition, ValidationError> {
        Ok(MoodDefinition {
            slug: self.slug,
            description: self.description,
            accents: self.accents,
            allowed_layouts: self.allowed_layouts,
            weight: SamplingWeight::try_new(self.weight)?,
        })
    }
}

pub(super) const MOOD_ENTRIES: &[MoodEntry] = &[
    MoodEntry {
        slug: MoodSlug::Minimalist,
        description: "Restrained and typographic. Ink on warm paper, one idea per line, silence as a design element.",
        accents: &[A::Minimal, A::Organic],
        allowed_layouts: &[L::CleanSerif, L::Centered, L::MinimalCorner, L::GridModular, L::StackedVertical],
        weight: 0.45,
    },
    MoodEntry {
        slug: MoodSlug::Bohemian,
        description: "Free-spirited and layered. Earthen warmth, hand-drawn marks, relaxed irregular placement.",
        accents: &[A::Botanical, A::Organic, A::Textured],
        allowed_layouts: &[L::Botanical, L::HaloOrbital, L::ArcFlow, L::ScatteredConstellation, L::WaveFlow],
        weight: 0.30,
    },
    MoodEntry {
        slug: MoodSlug::ModernSerif,
        description: "Editorial and poised. High-contrast serif headlines, soft blush neutrals, magazine rhythm.",
        accents: &[A::Minimal, A::Organic, A::Textured],
        allowed_layouts: &[L::CleanSerif, L::Centered, L::StackedVertical, L::FramedBorder, L::SplitHorizon],
        weight: 0.35,
    },
    MoodEntry {
        slug: MoodSlug::Coastal,
        description: "Airy and sun-bleached. Seafoam, sand and driftwood with soft horizontal movement.",
        accents: &[A::Organic, A::Botanical, A::Minimal],
        allowed_layouts: &[L::CleanSerif, L::Botanical, L::WaveFlow, L::SplitHorizon, L::ArcFlow],
        weight: 0.25,
    },
    MoodEntry {
        slug: MoodSlug::Earthy,
        description: "Grounded and natural. Forest greens, clay and cream with tactile paper grain.",
        accents: &[A::Organic, A::Botanical, A::Textured],
        allowed_layouts: &[L::Botanical, L::HaloOrbital, L::LayeredDepth, L::Asymmetric, L::WindowArch],
        weight: 0.30,
    },
    MoodEntry {
        slug: MoodSlug::Vibrant,
        description: "Energetic and saturated. Bright accents against deep ink, bold directional movement.",
        accents: &[A::Organic, A::Botanical, A::GradientHeavy],
        allowed_layouts: &[L::GritDirectional, L::CleanSerif, L::RadialBurst, L::DiagonalCascade, L::RibbonBanner],
        weight: 0.15,
    },
    MoodEntry {
        slug: MoodSlug::Pastel,
        description: "Tender and light. Peach, lavender and mint washes with rounded gentle forms.",
        accents: &[A::Organic, A::Minimal, A::Botanical],
        allowed_layouts: &[L::HaloOrbital, L::Botanical, L::Circular, L::ArcFlow, L::RibbonBanner],
        weight: 0.25,
    },
    MoodEntry {
        slug: MoodSlug::Monochrome,
        description: "Stark and graphic. Black, cream and grey only, structure carried by type weight.",
        accents: &[A::Minimal, A::Organic, A::Textured],
        allowed_layouts: &[L::CleanSerif, L::Centered, L::GridModular, L::MinimalCorner, L::Asymmetric],
        weight: 0.40,
    },
    MoodEntry {
        slug: MoodSlug::Sunset,
        description: "Warm and glowing. Coral, amber and blush blended like late golden light.",
        accents: &[A::Organic, A::GradientHeavy, A::Botanical],
        allowed_layouts: &[L::HaloOrbital, L::Botanical, L::SplitHorizon, L::RadialBurst, L::WaveFlow],
        weight: 0.20,
    },
    MoodEntry {
        slug: MoodSlug::Forest,
        description: "Deep and sheltering. Layered greens, moss and olive with quiet woodland detail.",
        accents: &[A::Botanical, A::Organic, A::Textured],
        allowed_layouts: &[L::Botanical, L::CleanSerif, L::LayeredDepth, L::WindowArch, L::Asymmetric],
        weight: 0.30,
    },
    MoodEntry {
        slug: MoodSlug::Celestial,
        description: "Dreamy and nocturnal. Indigo depths, silver points of light, orbital arrangements.",
        accents: &[A::Celestial, A::Minimal, A::GradientHeavy],
        allowed_layouts: &[L::HaloOrbital, L::Circular, L::ScatteredConstellation, L::RadialBurst, L::Centered],
        weight: 0.35,
    },
    MoodEntry {
        slug: MoodSlug::Vintage,
        description: "Nostalgic and crafted. Aged paper, letterpress ink, engraved ornament.",
        accents: &[A::Ornamental, A::Textured, A::Botanical],
        allowed_layouts: &[L::FramedBorder, L::RibbonBanner, L::Centered, L::WindowArch, L::CleanSerif],
        weight: 0.30,
    },
    MoodEntry {
        slug: MoodSlug::Romantic,
        description: "Soft and heartfelt. Rose and blush tones, petals, flowing script.",
        accents: &[A::Botanical, A::Organic, A::Playful],
        allowed_layouts: &[L::Botanical, L::ArcFlow, L::Circular, L::FramedBorder, L::LayeredDepth],
        weight: 0.25,
    },
];
