//! Theme registry table - emotional tone, copy and palette for each theme.

use crate::domain::foundation::{
    EnergyLevel, LayoutArchetype, ThemeSlug, TypographyPairing, TypographyStyle, ValidationError,
};
use crate::domain::palette::{Contrast, PaletteToken};

use super::palette_entry::PaletteEntry;

/// Lines in every phrase template.
pub const PHRASE_TEMPLATE_LINES: usize = 4;

/// A fixed-arity affirmation template.
pub type PhraseTemplate = [&'static str; PHRASE_TEMPLATE_LINES];

/// Everything the engine knows about one theme.
#[derive(Debug, Clone)]
pub struct ThemeDefinition {
    pub slug: ThemeSlug,
    /// Emotional tone description.
    pub emotion: &'static str,
    /// Preferred layouts, most preferred first.
    pub default_layouts: &'static [LayoutArchetype],
    pub typography: TypographyPairing,
    pub energy_level: EnergyLevel,
    pub palette: PaletteToken,
    pub headline_lexicon: &'static [&'static str],
    pub phrase_templates: &'static [PhraseTemplate],
}

#[derive(Debug, Clone, Copy)]
pub(super) struct ThemeEntry {
    pub slug: ThemeSlug,
    pub emotion: &'static str,
    pub default_layouts: &'static [LayoutArchetype],
    pub typography: TypographyPairing,
    pub energy_level: EnergyLevel,
    pub palette: PaletteEntry,
    pub headline_lexicon: &'static [&'static str],
    pub phrase_templates: &'static [PhraseTemplate],
}

impl ThemeEntry {
    pub(super) fn to_definition(self) -> Result<ThemeDefinition, ValidationError> {
        Ok(ThemeDefinition {
            slug: self.slug,
            emotion: self.emotion,
            default_layouts: self.default_layouts,
            typography: self.typography,
            energy_level: self.energy_level,
            palette: self.palette.to_token()?,
            headline_lexicon: self.headline_lexicon,
            phrase_templates: self.phrase_templates,
        })
    }
}

pub(super) const THEME_ENTRIES: &[ThemeEntry] = &[
    ThemeEntry {
        slug: ThemeSlug::Confidence,
        emotion: "assertive self-assurance, unshakeable self-belief, personal power",
        default_layouts: &[
            LayoutArchetype::CleanSerif,
            LayoutArchetype::GritDirectional,
            LayoutArchetype::StackedVertical,
            LayoutArchetype::Centered,
        ],
        typography: TypographyPairing::new(TypographyStyle::Serif, TypographyStyle::Sans),
        energy_level: EnergyLevel::Direct,
        palette: PaletteEntry {
            name: "ink_cream_gold",
            description: "ink black, warm cream, burnished gold",
            hex: &["#1a1a1a", "#F5F0E8", "#C9A227"],
            contrast: Contrast::High,
        },
        headline_lexicon: &[
            "I AM CAPABLE",
            "I AM UNSTOPPABLE",
            "IN MY POWER",
            "I TRUST MYSELF",
            "MY VOICE MATTERS",
        ],
        phrase_templates: &[
            ["My voice matters", "I trust my decisions", "Doubt does not define me", "Courage lives within"],
            ["I choose confidence", "My strength is real", "I believe in me", "Fear does not lead"],
            ["Bold and grounded", "I rise with certainty", "Self-doubt fades", "I own my story"],
            ["Inner strength guides me", "I trust my voice", "Capable and clear", "My power is mine"],
        ],
    },
    ThemeEntry {
        slug: ThemeSlug::Peace,
        emotion: "deep calm, inner tranquility, serene stillness",
        default_layouts: &[
            LayoutArchetype::Botanical,
            LayoutArchetype::WaveFlow,
            LayoutArchetype::Centered,
            LayoutArchetype::MinimalCorner,
        ],
        typography: TypographyPairing::new(TypographyStyle::Serif, TypographyStyle::Script),
        energy_level: EnergyLevel::Soft,
        palette: PaletteEntry {
            name: "mist_ivory_sage",
            description: "misty blue-grey, soft ivory, sage",
            hex: &["#5E6B7D", "#EEF0F2", "#B8C4A9"],
            contrast: Contrast::Medium,
        },
        headline_lexicon: &[
            "INNER CALM",
            "SOFT WITHIN",
            "QUIET IS POWER",
            "I AM AT PEACE",
            "STILLNESS FLOWS",
        ],
        phrase_templates: &[
            ["I breathe in calm", "Stillness holds me", "Peace is my nature", "Gentle and whole"],
            ["Calm surrounds me", "I release tension", "Peace flows through", "I am centered"],
            ["In this moment, peace", "I soften", "Ease finds me", "I am held"],
            ["I rest deeply", "Calm is mine", "I let go gently", "Peace lives within"],
        ],
    },
    ThemeEntry {
        slug: ThemeSlug::Focus,
        emotion: "laser clarity, disciplined attention, purposeful action",
        default_layouts: &[
            LayoutArchetype::CleanSerif,
            LayoutArchetype::MinimalCorner,
            LayoutArchetype::GridModular,
            LayoutArchetype::Centered,
        ],
        typography: TypographyPairing::new(TypographyStyle::Serif, TypographyStyle::Sans),
        energy_level: EnergyLevel::Direct,
        palette: PaletteEntry {
            name: "charcoal_white_sage",
            description: "charcoal, crisp white, muted sage",
            hex: &["#2B2D2F", "#F7F7F5", "#7D8B74"],
            contrast: Contrast::High,
        },
        headline_lexicon: &[
            "CLEAR MIND",
            "LOCKED IN",
            "ONE TASK",
            "I AM FOCUSED",
            "PRESENT NOW",
        ],
        phrase_templates: &[
            ["One thing at a time", "Clarity guides me", "I am present", "Distractions fade"],
            ["Focused and clear", "I see what matters", "Present in this moment", "My attention is mine"],
            ["Clear vision ahead", "I work with purpose", "My mind is steady", "I eliminate noise"],
            ["Laser focus on now", "I finish what I start", "My energy is directed", "I prioritize wisely"],
        ],
    },
    ThemeEntry {
        slug: ThemeSlug::Gratitude,
        emotion: "heartfelt appreciation, warm thankfulness, joyful recognition",
        default_layouts: &[
            LayoutArchetype::HaloOrbital,
            LayoutArchetype::Circular,
            LayoutArchetype::ArcFlow,
            LayoutArchetype::Botanical,
        ],
        typography: TypographyPairing::new(TypographyStyle::Display, TypographyStyle::Serif),
        energy_level: EnergyLevel::Supportive,
        palette: PaletteEntry {
            name: "terracotta_cream_gold",
            description: "warm terracotta, cream, honey gold",
            hex: &["#B5654D", "#FBF3E4", "#D9A441"],
            contrast: Contrast::Medium,
        },
        headline_lexicon: &[
            "I AM GRATEFUL",
            "JOY IS HERE",
            "BLESSED BY THIS",
            "THANKFUL HEART",
            "ABUNDANCE SURROUNDS",
        ],
        phrase_templates: &[
            ["I see the good", "Grateful for today", "Joy lives here", "I appreciate this moment"],
            ["I notice beauty", "Gratitude fills me", "I am blessed", "Joy is abundant"],
            ["Today I am thankful", "Small joys matter", "I celebrate this", "Gratitude opens doors"],
            ["I give thanks", "Joy in simple things", "My heart is full", "I see abundance"],
        ],
    },
    ThemeEntry {
        slug: ThemeSlug::Abundance,
        emotion: "overflowing prosperity, generous plenty, endless possibility",
        default_layouts: &[
            LayoutArchetype::HaloOrbital,
            LayoutArchetype::RadialBurst,
            LayoutArchetype::LayeredDepth,
            LayoutArchetype::FramedBorder,
        ],
        typography: TypographyPairing::new(TypographyStyle::Serif, TypographyStyle::Script),
        energy_level: EnergyLevel::Supportive,
        palette: PaletteEntry {
            name: "emerald_ivory_gold",
            description: "deep emerald, ivory, gold, antique bronze",
            hex: &["#1F4D3A", "#FAF6EE", "#C9A227", "#8A6E2F"],
            contrast: Contrast::High,
        },
        headline_lexicon: &[
            "OPEN TO MORE",
            "ABUNDANCE FLOWS",
            "I RECEIVE",
            "PROSPERITY IS MINE",
            "LIMITLESS LIFE",
        ],
        phrase_templates: &[
            ["I am open to receiving", "Abundance is my nature", "More flows to me", "I welcome prosperity"],
            ["I receive with ease", "Wealth finds me", "I am a magnet for abundance", "Prosperity surrounds"],
            ["I open to overflow", "Riches in all forms", "I say yes to more", "Abundance is everywhere"],
            ["Money loves me", "I attract opportunities", "My cup overflows", "I live in plenty"],
        ],
    },
    ThemeEntry {
        slug: ThemeSlug::Healing,
        emotion: "gentle restoration, patient recovery, compassionate care",
        default_layouts: &[
            LayoutArchetype::Botanical,
            LayoutArchetype::WaveFlow,
            LayoutArchetype::LayeredDepth,
            LayoutArchetype::ArcFlow,
        ],
        typography: TypographyPairing::new(TypographyStyle::Serif, TypographyStyle::Script),
        energy_level: EnergyLevel::Soft,
        palette: PaletteEntry {
            name: "sage_linen_blue",
            description: "sage, linen, soft blue",
            hex: &["#5F7355", "#F4F1EA", "#A9C4D4"],
            contrast: Contrast::Medium,
        },
        headline_lexicon: &[
            "GENTLE HEALING",
            "I MEND",
            "RESTORATION FLOWS",
            "I AM HEALING",
            "SOFTLY WHOLE",
        ],
        phrase_templates: &[
            ["I heal gently", "Time restores me", "I am mending", "Softness heals"],
            ["I give myself time", "Healing is happening", "I am becoming whole", "Tender with myself"],
            ["I trust the process", "Healing flows through", "I am patient", "I nurture myself"],
            ["I heal at my pace", "Restoration is natural", "I honor my healing", "I am rebuilding"],
        ],
    },
    ThemeEntry {
        slug: ThemeSlug::Strength,
        emotion: "unshakeable resilience, enduring power, solid foundation",
        default_layouts: &[
            LayoutArchetype::GritDirectional,
            LayoutArchetype::StackedVertical,
            LayoutArchetype::Asymmetric,
            LayoutArchetype::SplitHorizon,
        ],
        typography: TypographyPairing::new(TypographyStyle::Serif, TypographyStyle::Sans),
        energy_level: EnergyLevel::Intense,
        palette: PaletteEntry {
            name: "slate_stone_rust",
            description: "slate, warm stone, rust",
            hex: &["#2F3640", "#E4E0D8", "#A0522D"],
            contrast: Contrast::High,
        },
        headline_lexicon: &[
            "UNSHAKEABLE",
            "BUILT STRONG",
            "I AM RESILIENT",
            "SOLID GROUND",
            "INNER FORTRESS",
        ],
        phrase_templates: &[
            ["I am unbreakable", "My foundation is solid", "I withstand storms", "Strong and steady"],
            ["I rise from challenges", "Strength is my nature", "I am resilient", "I stand firm"],
            ["I am fortified", "My spirit is strong", "I overcome", "I am durable"],
            ["I am my anchor", "Strength from within", "I persist", "Unshaken by trials"],
        ],
    },
    ThemeEntry {
        slug: ThemeSlug::Joy,
        emotion: "pure delight, radiant happiness, lighthearted celebration",
        default_layouts: &[
            LayoutArchetype::HaloOrbital,
            LayoutArchetype::RadialBurst,
            LayoutArchetype::ScatteredConstellation,
            LayoutArchetype::RibbonBanner,
        ],
        typography: TypographyPairing::new(TypographyStyle::Display, TypographyStyle::Sans),
        energy_level: EnergyLevel::Supportive,
        palette: PaletteEntry {
            name: "marigold_cream_coral",
            description: "marigold, buttercream, coral",
            hex: &["#8A5A12", "#FFF8EC", "#F28C6B"],
            contrast: Contrast::Medium,
        },
        headline_lexicon: &[
            "JOY RISING",
            "LIGHT WITHIN",
            "I CHOOSE JOY",
            "RADIANT LIFE",
            "HAPPINESS FLOWS",
        ],
        phrase_templates: &[
            ["Joy is my choice", "I radiate light", "Happiness is here", "I feel delight"],
            ["I find joy daily", "Brightness surrounds me", "I laugh often", "Joy is abundant"],
            ["I choose to smile", "Joy lives in me", "I sparkle", "Light fills my heart"],
            ["I embrace joy", "Happiness finds me", "I shine brightly", "Joy is easy"],
        ],
    },
    ThemeEntry {
        slug: ThemeSlug::Balance,
        emotion: "steady equilibrium, centered harmony, grounded alignment",
        default_layouts: &[
            LayoutArchetype::CleanSerif,
            LayoutArchetype::SplitHorizon,
            LayoutArchetype::Centered,
            LayoutArchetype::GridModular,
        ],
        typography: TypographyPairing::new(TypographyStyle::Serif, TypographyStyle::Sans),
        energy_level: EnergyLevel::Supportive,
        palette: PaletteEntry {
            name: "stone_sand_sage",
            description: "stone grey, sand, sage",
            hex: &["#4A4E4D", "#EFEBE3", "#9CAF88"],
            contrast: Contrast::High,
        },
        headline_lexicon: &[
            "IN BALANCE",
            "CENTER HELD",
            "I AM ALIGNED",
            "HARMONY WITHIN",
            "STEADY GROUND",
        ],
        phrase_templates: &[
            ["I find my center", "Balance is natural", "I am aligned", "Harmony flows"],
            ["I hold my balance", "Centered in chaos", "I am grounded", "Equilibrium is mine"],
            ["I live in harmony", "My life is balanced", "I prioritize well", "Centered and calm"],
            ["I maintain equilibrium", "Harmony within", "I am centered", "Balance flows through"],
        ],
    },
    ThemeEntry {
        slug: ThemeSlug::Courage,
        emotion: "brave forward motion, action in spite of fear",
        default_layouts: &[
            LayoutArchetype::GritDirectional,
            LayoutArchetype::DiagonalCascade,
            LayoutArchetype::Asymmetric,
            LayoutArchetype::StackedVertical,
        ],
        typography: TypographyPairing::new(TypographyStyle::Serif, TypographyStyle::Sans),
        energy_level: EnergyLevel::Direct,
        palette: PaletteEntry {
            name: "navy_ivory_copper",
            description: "deep navy, ivory, copper",
            hex: &["#1E2A44", "#F6F1E7", "#B87333"],
            contrast: Contrast::High,
        },
        headline_lexicon: &[
            "BRAVE HEART",
            "I MOVE ANYWAY",
            "COURAGE LIVES",
            "I FACE FEAR",
            "BOLD STEPS",
        ],
        phrase_templates: &[
            ["I act despite fear", "Courage is my choice", "I move forward", "Brave and bold"],
            ["I am courageous", "I take the leap", "Bravery lives in me", "I do it scared"],
            ["I step into fear", "Courage guides me", "I am brave enough", "I face the unknown"],
            ["I am fearless", "Bravery flows through", "I act boldly", "Courage is mine"],
        ],
    },
    ThemeEntry {
        slug: ThemeSlug::Clarity,
        emotion: "crystal-clear vision, discernment, certain knowing",
        default_layouts: &[
            LayoutArchetype::CleanSerif,
            LayoutArchetype::MinimalCorner,
            LayoutArchetype::WindowArch,
            LayoutArchetype::Centered,
        ],
        typography: TypographyPairing::new(TypographyStyle::Serif, TypographyStyle::Sans),
        energy_level: EnergyLevel::Direct,
        palette: PaletteEntry {
            name: "navy_white_glacier",
            description: "deep navy, glacier white, ice blue",
            hex: &["#1E3A5F", "#F5F8FA", "#8FB3C9"],
            contrast: Contrast::High,
        },
        headline_lexicon: &[
            "CRYSTAL CLEAR",
            "SEE TRUE",
            "I KNOW",
            "VISION IS MINE",
            "CLEAR SIGHT",
        ],
        phrase_templates: &[
            ["I see clearly", "My vision is sharp", "Clarity comes easily", "I know my path"],
            ["I understand now", "Clarity guides me", "I see what matters", "My mind is clear"],
            ["I see through fog", "Clarity is my gift", "I discern well", "I trust my knowing"],
            ["I perceive truth", "Clarity flows", "I understand deeply", "My vision is true"],
        ],
    },
    ThemeEntry {
        slug: ThemeSlug::Renewal,
        emotion: "fresh beginnings, rebirth, gentle emergence",
        default_layouts: &[
            LayoutArchetype::Botanical,
            LayoutArchetype::ArcFlow,
            LayoutArchetype::WindowArch,
            LayoutArchetype::WaveFlow,
        ],
        typography: TypographyPairing::new(TypographyStyle::Serif, TypographyStyle::Script),
        energy_level: EnergyLevel::Soft,
        palette: PaletteEntry {
            name: "fern_mist_blush",
            description: "fern green, morning mist, blush",
            hex: &["#3E6B48", "#F3F7F0", "#F2C6C2"],
            contrast: Contrast::Medium,
        },
        headline_lexicon: &[
            "BEGIN AGAIN",
            "NEW LIGHT",
            "I RENEW",
            "FRESH START",
            "REBIRTH NOW",
        ],
        phrase_templates: &[
            ["I start fresh", "New beginnings are mine", "I renew myself", "Today is new"],
            ["I begin again", "Renewal is natural", "I shed what was", "New life emerges"],
            ["I embrace new beginnings", "Renewal flows through", "I start over", "I am made new"],
            ["I let go and renew", "New chapter now", "I refresh my spirit", "Rebirth is mine"],
        ],
    },
    ThemeEntry {
        slug: ThemeSlug::Freedom,
        emotion: "open skies, liberation, unbound possibility",
        default_layouts: &[
            LayoutArchetype::GritDirectional,
            LayoutArchetype::DiagonalCascade,
            LayoutArchetype::ScatteredConstellation,
            LayoutArchetype::Asymmetric,
        ],
        typography: TypographyPairing::new(TypographyStyle::Display, TypographyStyle::Sans),
        energy_level: EnergyLevel::Direct,
        palette: PaletteEntry {
            name: "teal_sand_sky",
            description: "deep teal, sand, open sky",
            hex: &["#2A5B5E", "#F4EDE1", "#7FB8D6"],
            contrast: Contrast::Medium,
        },
        headline_lexicon: &[
            "I AM FREE",
            "WIDE OPEN",
            "UNBOUND LIFE",
            "LIBERATION",
            "FREE TO BE",
        ],
        phrase_templates: &[
            ["I am liberated", "Freedom is mine", "I break free", "Unbound and wild"],
            ["I release constraints", "Freedom flows", "I am unchained", "Open and free"],
            ["I am unrestricted", "Freedom is my right", "I break the chains", "I live untethered"],
            ["I claim my freedom", "Unbound spirit", "I am sovereign", "Freedom guides me"],
        ],
    },
    ThemeEntry {
        slug: ThemeSlug::Passion,
        emotion: "fiery devotion, intense aliveness, burning purpose",
        default_layouts: &[
            LayoutArchetype::GritDirectional,
            LayoutArchetype::RadialBurst,
            LayoutArchetype::DiagonalCascade,
            LayoutArchetype::LayeredDepth,
        ],
        typography: TypographyPairing::new(TypographyStyle::Display, TypographyStyle::Serif),
        energy_level: EnergyLevel::Intense,
        palette: PaletteEntry {
            name: "crimson_blush_ember",
            description: "crimson, blush, ember orange",
            hex: &["#7A1F2B", "#FBEFEA", "#E4572E"],
            contrast: Contrast::High,
        },
        headline_lexicon: &[
            "BURN BRIGHT",
            "FULL FLAME",
            "I AM FIRE",
            "PASSION LIVES",
            "IGNITED HEART",
        ],
        phrase_templates: &[
            ["I burn with purpose", "Passion fuels me", "I am on fire", "My heart blazes"],
            ["I ignite my dreams", "Passion drives me", "I am fully alive", "Fire in my soul"],
            ["I live with fire", "My passion is fierce", "I am ablaze", "I burn for this"],
            ["I am passionate", "Fire guides me", "I burn with love", "My flame is strong"],
        ],
    },
    ThemeEntry {
        slug: ThemeSlug::Wisdom,
        emotion: "inner knowing, quiet insight, trusted intuition",
        default_layouts: &[
            LayoutArchetype::CleanSerif,
            LayoutArchetype::WindowArch,
            LayoutArchetype::FramedBorder,
            LayoutArchetype::Circular,
        ],
        typography: TypographyPairing::new(TypographyStyle::Serif, TypographyStyle::Serif),
        energy_level: EnergyLevel::Supportive,
        palette: PaletteEntry {
            name: "plum_parchment_bronze",
            description: "deep plum, parchment, bronze",
            hex: &["#3B2A3F", "#F3ECDD", "#8C6A3F"],
            contrast: Contrast::High,
        },
        headline_lexicon: &[
            "INNER WISDOM",
            "I KNOW",
            "WISE HEART",
            "TRUTH WITHIN",
            "I TRUST MY KNOWING",
        ],
        phrase_templates: &[
            ["I trust my wisdom", "Inner knowing guides", "I am wise", "My insight is deep"],
            ["I know what I need", "My wisdom is true", "I trust my intuition", "Wise and aware"],
            ["I am discerning", "Wisdom flows through", "I know deeply", "My knowing is strong"],
            ["I listen to wisdom", "My inner voice is clear", "I know my truth", "Wisdom lives in me"],
        ],
    },
];
