//! Keyword dictionaries - specific objects (tier 1) and broad categories (tier 2).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse subject category derived from keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordCategory {
    Beverages,
    Nature,
    Cosmic,
    Vintage,
    Geometric,
    Cozy,
    Food,
    Animals,
}

impl KeywordCategory {
    /// Returns all categories in tier-2 matching order.
    pub fn all() -> &'static [KeywordCategory] {
        &[
            KeywordCategory::Beverages,
            KeywordCategory::Nature,
            KeywordCategory::Cosmic,
            KeywordCategory::Vintage,
            KeywordCategory::Geometric,
            KeywordCategory::Cozy,
            KeywordCategory::Food,
            KeywordCategory::Animals,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            KeywordCategory::Beverages => "beverages",
            KeywordCategory::Nature => "nature",
            KeywordCategory::Cosmic => "cosmic",
            KeywordCategory::Vintage => "vintage",
            KeywordCategory::Geometric => "geometric",
            KeywordCategory::Cozy => "cozy",
            KeywordCategory::Food => "food",
            KeywordCategory::Animals => "animals",
        }
    }

    /// Accent color that replaces the layout accent slot.
    pub fn color(&self) -> &'static str {
        match self {
            KeywordCategory::Beverages => "#722F37",
            KeywordCategory::Nature => "#7B8F6D",
            KeywordCategory::Cosmic => "#1E3A5F",
            KeywordCategory::Vintage => "#B08D57",
            KeywordCategory::Geometric => "#2E2E2E",
            KeywordCategory::Cozy => "#C17C60",
            KeywordCategory::Food => "#E0A458",
            KeywordCategory::Animals => "#8B6F47",
        }
    }

    /// Decorative accent phrase contributed to the accent list.
    pub fn accent(&self) -> &'static str {
        match self {
            KeywordCategory::Beverages => "soft steam curls",
            KeywordCategory::Nature => "organic leaf shadows",
            KeywordCategory::Cosmic => "twinkling star dust",
            KeywordCategory::Vintage => "aged paper grain",
            KeywordCategory::Geometric => "precise line work",
            KeywordCategory::Cozy => "warm candle glow",
            KeywordCategory::Food => "hand-drawn kitchen sketches",
            KeywordCategory::Animals => "delicate paw-print trail",
        }
    }

    /// Generic motif used when only the category matched.
    pub fn generic_motif(&self) -> &'static str {
        match self {
            KeywordCategory::Beverages => "a softly illustrated drink vessel",
            KeywordCategory::Nature => "delicate natural foliage motifs",
            KeywordCategory::Cosmic => "celestial bodies and scattered stars",
            KeywordCategory::Vintage => "vintage ephemera details",
            KeywordCategory::Geometric => "clean geometric shapes",
            KeywordCategory::Cozy => "cozy hygge home details",
            KeywordCategory::Food => "simple illustrated food elements",
            KeywordCategory::Animals => "a gentle line-art animal companion",
        }
    }

    /// Broad terms that place free text in this category.
    pub(super) fn terms(&self) -> &'static [&'static str] {
        match self {
            KeywordCategory::Beverages => &["drink", "brew", "sip", "juice", "smoothie", "beverage"],
            KeywordCategory::Nature => &["garden", "botanical", "plant", "meadow", "river", "earth", "nature"],
            KeywordCategory::Cosmic => &["cosmic", "celestial", "sky", "night", "astro", "universe", "space"],
            KeywordCategory::Vintage => &["vintage", "retro", "antique", "nostalgic", "classic"],
            KeywordCategory::Geometric => &["geometric", "shape", "grid", "abstract", "pattern"],
            KeywordCategory::Cozy => &["cozy", "cosy", "hygge", "home", "comfort", "snug"],
            KeywordCategory::Food => &["food", "bake", "kitchen", "fruit", "dessert", "sweet"],
            KeywordCategory::Animals => &["animal", "pet", "wildlife", "paw", "feather"],
        }
    }
}

impl fmt::Display for KeywordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A specific object recognised in keywords.
#[derive(Debug, Clone, Copy)]
pub(super) struct ObjectEntry {
    pub triggers: &'static [&'static str],
    pub motif: &'static str,
    pub category: KeywordCategory,
}

const fn object(
    triggers: &'static [&'static str],
    motif: &'static str,
    category: KeywordCategory,
) -> ObjectEntry {
    ObjectEntry {
        triggers,
        motif,
        category,
    }
}

use KeywordCategory::{Animals, Beverages, Cosmic, Cozy, Food, Geometric, Nature, Vintage};

/// Tier-1 objects in match priority order.
pub(super) const OBJECTS: &[ObjectEntry] = &[
    object(&["wine glass", "wine"], "an elegant wine glass with a deep red pour", Beverages),
    object(&["coffee", "latte", "espresso", "cappuccino"], "a steaming ceramic coffee cup", Beverages),
    object(&["teacup", "tea"], "a delicate porcelain teacup", Beverages),
    object(&["cocktail", "martini"], "a stemmed cocktail glass with a citrus twist", Beverages),
    object(&["champagne", "prosecco"], "a champagne coupe with rising bubbles", Beverages),
    object(&["candle"], "a softly glowing pillar candle", Cozy),
    object(&["blanket"], "a folded knit blanket", Cozy),
    object(&["book", "novel", "reading"], "a stack of well-loved books", Cozy),
    object(&["fireplace", "hearth"], "a crackling fireplace glow", Cozy),
    object(&["flower", "bloom", "blossom"], "a loose bouquet of wildflowers", Nature),
    object(&["tree", "forest"], "a single graceful tree silhouette", Nature),
    object(&["leaf", "leaves", "foliage"], "drifting botanical leaves", Nature),
    object(&["mountain", "peak"], "layered mountain ridges", Nature),
    object(&["ocean", "wave", "sea"], "a rolling ocean wave", Nature),
    object(&["sunflower"], "a bright sunflower head", Nature),
    object(&["moon", "crescent"], "a luminous crescent moon", Cosmic),
    object(&["star"], "a cluster of four-point stars", Cosmic),
    object(&["planet", "saturn"], "a ringed planet", Cosmic),
    object(&["galaxy", "nebula", "cosmos"], "a swirling galaxy", Cosmic),
    object(&["typewriter"], "a vintage typewriter", Vintage),
    object(&["camera", "polaroid"], "a retro instant camera", Vintage),
    object(&["vinyl", "record player", "turntable"], "a spinning vinyl record", Vintage),
    object(&["pocket watch", "clock"], "an antique pocket watch", Vintage),
    object(&["hexagon", "honeycomb"], "interlocking hexagon tiles", Geometric),
    object(&["strawberry", "berries"], "ripe illustrated strawberries", Food),
    object(&["lemon", "citrus"], "halved lemon slices", Food),
    object(&["croissant", "pastry"], "a flaky golden croissant", Food),
    object(&["cat", "kitten"], "a curled sleeping cat", Animals),
    object(&["dog", "puppy"], "a loyal sitting dog", Animals),
    object(&["butterfly"], "a butterfly in mid-flight", Animals),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_thirty_objects() {
        assert_eq!(OBJECTS.len(), 30);
    }

    #[test]
    fn triggers_are_lowercase_and_non_empty() {
        for entry in OBJECTS {
            assert!(!entry.triggers.is_empty());
            for trigger in entry.triggers {
                assert!(!trigger.is_empty());
                assert_eq!(*trigger, trigger.to_lowercase());
            }
        }
    }

    #[test]
    fn wine_glass_is_declared_before_candle() {
        let position = |motif_word: &str| {
            OBJECTS
                .iter()
                .position(|e| e.triggers.contains(&motif_word))
                .unwrap()
        };
        assert!(position("wine") < position("candle"));
    }

    #[test]
    fn eight_categories_with_terms() {
        assert_eq!(KeywordCategory::all().len(), 8);
        for category in KeywordCategory::all() {
            assert!(!category.terms().is_empty());
            assert!(category.color().starts_with('#'));
        }
    }

    #[test]
    fn category_serializes_to_snake_case() {
        let json = serde_json::to_string(&KeywordCategory::Beverages).unwrap();
        assert_eq!(json, "\"beverages\"");
    }
}
