//! DesignSpecification - the immutable output contract.

use serde::{Deserialize, Serialize};

use crate::domain::accents::MAX_ACCENTS;
use crate::domain::foundation::{
    EnergyLevel, LayoutArchetype, MoodSlug, ThemeSlug, TypographyPairing,
};
use crate::domain::palette::{PaletteToken, BLENDED_PALETTE_SIZE};
use crate::domain::registry::PHRASE_TEMPLATE_LINES;
use crate::domain::sequence::{Seed, SeedOrigin};

use super::request::VariantKnobs;
use super::SpecError;

/// Version of the specification format.
pub const SPEC_VERSION: u32 = 2;

/// Fixed output constraints for the downstream renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraints {
    pub ratio: String,
    pub dpi: u32,
    pub ban: Vec<String>,
}

impl Constraints {
    pub fn standard() -> Self {
        Self {
            ratio: "4:5".to_string(),
            dpi: 300,
            ban: vec![
                "neon".to_string(),
                "low_legibility".to_string(),
                "overcrowded_layout".to_string(),
            ],
        }
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::standard()
    }
}

/// A fully resolved design, ready for rendering.
///
/// Deserializing runs [`DesignSpecification::validate`], so a parsed value
/// holds the same contract as a built one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawDesignSpecification")]
pub struct DesignSpecification {
    pub(super) spec_version: u32,
    pub(super) theme: ThemeSlug,
    pub(super) mood: MoodSlug,
    pub(super) energy_level: EnergyLevel,
    pub(super) layout_archetype: LayoutArchetype,
    #[serde(rename = "paletteToken")]
    pub(super) palette: PaletteToken,
    pub(super) accents: Vec<String>,
    pub(super) typography: TypographyPairing,
    pub(super) headline: String,
    pub(super) supporting_phrases: Vec<String>,
    #[serde(flatten)]
    pub(super) variants: VariantKnobs,
    pub(super) seed: Seed,
    pub(super) seed_origin: SeedOrigin,
    pub(super) constraints: Constraints,
}

/// Wire shape of a specification before its contract is checked.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDesignSpecification {
    spec_version: u32,
    theme: ThemeSlug,
    mood: MoodSlug,
    energy_level: EnergyLevel,
    layout_archetype: LayoutArchetype,
    #[serde(rename = "paletteToken")]
    palette: PaletteToken,
    accents: Vec<String>,
    typography: TypographyPairing,
    headline: String,
    supporting_phrases: Vec<String>,
    #[serde(flatten)]
    variants: VariantKnobs,
    seed: Seed,
    seed_origin: SeedOrigin,
    constraints: Constraints,
}

impl TryFrom<RawDesignSpecification> for DesignSpecification {
    type Error = SpecError;

    fn try_from(raw: RawDesignSpecification) -> Result<Self, Self::Error> {
        let spec = DesignSpecification {
            spec_version: raw.spec_version,
            theme: raw.theme,
            mood: raw.mood,
            energy_level: raw.energy_level,
            layout_archetype: raw.layout_archetype,
            palette: raw.palette,
            accents: raw.accents,
            typography: raw.typography,
            headline: raw.headline,
            supporting_phrases: raw.supporting_phrases,
            variants: raw.variants,
            seed: raw.seed,
            seed_origin: raw.seed_origin,
            constraints: raw.constraints,
        };
        spec.validate()?;
        Ok(spec)
    }
}

impl DesignSpecification {
    pub fn spec_version(&self) -> u32 {
        self.spec_version
    }

    pub fn theme(&self) -> ThemeSlug {
        self.theme
    }

    pub fn mood(&self) -> MoodSlug {
        self.mood
    }

    pub fn energy_level(&self) -> EnergyLevel {
        self.energy_level
    }

    pub fn layout_archetype(&self) -> LayoutArchetype {
        self.layout_archetype
    }

    /// Final palette in slot order primary, secondary, accent.
    pub fn palette(&self) -> &PaletteToken {
        &self.palette
    }

    pub fn accents(&self) -> &[String] {
        &self.accents
    }

    pub fn typography(&self) -> TypographyPairing {
        self.typography
    }

    pub fn headline(&self) -> &str {
        &self.headline
    }

    pub fn supporting_phrases(&self) -> &[String] {
        &self.supporting_phrases
    }

    pub fn variants(&self) -> VariantKnobs {
        self.variants
    }

    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    pub fn seed_origin(&self) -> SeedOrigin {
        self.seed_origin
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// Checks the output contract.
    pub fn validate(&self) -> Result<(), SpecError> {
        if self.spec_version != SPEC_VERSION {
            return Err(SpecError::InvariantViolation(format!(
                "spec version {} is not {}",
                self.spec_version, SPEC_VERSION
            )));
        }
        if self.palette.len() != BLENDED_PALETTE_SIZE {
            return Err(SpecError::InvariantViolation(format!(
                "palette has {} colors, expected {}",
                self.palette.len(),
                BLENDED_PALETTE_SIZE
            )));
        }
        if self.supporting_phrases.len() != PHRASE_TEMPLATE_LINES {
            return Err(SpecError::InvariantViolation(format!(
                "{} supporting phrases, expected {}",
                self.supporting_phrases.len(),
                PHRASE_TEMPLATE_LINES
            )));
        }
        if self.accents.len() > MAX_ACCENTS {
            return Err(SpecError::InvariantViolation(format!(
                "{} accents exceed the limit of {}",
                self.accents.len(),
                MAX_ACCENTS
            )));
        }
        if self.headline.trim().is_empty() {
            return Err(SpecError::InvariantViolation("headline is empty".to_string()));
        }
        if !self.variants.in_range() {
            return Err(SpecError::InvariantViolation(format!(
                "variant knobs out of range: {:?}",
                self.variants
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{HexColor, TypographyStyle};
    use crate::domain::palette::Contrast;

    fn sample() -> DesignSpecification {
        let hex = ["#1a1a1a", "#F5F0E8", "#8C7B6B"]
            .iter()
            .map(|h| HexColor::parse(h).unwrap())
            .collect();
        DesignSpecification {
            spec_version: SPEC_VERSION,
            theme: ThemeSlug::Confidence,
            mood: MoodSlug::Minimalist,
            energy_level: EnergyLevel::Direct,
            layout_archetype: LayoutArchetype::CleanSerif,
            palette: PaletteToken::new("ink+rules", "ink", hex, Contrast::High),
            accents: vec!["hairline horizontal rules".to_string()],
            typography: TypographyPairing::new(TypographyStyle::Serif, TypographyStyle::Sans),
            headline: "I AM CAPABLE".to_string(),
            supporting_phrases: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            variants: VariantKnobs::default(),
            seed: Seed::Number(42),
            seed_origin: SeedOrigin::Explicit,
            constraints: Constraints::standard(),
        }
    }

    #[test]
    fn standard_constraints_are_fixed() {
        let constraints = Constraints::standard();
        assert_eq!(constraints.ratio, "4:5");
        assert_eq!(constraints.dpi, 300);
        assert_eq!(constraints.ban, vec!["neon", "low_legibility", "overcrowded_layout"]);
    }

    #[test]
    fn valid_sample_passes() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn two_color_palette_is_an_invariant_violation() {
        let mut spec = sample();
        spec.palette.hex.pop();
        assert!(matches!(spec.validate(), Err(SpecError::InvariantViolation(_))));
    }

    #[test]
    fn wrong_phrase_count_is_an_invariant_violation() {
        let mut spec = sample();
        spec.supporting_phrases.push("e".to_string());
        assert!(matches!(spec.validate(), Err(SpecError::InvariantViolation(_))));
    }

    #[test]
    fn serializes_with_camel_case_and_flat_knobs() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["specVersion"], 2);
        assert_eq!(json["layoutArchetype"], "clean-serif");
        assert_eq!(json["paletteToken"]["hex"][0], "#1a1a1a");
        assert_eq!(json["styleVariant"], 0);
        assert_eq!(json["seedOrigin"], "explicit");
        assert_eq!(json["constraints"]["dpi"], 300);
    }

    #[test]
    fn json_round_trip_is_lossless() {
        let spec = sample();
        let json = serde_json::to_string(&spec).unwrap();
        let parsed: DesignSpecification = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, spec);
    }

    #[test]
    fn deserializing_a_two_color_palette_fails() {
        let mut json = serde_json::to_value(sample()).unwrap();
        json["paletteToken"]["hex"].as_array_mut().unwrap().pop();

        let err = serde_json::from_value::<DesignSpecification>(json).unwrap_err();
        assert!(err.to_string().contains("palette has 2 colors"));
    }

    #[test]
    fn deserializing_an_out_of_range_knob_fails() {
        let mut json = serde_json::to_value(sample()).unwrap();
        json["styleVariant"] = serde_json::json!(200);

        let err = serde_json::from_value::<DesignSpecification>(json).unwrap_err();
        assert!(err.to_string().contains("variant knobs out of range"));
    }

    #[test]
    fn deserializing_a_blank_headline_fails() {
        let mut json = serde_json::to_value(sample()).unwrap();
        json["headline"] = serde_json::json!("   ");

        assert!(serde_json::from_value::<DesignSpecification>(json).is_err());
    }
}
