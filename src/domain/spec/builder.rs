//! Spec Builder - composes registries, keywords, palette and accents into a
//! validated DesignSpecification.
//!
//! Draws from the seeded sequence happen in a fixed order: layout, headline,
//! phrase template, phrase shuffle, then the style, accent, palette and
//! texture knobs. Overridden selections skip their draw, except layout
//! selection which always consumes one draw when no override is given.
//! When layout, palette, headline and phrases are all overridden, unset
//! knobs are 0 instead of drawn, so the seed has no effect on the output.

use std::sync::Arc;

use crate::domain::accents::AccentComposer;
use crate::domain::foundation::{HexColor, LayoutArchetype, ValidationError};
use crate::domain::keywords::{KeywordDetectionResult, KeywordDetector};
use crate::domain::palette::{PaletteBlender, PaletteToken};
use crate::domain::registry::{
    LayoutDefinition, MoodDefinition, Registry, ThemeDefinition, PHRASE_TEMPLATE_LINES,
};
use crate::domain::sequence::{Seed, SeedOrigin, SeededSequence};
use crate::ports::Clock;

use super::request::{
    BuildSpecRequest, VariantKnobs, VariantOverrides, ACCENT_VARIANT_MAX, COPY_VARIANT_MAX,
    MAX_HEADLINE_CHARS, PALETTE_VARIANT_MAX, STYLE_VARIANT_MAX, TEXTURE_VARIANT_MAX,
};
use super::specification::{Constraints, DesignSpecification, SPEC_VERSION};
use super::SpecError;

/// Builds design specifications from caller requests.
pub struct SpecBuilder {
    registry: Arc<Registry>,
    detector: KeywordDetector,
    clock: Arc<dyn Clock>,
}

/// Validated caller overrides.
struct Overrides {
    layout: Option<LayoutArchetype>,
    palette: Option<PaletteToken>,
    headline: Option<String>,
    phrases: Option<Vec<String>>,
    variants: VariantOverrides,
}

impl Overrides {
    /// Layout, palette, headline and phrases are all caller-supplied.
    fn is_complete(&self) -> bool {
        self.layout.is_some()
            && self.palette.is_some()
            && self.headline.is_some()
            && self.phrases.is_some()
    }
}

impl SpecBuilder {
    pub fn new(registry: Arc<Registry>, detector: KeywordDetector, clock: Arc<dyn Clock>) -> Self {
        Self {
            registry,
            detector,
            clock,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Builds a specification for the request.
    pub fn build(&self, request: &BuildSpecRequest) -> Result<DesignSpecification, SpecError> {
        let theme = self
            .registry
            .lookup_theme(&request.theme)
            .map_err(|e| SpecError::UnknownTheme(e.value))?;
        let mood = self
            .registry
            .lookup_mood(&request.mood)
            .map_err(|e| SpecError::UnknownMood(e.value))?;
        let overrides = Self::validate_overrides(request)?;
        let fully_overridden = overrides.is_complete();

        let (seed, seed_origin) = match &request.seed {
            Some(seed) => (seed.clone(), SeedOrigin::Explicit),
            None => (Seed::Number(self.clock.now_millis()), SeedOrigin::Clock),
        };
        let mut sequence = SeededSequence::new(seed.to_u64());

        let layout_archetype = match overrides.layout {
            Some(layout) => layout,
            None => Self::select_layout(theme, mood, &mut sequence),
        };
        let layout = self.registry.layout(layout_archetype);
        tracing::debug!(
            theme = %theme.slug,
            mood = %mood.slug,
            layout = %layout_archetype,
            seed = %seed,
            seed_origin = %seed_origin,
            "Resolved layout"
        );

        let keywords = self.detector.detect(&request.keywords);

        let palette = match overrides.palette {
            Some(custom) => custom,
            None => Self::blend_palette(theme, layout, &keywords)?,
        };

        let accents = AccentComposer::compose(&keywords, layout, mood);

        let headline = match overrides.headline {
            Some(custom) => custom,
            None => Self::draw_headline(theme, &mut sequence)?,
        };

        let (supporting_phrases, template_index) = match overrides.phrases {
            Some(custom) => (custom, None),
            None => {
                let (lines, index) =
                    Self::draw_phrases(theme, overrides.variants.copy, &mut sequence)?;
                (lines, Some(index))
            }
        };

        let variants = if fully_overridden {
            Self::fixed_knobs(&overrides.variants)
        } else {
            Self::resolve_knobs(&overrides.variants, template_index, &mut sequence)
        };

        let spec = DesignSpecification {
            spec_version: SPEC_VERSION,
            theme: theme.slug,
            mood: mood.slug,
            energy_level: theme.energy_level,
            layout_archetype,
            palette,
            accents,
            typography: theme.typography,
            headline,
            supporting_phrases,
            variants,
            seed,
            seed_origin,
            constraints: Constraints::standard(),
        };
        spec.validate()?;

        tracing::debug!(
            palette = %spec.palette.name,
            accents = spec.accents.len(),
            category = keywords.category_label(),
            "Built design specification"
        );
        Ok(spec)
    }

    fn validate_overrides(request: &BuildSpecRequest) -> Result<Overrides, SpecError> {
        let layout = request
            .layout_override
            .as_deref()
            .map(|raw| {
                raw.parse::<LayoutArchetype>()
                    .map_err(|e| SpecError::UnknownLayout(e.value))
            })
            .transpose()?;

        request.variants.validate()?;

        let palette = request
            .custom_palette
            .as_deref()
            .map(PaletteBlender::custom)
            .transpose()?;

        let headline = request
            .custom_headline
            .as_deref()
            .map(validate_headline)
            .transpose()?;

        let phrases = request
            .custom_supporting_phrases
            .as_deref()
            .map(validate_phrases)
            .transpose()?;

        Ok(Overrides {
            layout,
            palette,
            headline,
            phrases,
            variants: request.variants,
        })
    }

    /// Weighted pick from the theme's layouts that the mood allows.
    ///
    /// The theme's top-ranked candidate is weighted `1 + mood.weight`, the
    /// rest `1`. Exactly one draw is consumed, including on fallback.
    fn select_layout(
        theme: &ThemeDefinition,
        mood: &MoodDefinition,
        sequence: &mut SeededSequence,
    ) -> LayoutArchetype {
        let candidates: Vec<LayoutArchetype> = theme
            .default_layouts
            .iter()
            .copied()
            .filter(|layout| mood.allows(*layout))
            .collect();

        if candidates.is_empty() {
            sequence.next_unit();
            let fallback = theme.default_layouts[0];
            tracing::warn!(
                theme = %theme.slug,
                mood = %mood.slug,
                fallback = %fallback,
                "No layout shared by theme and mood, using theme default"
            );
            return fallback;
        }

        let weights: Vec<f64> = (0..candidates.len())
            .map(|i| if i == 0 { 1.0 + mood.weight.value() } else { 1.0 })
            .collect();
        let picked = sequence.weighted_index(&weights).unwrap_or(0);
        candidates[picked]
    }

    fn blend_palette(
        theme: &ThemeDefinition,
        layout: &LayoutDefinition,
        keywords: &KeywordDetectionResult,
    ) -> Result<PaletteToken, SpecError> {
        let keyword_colors = keywords
            .category
            .iter()
            .map(|category| HexColor::parse(category.color()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| SpecError::InvariantViolation(format!("keyword color: {}", e)))?;

        PaletteBlender::blend(&theme.palette, &layout.palette, &keyword_colors)
            .map_err(|e| SpecError::InvariantViolation(e.to_string()))
    }

    fn draw_headline(
        theme: &ThemeDefinition,
        sequence: &mut SeededSequence,
    ) -> Result<String, SpecError> {
        sequence
            .index(theme.headline_lexicon.len())
            .map(|i| theme.headline_lexicon[i].to_string())
            .ok_or_else(|| {
                SpecError::InvariantViolation(format!("theme {} has no headlines", theme.slug))
            })
    }

    /// Picks a template (by copy knob when fixed, otherwise by draw) and shuffles it.
    fn draw_phrases(
        theme: &ThemeDefinition,
        copy: Option<u8>,
        sequence: &mut SeededSequence,
    ) -> Result<(Vec<String>, usize), SpecError> {
        let count = theme.phrase_templates.len();
        let index = match copy {
            Some(copy) if count > 0 => Some(usize::from(copy) % count),
            _ => sequence.index(count),
        }
        .ok_or_else(|| {
            SpecError::InvariantViolation(format!("theme {} has no phrase templates", theme.slug))
        })?;

        let mut lines: Vec<String> = theme.phrase_templates[index]
            .iter()
            .map(|line| line.to_string())
            .collect();
        sequence.shuffle(&mut lines);
        Ok((lines, index))
    }

    /// Caller knobs with unset ones at 0; nothing is drawn.
    fn fixed_knobs(overrides: &VariantOverrides) -> VariantKnobs {
        VariantKnobs {
            style: overrides.style.unwrap_or(0),
            accent: overrides.accent.unwrap_or(0),
            palette: overrides.palette.unwrap_or(0),
            copy: overrides.copy.unwrap_or(0),
            texture: overrides.texture.unwrap_or(0),
        }
    }

    fn resolve_knobs(
        overrides: &VariantOverrides,
        template_index: Option<usize>,
        sequence: &mut SeededSequence,
    ) -> VariantKnobs {
        let mut draw = |fixed: Option<u8>, max: u8| {
            fixed.unwrap_or_else(|| sequence.index(usize::from(max) + 1).unwrap_or(0) as u8)
        };

        let style = draw(overrides.style, STYLE_VARIANT_MAX);
        let accent = draw(overrides.accent, ACCENT_VARIANT_MAX);
        let palette = draw(overrides.palette, PALETTE_VARIANT_MAX);
        let texture = draw(overrides.texture, TEXTURE_VARIANT_MAX);
        let copy = overrides.copy.unwrap_or_else(|| {
            template_index
                .map(|i| (i % (usize::from(COPY_VARIANT_MAX) + 1)) as u8)
                .unwrap_or(0)
        });

        VariantKnobs {
            style,
            accent,
            palette,
            copy,
            texture,
        }
    }
}

fn validate_headline(raw: &str) -> Result<String, ValidationError> {
    let headline = raw.trim();
    if headline.is_empty() {
        return Err(ValidationError::empty_field("customHeadline"));
    }
    let chars = headline.chars().count();
    if chars > MAX_HEADLINE_CHARS {
        return Err(ValidationError::invalid_format(
            "customHeadline",
            format!("{} characters exceeds the limit of {}", chars, MAX_HEADLINE_CHARS),
        ));
    }
    Ok(headline.to_string())
}

fn validate_phrases(raw: &[String]) -> Result<Vec<String>, ValidationError> {
    if raw.len() != PHRASE_TEMPLATE_LINES {
        return Err(ValidationError::invalid_format(
            "customSupportingPhrases",
            format!("expected exactly {} lines, got {}", PHRASE_TEMPLATE_LINES, raw.len()),
        ));
    }
    raw.iter()
        .map(|line| {
            let line = line.trim();
            if line.is_empty() {
                Err(ValidationError::empty_field("customSupportingPhrases"))
            } else {
                Ok(line.to_string())
            }
        })
        .collect()
}
