//! Build request and variant knobs.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;
use crate::domain::sequence::Seed;

/// Upper bounds (inclusive) of the variant knobs.
pub const STYLE_VARIANT_MAX: u8 = 3;
pub const ACCENT_VARIANT_MAX: u8 = 2;
pub const PALETTE_VARIANT_MAX: u8 = 2;
pub const COPY_VARIANT_MAX: u8 = 3;
pub const TEXTURE_VARIANT_MAX: u8 = 1;

/// Longest accepted custom headline, in characters.
pub const MAX_HEADLINE_CHARS: usize = 80;

/// Caller input for one specification.
///
/// Theme, mood and layout stay as strings so that unknown values surface as
/// typed spec errors rather than deserialization failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildSpecRequest {
    pub theme: String,
    pub mood: String,
    #[serde(default)]
    pub keywords: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<Seed>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_override: Option<String>,
    #[serde(default, alias = "customPaletteHex", skip_serializing_if = "Option::is_none")]
    pub custom_palette: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_headline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_supporting_phrases: Option<Vec<String>>,
    #[serde(flatten)]
    pub variants: VariantOverrides,
}

impl BuildSpecRequest {
    pub fn new(theme: impl Into<String>, mood: impl Into<String>) -> Self {
        Self {
            theme: theme.into(),
            mood: mood.into(),
            ..Self::default()
        }
    }

    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = keywords.into();
        self
    }

    pub fn with_seed(mut self, seed: impl Into<Seed>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    pub fn with_layout(mut self, layout: impl Into<String>) -> Self {
        self.layout_override = Some(layout.into());
        self
    }

    pub fn with_palette<S: Into<String>>(mut self, colors: impl IntoIterator<Item = S>) -> Self {
        self.custom_palette = Some(colors.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_headline(mut self, headline: impl Into<String>) -> Self {
        self.custom_headline = Some(headline.into());
        self
    }

    pub fn with_phrases<S: Into<String>>(mut self, phrases: impl IntoIterator<Item = S>) -> Self {
        self.custom_supporting_phrases = Some(phrases.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_variants(mut self, variants: VariantOverrides) -> Self {
        self.variants = variants;
        self
    }
}

/// Caller-fixed variant knobs; unset knobs are drawn from the seed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantOverrides {
    #[serde(rename = "styleVariant", default, skip_serializing_if = "Option::is_none")]
    pub style: Option<u8>,
    #[serde(rename = "accentVariant", default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<u8>,
    #[serde(rename = "paletteVariant", default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<u8>,
    #[serde(rename = "copyVariant", default, skip_serializing_if = "Option::is_none")]
    pub copy: Option<u8>,
    #[serde(rename = "textureVariant", default, skip_serializing_if = "Option::is_none")]
    pub texture: Option<u8>,
}

impl VariantOverrides {
    /// All knobs fixed to the given values.
    pub fn fixed(knobs: VariantKnobs) -> Self {
        Self {
            style: Some(knobs.style),
            accent: Some(knobs.accent),
            palette: Some(knobs.palette),
            copy: Some(knobs.copy),
            texture: Some(knobs.texture),
        }
    }

    /// Rejects any supplied knob outside its range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check("styleVariant", self.style, STYLE_VARIANT_MAX)?;
        check("accentVariant", self.accent, ACCENT_VARIANT_MAX)?;
        check("paletteVariant", self.palette, PALETTE_VARIANT_MAX)?;
        check("copyVariant", self.copy, COPY_VARIANT_MAX)?;
        check("textureVariant", self.texture, TEXTURE_VARIANT_MAX)
    }
}

fn check(field: &str, value: Option<u8>, max: u8) -> Result<(), ValidationError> {
    match value {
        Some(v) if v > max => Err(ValidationError::out_of_range(
            field,
            0,
            i32::from(max),
            i32::from(v),
        )),
        _ => Ok(()),
    }
}

/// Resolved variant knobs recorded in a specification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariantKnobs {
    #[serde(rename = "styleVariant")]
    pub style: u8,
    #[serde(rename = "accentVariant")]
    pub accent: u8,
    #[serde(rename = "paletteVariant")]
    pub palette: u8,
    #[serde(rename = "copyVariant")]
    pub copy: u8,
    #[serde(rename = "textureVariant")]
    pub texture: u8,
}

impl VariantKnobs {
    /// Returns true when every knob is inside its range.
    pub fn in_range(&self) -> bool {
        self.style <= STYLE_VARIANT_MAX
            && self.accent <= ACCENT_VARIANT_MAX
            && self.palette <= PALETTE_VARIANT_MAX
            && self.copy <= COPY_VARIANT_MAX
            && self.texture <= TEXTURE_VARIANT_MAX
    }
}
