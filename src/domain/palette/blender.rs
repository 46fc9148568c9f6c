//! Palette Blender - resolves the final three-color palette.
//!
//! Blending is literal slot replacement, never numeric interpolation:
//!
//! | slot | role      | source                                             |
//! |------|-----------|----------------------------------------------------|
//! | 0    | primary   | theme palette, first color                         |
//! | 1    | secondary | theme palette, second color                        |
//! | 2    | accent    | keyword color if any, else layout palette last color |

use thiserror::Error;

use crate::domain::foundation::{HexColor, ValidationError};

use super::{ColorAnalysis, PaletteToken};

/// Number of colors in every blended palette.
pub const BLENDED_PALETTE_SIZE: usize = 3;

/// Name given to caller-supplied palettes.
pub const CUSTOM_PALETTE_NAME: &str = "custom_palette";

/// A source palette was missing a slot the policy reads from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Palette '{palette}' has no color for slot {slot}")]
pub struct MissingSlot {
    pub palette: String,
    pub slot: usize,
}

/// Stateless palette resolution.
pub struct PaletteBlender;

impl PaletteBlender {
    /// Blends theme, layout and keyword colors under the fixed slot policy.
    pub fn blend(
        theme: &PaletteToken,
        layout: &PaletteToken,
        keyword_colors: &[HexColor],
    ) -> Result<PaletteToken, MissingSlot> {
        let primary = Self::slot(theme, 0)?;
        let secondary = Self::slot(theme, 1)?;

        let (accent, name) = match keyword_colors.first() {
            Some(keyword_accent) => (
                keyword_accent.clone(),
                format!("{}+{}+keyword", theme.name, layout.name),
            ),
            None => {
                let layout_accent = layout.last().ok_or_else(|| MissingSlot {
                    palette: layout.name.clone(),
                    slot: 0,
                })?;
                (layout_accent.clone(), format!("{}+{}", theme.name, layout.name))
            }
        };

        let description = format!(
            "{}, accented with {}",
            theme.description,
            ColorAnalysis::describe(&accent)
        );
        let hex = vec![primary, secondary, accent];
        let contrast = ColorAnalysis::palette_contrast(&hex);

        Ok(PaletteToken::new(name, description, hex, contrast))
    }

    /// Validates a caller-supplied palette and wraps it verbatim.
    ///
    /// Exactly three valid colors are required; nothing is padded or truncated.
    pub fn custom(colors: &[String]) -> Result<PaletteToken, ValidationError> {
        if colors.len() != BLENDED_PALETTE_SIZE {
            return Err(ValidationError::invalid_format(
                "customPalette",
                format!(
                    "expected exactly {} colors, got {}",
                    BLENDED_PALETTE_SIZE,
                    colors.len()
                ),
            ));
        }

        let hex = colors
            .iter()
            .map(|c| {
                HexColor::parse(c)
                    .map_err(|e| ValidationError::invalid_format("customPalette", e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let contrast = ColorAnalysis::palette_contrast(&hex);

        Ok(PaletteToken::new(
            CUSTOM_PALETTE_NAME,
            "Custom user-selected colors",
            hex,
            contrast,
        ))
    }

    fn slot(palette: &PaletteToken, index: usize) -> Result<HexColor, MissingSlot> {
        palette.color(index).cloned().ok_or_else(|| MissingSlot {
            palette: palette.name.clone(),
            slot: index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::palette::Contrast;

    fn token(name: &str, values: &[&str]) -> PaletteToken {
        let hex = values.iter().map(|v| HexColor::parse(v).unwrap()).collect();
        PaletteToken::new(name, format!("{} colors", name), hex, Contrast::Medium)
    }

    fn strings(token: &PaletteToken) -> Vec<&str> {
        token.hex.iter().map(|c| c.as_str()).collect()
    }

    #[test]
    fn blend_takes_theme_primary_secondary_and_layout_last() {
        let theme = token("ink", &["#1a1a1a", "#F6F2EC", "#C9A227"]);
        let layout = token("rules", &["#DDDDDD", "#8C7B6B"]);

        let blended = PaletteBlender::blend(&theme, &layout, &[]).unwrap();

        assert_eq!(strings(&blended), vec!["#1a1a1a", "#F6F2EC", "#8C7B6B"]);
        assert_eq!(blended.name, "ink+rules");
    }

    #[test]
    fn keyword_color_replaces_accent_slot_only() {
        let theme = token("ink", &["#1a1a1a", "#F6F2EC", "#C9A227"]);
        let layout = token("rules", &["#DDDDDD", "#8C7B6B"]);
        let keyword = vec![HexColor::parse("#722F37").unwrap(), HexColor::parse("#000").unwrap()];

        let blended = PaletteBlender::blend(&theme, &layout, &keyword).unwrap();

        assert_eq!(strings(&blended), vec!["#1a1a1a", "#F6F2EC", "#722F37"]);
        assert!(blended.name.ends_with("+keyword"));
    }

    #[test]
    fn blend_always_yields_three_colors() {
        let theme = token("wide", &["#111", "#222", "#333", "#444"]);
        let layout = token("single", &["#555"]);
        let blended = PaletteBlender::blend(&theme, &layout, &[]).unwrap();
        assert_eq!(blended.len(), BLENDED_PALETTE_SIZE);
    }

    #[test]
    fn blend_reports_missing_theme_slot() {
        let theme = token("short", &["#111"]);
        let layout = token("rules", &["#DDDDDD"]);
        let err = PaletteBlender::blend(&theme, &layout, &[]).unwrap_err();
        assert_eq!(err.slot, 1);
        assert_eq!(err.palette, "short");
    }

    #[test]
    fn blended_contrast_is_computed_from_colors() {
        let theme = token("ink", &["#000000", "#FFFFFF"]);
        let layout = token("rules", &["#777777"]);
        let blended = PaletteBlender::blend(&theme, &layout, &[]).unwrap();
        assert_eq!(blended.contrast, Contrast::High);
    }

    #[test]
    fn custom_palette_is_used_verbatim() {
        let colors = vec!["#111".to_string(), "#abcdef".to_string(), "#FFF".to_string()];
        let palette = PaletteBlender::custom(&colors).unwrap();
        assert_eq!(strings(&palette), vec!["#111", "#abcdef", "#FFF"]);
        assert_eq!(palette.name, CUSTOM_PALETTE_NAME);
    }

    #[test]
    fn custom_palette_rejects_wrong_count() {
        let colors = vec!["#111".to_string(), "#222".to_string()];
        let err = PaletteBlender::custom(&colors).unwrap_err();
        assert_eq!(err.field(), "customPalette");
    }

    #[test]
    fn custom_palette_rejects_invalid_color() {
        let colors = vec!["#111".to_string(), "blue".to_string(), "#333".to_string()];
        assert!(PaletteBlender::custom(&colors).is_err());
    }
}
