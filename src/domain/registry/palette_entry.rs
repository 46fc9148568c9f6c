//! Static palette rows shared by the theme and layout tables.

use crate::domain::foundation::{HexColor, ValidationError};
use crate::domain::palette::{Contrast, PaletteToken};

/// A palette as written in the built-in tables, before hex validation.
#[derive(Debug, Clone, Copy)]
pub(super) struct PaletteEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub hex: &'static [&'static str],
    pub contrast: Contrast,
}

impl PaletteEntry {
    /// Validates every color and builds the owned token.
    pub(super) fn to_token(self) -> Result<PaletteToken, ValidationError> {
        let hex = self
            .hex
            .iter()
            .map(|value| HexColor::parse(value))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(PaletteToken::new(self.name, self.description, hex, self.contrast))
    }
}
