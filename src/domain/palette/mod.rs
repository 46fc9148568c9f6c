//! Palette module - color tokens, color analysis and the palette blender.

mod blender;
mod color_analysis;
mod token;

pub use blender::{MissingSlot, PaletteBlender, BLENDED_PALETTE_SIZE, CUSTOM_PALETTE_NAME};
pub use color_analysis::{ColorAnalysis, Temperature};
pub use token::{Contrast, PaletteToken};
