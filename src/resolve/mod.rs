//! Theme resolution engine.
//!
//! Turns a [`ThemeDefinition`] into concrete per-cell shading and fonts.
//! Every pass is a total function of the grid shape and the theme: rules that
//! cannot apply (half a stripe pair, an empty font region) are skipped, never
//! reported as errors.
//!
//! # Module Structure
//!
//! - [`shading`] - Base fill and highlight overlay
//! - [`font`] - Font bounds and band/default font rules
//! - [`clear`] - Reset to the unstyled baseline

pub mod clear;
pub mod font;
pub mod shading;

pub use clear::clear;
pub use font::{apply_fonts, FontBounds, FontRegion, FontRule, FONT_RULES};
pub use shading::{fill, BaseFill, OverlayRule, Paint, Target, OVERLAY_RULES};

use crate::grid::Grid;
use crate::theme::ThemeDefinition;

/// How the font stage treats a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontMode {
    /// Write theme fonts
    Apply,
    /// Reset every cell to the unstyled baseline
    Clear,
}

/// Run the full pipeline on one table: shading, then fonts or clear.
pub fn style_table(grid: &mut Grid, theme: &ThemeDefinition, mode: FontMode) {
    fill(grid, theme);
    match mode {
        FontMode::Apply => apply_fonts(grid, theme),
        FontMode::Clear => clear(grid),
    }
}
