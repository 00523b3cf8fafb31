//! Shading resolution.
//!
//! Shading runs in two stages. The base fill picks exactly one source for the
//! whole table (rainbow rows, rainbow columns, row stripes, column stripes, a
//! solid wash, or the host default). The highlight overlay then paints bands and corners in the
//! fixed order of [`OVERLAY_RULES`], so later rules win on shared cells and a
//! corner color always wins.

use tracing::{debug, trace};

use crate::color::{Color, Rgb};
use crate::grid::{Band, Corner, Grid};
use crate::theme::{Fill, Palette, ThemeDefinition};

/// Stage-one fill source chosen for a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseFill {
    /// Light palette indexed by row
    RainbowRows,
    /// Light palette indexed by column
    RainbowColumns,
    /// Alternate by row parity: (even, odd)
    RowStripes(Rgb, Rgb),
    /// Alternate by column parity: (even, odd)
    ColumnStripes(Rgb, Rgb),
    /// One color everywhere
    Wash(Rgb),
    /// Reset every cell to the host default
    Automatic,
}

impl BaseFill {
    /// Pick the fill source. The first matching branch wins.
    ///
    /// A lone stripe color is not a pair and does not fall back to a wash.
    pub fn select(theme: &ThemeDefinition) -> Self {
        match (theme.whole_table, theme.first_column, theme.header_row) {
            (Fill::Rainbow, Fill::Rainbow, _) => BaseFill::RainbowRows,
            (Fill::Rainbow, _, Fill::Rainbow) => BaseFill::RainbowColumns,
            (whole_table, _, _) => {
                if let Some((even, odd)) = theme.row_stripes.pair() {
                    BaseFill::RowStripes(even, odd)
                } else if let Some((even, odd)) = theme.column_stripes.pair() {
                    BaseFill::ColumnStripes(even, odd)
                } else if let Fill::Solid(color) = whole_table {
                    BaseFill::Wash(color)
                } else {
                    BaseFill::Automatic
                }
            }
        }
    }

    /// Color this fill gives a cell.
    pub fn color_at(&self, row: usize, col: usize) -> Color {
        match *self {
            BaseFill::RainbowRows => Color::Rgb(Palette::Light.at(row)),
            BaseFill::RainbowColumns => Color::Rgb(Palette::Light.at(col)),
            BaseFill::RowStripes(even, odd) => Color::Rgb(if row % 2 == 0 { even } else { odd }),
            BaseFill::ColumnStripes(even, odd) => Color::Rgb(if col % 2 == 0 { even } else { odd }),
            BaseFill::Wash(color) => Color::Rgb(color),
            BaseFill::Automatic => Color::Automatic,
        }
    }
}

/// How an overlay rule colors its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Solid(Rgb),
    /// Cycle a palette along the band
    Rainbow(Palette),
}

impl Paint {
    /// Color at `offset` positions along the target.
    pub fn color_along(&self, offset: usize) -> Rgb {
        match self {
            Paint::Solid(color) => *color,
            Paint::Rainbow(palette) => palette.at(offset),
        }
    }
}

/// What an overlay rule paints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Band(Band),
    Corner(Corner),
}

/// One step of the highlight overlay: a target and the theme field that
/// decides whether (and how) it is painted.
#[derive(Debug, Clone, Copy)]
pub struct OverlayRule {
    pub name: &'static str,
    pub target: Target,
    pub paint: fn(&ThemeDefinition) -> Option<Paint>,
}

impl OverlayRule {
    /// Paint this rule's target if the theme enables it. Returns whether it ran.
    pub fn apply(&self, grid: &mut Grid, theme: &ThemeDefinition) -> bool {
        let Some(paint) = (self.paint)(theme) else {
            trace!(rule = self.name, "overlay rule not set");
            return false;
        };

        match self.target {
            Target::Band(band) => {
                for (row, col) in grid.band_positions(band) {
                    let offset = if band.is_row() { col } else { row };
                    grid.set_shading(row, col, Color::Rgb(paint.color_along(offset)));
                }
            }
            Target::Corner(corner) => {
                let (row, col) = grid.corner_position(corner);
                grid.set_shading(row, col, Color::Rgb(paint.color_along(0)));
            }
        }
        true
    }
}

/// Highlight overlay rules in precedence order; later entries win.
pub const OVERLAY_RULES: [OverlayRule; 8] = [
    OverlayRule {
        name: "first_column",
        target: Target::Band(Band::FirstColumn),
        paint: first_column_paint,
    },
    OverlayRule {
        name: "last_column",
        target: Target::Band(Band::LastColumn),
        paint: last_column_paint,
    },
    OverlayRule {
        name: "header_row",
        target: Target::Band(Band::Header),
        paint: header_row_paint,
    },
    OverlayRule {
        name: "total_row",
        target: Target::Band(Band::Total),
        paint: total_row_paint,
    },
    OverlayRule {
        name: "header_first_cell",
        target: Target::Corner(Corner::HeaderFirst),
        paint: header_first_cell_paint,
    },
    OverlayRule {
        name: "header_last_cell",
        target: Target::Corner(Corner::HeaderLast),
        paint: header_last_cell_paint,
    },
    OverlayRule {
        name: "total_first_cell",
        target: Target::Corner(Corner::TotalFirst),
        paint: total_first_cell_paint,
    },
    OverlayRule {
        name: "total_last_cell",
        target: Target::Corner(Corner::TotalLast),
        paint: total_last_cell_paint,
    },
];

fn band_paint(fill: Fill) -> Option<Paint> {
    match fill {
        Fill::Unset => None,
        Fill::Solid(color) => Some(Paint::Solid(color)),
        Fill::Rainbow => Some(Paint::Rainbow(Palette::Medium)),
    }
}

fn first_column_paint(theme: &ThemeDefinition) -> Option<Paint> {
    band_paint(theme.first_column)
}

fn last_column_paint(theme: &ThemeDefinition) -> Option<Paint> {
    theme.last_column.map(Paint::Solid)
}

fn header_row_paint(theme: &ThemeDefinition) -> Option<Paint> {
    band_paint(theme.header_row)
}

fn total_row_paint(theme: &ThemeDefinition) -> Option<Paint> {
    theme.total_row.map(Paint::Solid)
}

fn header_first_cell_paint(theme: &ThemeDefinition) -> Option<Paint> {
    theme.header_first_cell.map(Paint::Solid)
}

fn header_last_cell_paint(theme: &ThemeDefinition) -> Option<Paint> {
    theme.header_last_cell.map(Paint::Solid)
}

fn total_first_cell_paint(theme: &ThemeDefinition) -> Option<Paint> {
    theme.total_first_cell.map(Paint::Solid)
}

fn total_last_cell_paint(theme: &ThemeDefinition) -> Option<Paint> {
    theme.total_last_cell.map(Paint::Solid)
}

/// Write every cell's shading for `theme`. Idempotent for a given grid state.
pub fn fill(grid: &mut Grid, theme: &ThemeDefinition) {
    let base = BaseFill::select(theme);
    debug!(theme = %theme.name, ?base, "base fill");

    for (row, col) in grid.positions() {
        grid.set_shading(row, col, base.color_at(row, col));
    }

    let mut applied = 0;
    for rule in &OVERLAY_RULES {
        if rule.apply(grid, theme) {
            applied += 1;
        }
    }
    debug!(theme = %theme.name, applied, "highlight overlay");
}
