//! Font resolution.
//!
//! Each band font claims its band, which shrinks the interior that the
//! default font may touch. [`FontBounds`] captures that interior; the rules in
//! [`FONT_RULES`] then write only inside their own region, so no two rules
//! ever write the same cell (except the header/total rows of a one-row table,
//! which are the same row).

use std::ops::Range;

use tracing::{debug, trace};

use crate::grid::{AppliedFont, Band, Grid};
use crate::theme::{FontSpec, ThemeDefinition};

/// Half-open interior bounds left after band fonts claim their bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontBounds {
    pub min_row: usize,
    pub max_row: usize,
    pub min_col: usize,
    pub max_col: usize,
}

impl FontBounds {
    /// Derive the interior for a theme on a `rows` x `cols` table.
    pub fn compute(theme: &ThemeDefinition, rows: usize, cols: usize) -> Self {
        Self {
            min_row: usize::from(theme.header_font.is_some()),
            max_row: rows.saturating_sub(usize::from(theme.total_font.is_some())),
            min_col: usize::from(theme.first_column_font.is_some()),
            max_col: cols.saturating_sub(usize::from(theme.last_column_font.is_some())),
        }
    }

    pub fn for_grid(theme: &ThemeDefinition, grid: &Grid) -> Self {
        Self::compute(theme, grid.row_count(), grid.column_count())
    }

    /// Rows available to column fonts and the default font.
    pub fn rows(&self) -> Range<usize> {
        self.min_row..self.max_row
    }

    /// Columns available to row fonts and the default font.
    pub fn cols(&self) -> Range<usize> {
        self.min_col..self.max_col
    }

    /// True when the interior holds no cells.
    pub fn is_empty(&self) -> bool {
        self.rows().is_empty() || self.cols().is_empty()
    }
}

/// Region a font rule writes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontRegion {
    /// A band, clipped to the interior along its length
    Band(Band),
    /// Everything inside the bounds
    Interior,
}

impl FontRegion {
    /// Cell positions this region covers for the given bounds.
    pub fn positions(&self, grid: &Grid, bounds: &FontBounds) -> Vec<(usize, usize)> {
        match self {
            FontRegion::Band(Band::Header) => bounds.cols().map(|col| (0, col)).collect(),
            FontRegion::Band(Band::Total) => {
                let row = grid.last_row();
                bounds.cols().map(|col| (row, col)).collect()
            }
            FontRegion::Band(Band::FirstColumn) => bounds.rows().map(|row| (row, 0)).collect(),
            FontRegion::Band(Band::LastColumn) => {
                let col = grid.last_column();
                bounds.rows().map(|row| (row, col)).collect()
            }
            FontRegion::Interior => bounds
                .rows()
                .flat_map(|row| bounds.cols().map(move |col| (row, col)))
                .collect(),
        }
    }
}

/// One font rule: the region it owns and the theme field it applies.
#[derive(Debug, Clone, Copy)]
pub struct FontRule {
    pub name: &'static str,
    pub region: FontRegion,
    pub font: fn(&ThemeDefinition) -> Option<&FontSpec>,
}

impl FontRule {
    /// Apply the rule if the theme sets its font. Returns cells written.
    pub fn apply(&self, grid: &mut Grid, theme: &ThemeDefinition, bounds: &FontBounds) -> usize {
        let Some(spec) = (self.font)(theme) else {
            trace!(rule = self.name, "font rule not set");
            return 0;
        };

        let font = AppliedFont::from(spec);
        let positions = self.region.positions(grid, bounds);
        if positions.is_empty() {
            debug!(rule = self.name, "font region is empty, skipping");
        }
        for &(row, col) in &positions {
            grid.apply_font(row, col, &font);
        }
        positions.len()
    }
}

/// Font rules in application order.
pub const FONT_RULES: [FontRule; 5] = [
    FontRule {
        name: "header_font",
        region: FontRegion::Band(Band::Header),
        font: header_font,
    },
    FontRule {
        name: "total_font",
        region: FontRegion::Band(Band::Total),
        font: total_font,
    },
    FontRule {
        name: "first_column_font",
        region: FontRegion::Band(Band::FirstColumn),
        font: first_column_font,
    },
    FontRule {
        name: "last_column_font",
        region: FontRegion::Band(Band::LastColumn),
        font: last_column_font,
    },
    FontRule {
        name: "default_font",
        region: FontRegion::Interior,
        font: default_font,
    },
];

fn header_font(theme: &ThemeDefinition) -> Option<&FontSpec> {
    theme.header_font.as_ref()
}

fn total_font(theme: &ThemeDefinition) -> Option<&FontSpec> {
    theme.total_font.as_ref()
}

fn first_column_font(theme: &ThemeDefinition) -> Option<&FontSpec> {
    theme.first_column_font.as_ref()
}

fn last_column_font(theme: &ThemeDefinition) -> Option<&FontSpec> {
    theme.last_column_font.as_ref()
}

fn default_font(theme: &ThemeDefinition) -> Option<&FontSpec> {
    theme.default_font.as_ref()
}

/// Write theme fonts into qualifying cells. Cells outside every region keep
/// whatever font they had.
pub fn apply_fonts(grid: &mut Grid, theme: &ThemeDefinition) {
    let bounds = FontBounds::for_grid(theme, grid);
    debug!(theme = %theme.name, ?bounds, "font bounds");

    let written: usize = FONT_RULES
        .iter()
        .map(|rule| rule.apply(grid, theme, &bounds))
        .sum();
    debug!(theme = %theme.name, written, "fonts applied");
}
