//! Apply a theme selection to matched tables.
//!
//! This is the boundary contract of the engine: a theme selector and the
//! matched grids go in, mutated grids come out. Both failure modes are
//! detected before any grid is touched.

use tracing::info;

use crate::grid::Grid;
use crate::host::{HostError, TableHost};
use crate::resolve::{style_table, FontMode};
use crate::theme::{ThemeError, ThemeRegistry, ThemeSelector};

/// User-visible failures of an apply request.
#[derive(Debug, thiserror::Error)]
pub enum ApplyError {
    #[error("No table selected. Select one or more tables and try again.")]
    NoSelection,

    #[error("Invalid theme index {index} (catalog has {count} themes)")]
    InvalidThemeIndex { index: i32, count: usize },

    #[error(transparent)]
    Theme(ThemeError),

    #[error(transparent)]
    Host(#[from] HostError),
}

impl From<ThemeError> for ApplyError {
    fn from(err: ThemeError) -> Self {
        match err {
            ThemeError::OutOfRange { index, count } => ApplyError::InvalidThemeIndex { index, count },
            other => ApplyError::Theme(other),
        }
    }
}

/// Summary of a successful apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyReport {
    /// Name of the applied theme ("Clear" for the reset)
    pub theme: String,
    pub tables: usize,
    pub cells: usize,
    pub cleared: bool,
}

impl ApplyReport {
    /// User-friendly one-line description.
    pub fn message(&self) -> String {
        let tables = if self.tables == 1 { "table" } else { "tables" };
        if self.cleared {
            format!("Cleared formatting in {} {}", self.tables, tables)
        } else {
            format!(
                "Applied theme '{}' to {} {} ({} cells)",
                self.theme, self.tables, tables, self.cells
            )
        }
    }
}

/// Style every grid with the selected theme.
///
/// Fails with [`ApplyError::NoSelection`] when `grids` is empty and with
/// [`ApplyError::InvalidThemeIndex`] when the selector is not a catalog index;
/// no grid is modified in either case.
pub fn apply_theme(
    registry: &ThemeRegistry,
    selector: ThemeSelector,
    grids: &mut [Grid],
) -> Result<ApplyReport, ApplyError> {
    if grids.is_empty() {
        return Err(ApplyError::NoSelection);
    }

    let theme = registry.resolve(selector)?;
    let mode = if selector.is_clear() {
        FontMode::Clear
    } else {
        FontMode::Apply
    };

    let mut cells = 0;
    for (index, grid) in grids.iter_mut().enumerate() {
        style_table(grid, &theme, mode);
        cells += grid.row_count() * grid.column_count();
        info!(
            table = index,
            rows = grid.row_count(),
            cols = grid.column_count(),
            theme = %theme.name,
            "styled table"
        );
    }

    Ok(ApplyReport {
        theme: theme.name.clone(),
        tables: grids.len(),
        cells,
        cleared: selector.is_clear(),
    })
}

/// Fetch selected tables from a host, style them, and commit them back.
///
/// Nothing is committed unless every step before it succeeded.
pub fn apply_to_host<H: TableHost + ?Sized>(
    host: &mut H,
    registry: &ThemeRegistry,
    selector: ThemeSelector,
) -> Result<ApplyReport, ApplyError> {
    let mut grids = host.selected_tables()?;
    let report = apply_theme(registry, selector, &mut grids)?;
    host.commit(grids)?;
    Ok(report)
}
