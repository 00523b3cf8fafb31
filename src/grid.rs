//! Table grid abstraction.
//!
//! A [`Grid`] is a rectangular matrix of [`Cell`]s built once per table. Each
//! cell owns its shading slot and the font it will write through to the host.
//! The engine only mutates shading and font; cell text is carried for the
//! host adapters and never touched.
//!
//! Bands are structural positions: row 0 is the header, the last row is the
//! total, column 0 the first column, the last column the last column. They
//! exist whether or not any rule targets them.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::theme::FontSpec;

/// Errors building a grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("Table must have at least one row and one column (got {rows}x{cols})")]
    Empty { rows: usize, cols: usize },

    #[error("Table is not rectangular: row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Style written through to a cell's content.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppliedFont {
    pub family: String,
    /// Size as handed to the host, e.g. `11` or `10.5`
    pub size: String,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub underline: bool,
    #[serde(default)]
    pub color: Color,
}

impl From<&FontSpec> for AppliedFont {
    fn from(spec: &FontSpec) -> Self {
        Self {
            family: spec.family.clone(),
            size: spec.formatted_size(),
            bold: spec.bold,
            italic: spec.italic,
            underline: spec.underline,
            color: Color::from(spec.color),
        }
    }
}

/// A single table cell.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cell {
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Color::is_automatic")]
    pub shading: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<AppliedFont>,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// True when the cell has no shading and no font.
    pub fn is_unstyled(&self) -> bool {
        self.shading.is_automatic() && self.font.is_none()
    }

    /// Drop shading and font, keeping the text.
    pub fn reset_style(&mut self) {
        self.shading = Color::Automatic;
        self.font = None;
    }
}

/// Table bands eligible for independent styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    Header,
    Total,
    FirstColumn,
    LastColumn,
}

impl Band {
    /// Row bands run across columns; column bands run down rows.
    pub fn is_row(&self) -> bool {
        matches!(self, Band::Header | Band::Total)
    }
}

/// The four corner cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    HeaderFirst,
    HeaderLast,
    TotalFirst,
    TotalLast,
}

/// Rectangular matrix of cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Grid of fresh, unstyled, empty cells.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::default(); rows * cols],
        })
    }

    /// Build from host rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let row_count = rows.len();
        let col_count = rows.first().map_or(0, Vec::len);
        if row_count == 0 || col_count == 0 {
            return Err(GridError::Empty {
                rows: row_count,
                cols: col_count,
            });
        }

        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, len)| *len != col_count)
        {
            return Err(GridError::Ragged {
                row,
                expected: col_count,
                found,
            });
        }

        Ok(Self {
            rows: row_count,
            cols: col_count,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn column_count(&self) -> usize {
        self.cols
    }

    /// Index of the total row.
    pub fn last_row(&self) -> usize {
        self.rows - 1
    }

    /// Index of the last column.
    pub fn last_column(&self) -> usize {
        self.cols - 1
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        if row < self.rows && col < self.cols {
            self.cells.get_mut(row * self.cols + col)
        } else {
            None
        }
    }

    /// Cells of one row.
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    pub fn set_shading(&mut self, row: usize, col: usize, color: Color) {
        self[(row, col)].shading = color;
    }

    pub fn shading(&self, row: usize, col: usize) -> Color {
        self[(row, col)].shading
    }

    pub fn apply_font(&mut self, row: usize, col: usize, font: &AppliedFont) {
        self[(row, col)].font = Some(font.clone());
    }

    /// Every `(row, col)` position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }

    /// Positions of a whole band, in order along the band.
    pub fn band_positions(&self, band: Band) -> Vec<(usize, usize)> {
        match band {
            Band::Header => (0..self.cols).map(|col| (0, col)).collect(),
            Band::Total => (0..self.cols).map(|col| (self.last_row(), col)).collect(),
            Band::FirstColumn => (0..self.rows).map(|row| (row, 0)).collect(),
            Band::LastColumn => (0..self.rows)
                .map(|row| (row, self.last_column()))
                .collect(),
        }
    }

    pub fn corner_position(&self, corner: Corner) -> (usize, usize) {
        match corner {
            Corner::HeaderFirst => (0, 0),
            Corner::HeaderLast => (0, self.last_column()),
            Corner::TotalFirst => (self.last_row(), 0),
            Corner::TotalLast => (self.last_row(), self.last_column()),
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    /// Hand the cells back as host rows.
    pub fn into_rows(self) -> Vec<Vec<Cell>> {
        let cols = self.cols;
        let mut rows = Vec::with_capacity(self.rows);
        let mut cells = self.cells.into_iter();
        for _ in 0..self.rows {
            rows.push(cells.by_ref().take(cols).collect());
        }
        rows
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = Cell;

    fn index(&self, (row, col): (usize, usize)) -> &Cell {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} grid",
            self.rows,
            self.cols
        );
        &self.cells[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Grid {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Cell {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} grid",
            self.rows,
            self.cols
        );
        &mut self.cells[row * self.cols + col]
    }
}
