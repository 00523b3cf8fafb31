//! Terminal preview of styled grids.
//!
//! Converts cell shading and fonts to ANSI escape sequences (24-bit color,
//! bold, italic, underline) or to a plain matrix of shading values for
//! non-color output.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::color::{Color, Rgb};
use crate::grid::{Cell, Grid, GridError};

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

/// Width of the widest shading text (`automatic`).
const SHADING_WIDTH: usize = 9;

/// Sample table used by previews: a header, numbered body rows, a total row.
pub fn sample_grid(rows: usize, cols: usize) -> Result<Grid, GridError> {
    let mut cells = Vec::with_capacity(rows);
    for row in 0..rows {
        let line = (0..cols)
            .map(|col| Cell::new(sample_text(row, col, rows)))
            .collect();
        cells.push(line);
    }
    Grid::from_rows(cells)
}

fn sample_text(row: usize, col: usize, rows: usize) -> String {
    match (row, col) {
        (0, 0) => "Item".to_string(),
        (0, c) => format!("Col {}", c),
        (r, 0) if r + 1 == rows && rows > 1 => "Total".to_string(),
        (r, 0) => format!("Row {}", r),
        (r, c) => format!("{}", r * 10 + c),
    }
}

/// Render shading values as an aligned matrix, one line per row.
pub fn render_plain(grid: &Grid) -> String {
    let mut out = String::new();
    for row in 0..grid.row_count() {
        let line = grid
            .row(row)
            .iter()
            .map(|cell| format!("{:<width$}", cell.shading.to_string(), width = SHADING_WIDTH))
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Render the grid with ANSI colors, each cell padded to `cell_width` columns.
pub fn render_ansi(grid: &Grid, cell_width: usize) -> String {
    let mut out = String::new();
    for row in 0..grid.row_count() {
        for cell in grid.row(row) {
            push_cell(&mut out, cell, cell_width);
        }
        out.push('\n');
    }
    out
}

fn push_cell(buf: &mut String, cell: &Cell, width: usize) {
    let styled = push_style(buf, cell);
    buf.push(' ');
    buf.push_str(&fit(&cell.text, width.saturating_sub(2)));
    buf.push(' ');
    if styled {
        buf.push_str(ANSI_RESET);
    }
}

/// Append SGR codes for a cell. Returns `true` if any code was appended.
fn push_style(buf: &mut String, cell: &Cell) -> bool {
    let mut styled = false;
    if let Color::Rgb(bg) = cell.shading {
        push_rgb(buf, 48, bg);
        styled = true;
    }
    if let Some(font) = &cell.font {
        if let Color::Rgb(fg) = font.color {
            push_rgb(buf, 38, fg);
            styled = true;
        }
        for (enabled, code) in [(font.bold, "1"), (font.italic, "3"), (font.underline, "4")] {
            if enabled {
                buf.push_str("\x1b[");
                buf.push_str(code);
                buf.push('m');
                styled = true;
            }
        }
    }
    styled
}

fn push_rgb(buf: &mut String, selector: u8, rgb: Rgb) {
    buf.push_str(&format!("\x1b[{};2;{};{};{}m", selector, rgb.r, rgb.g, rgb.b));
}

/// Truncate or pad `text` to exactly `width` display columns.
fn fit(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    let pad = width.saturating_sub(UnicodeWidthStr::width(out.as_str()));
    out.extend(std::iter::repeat(' ').take(pad));
    out
}
