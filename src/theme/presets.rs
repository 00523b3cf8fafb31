//! Built-in theme catalog.
//!
//! Order matters: a theme's position here is its catalog index.

use super::{Fill, FontSpec, StripePair, ThemeDefinition};
use crate::color::Rgb;

const FAMILY: &str = "Calibri";
const SIZE: f32 = 11.0;

/// All built-in themes in catalog order.
pub fn builtin() -> Vec<ThemeDefinition> {
    vec![
        ocean(),
        ledger(),
        forest(),
        slate(),
        rainbow_rows(),
        rainbow_columns(),
        column_bands(),
        spotlight(),
        minimal(),
    ]
}

fn base_font() -> FontSpec {
    FontSpec::new(FAMILY, SIZE)
}

/// Dark blue header over light blue row stripes.
pub fn ocean() -> ThemeDefinition {
    ThemeDefinition {
        name: "Ocean".to_string(),
        header_row: Fill::Solid(Rgb::from_u32(0x1F4E79)),
        row_stripes: StripePair::new(Rgb::from_u32(0xDDEBF7), Rgb::WHITE),
        header_font: Some(base_font().bold().with_color(Rgb::WHITE)),
        default_font: Some(base_font()),
        ..ThemeDefinition::default()
    }
}

/// Accounting layout: header, gray stripes and a bold total row.
pub fn ledger() -> ThemeDefinition {
    ThemeDefinition {
        name: "Ledger".to_string(),
        header_row: Fill::Solid(Rgb::from_u32(0x404040)),
        total_row: Some(Rgb::from_u32(0xD9D9D9)),
        row_stripes: StripePair::new(Rgb::WHITE, Rgb::from_u32(0xF2F2F2)),
        header_font: Some(base_font().bold().with_color(Rgb::WHITE)),
        total_font: Some(base_font().bold().underline()),
        default_font: Some(base_font()),
        ..ThemeDefinition::default()
    }
}

/// Green wash with a darker first column.
pub fn forest() -> ThemeDefinition {
    ThemeDefinition {
        name: "Forest".to_string(),
        whole_table: Fill::Solid(Rgb::from_u32(0xE2EFDA)),
        first_column: Fill::Solid(Rgb::from_u32(0xA9D08E)),
        header_row: Fill::Solid(Rgb::from_u32(0x375623)),
        header_font: Some(base_font().bold().with_color(Rgb::WHITE)),
        first_column_font: Some(base_font().bold()),
        default_font: Some(base_font()),
        ..ThemeDefinition::default()
    }
}

/// Slate wash with accented corner cells.
pub fn slate() -> ThemeDefinition {
    let dark = Rgb::from_u32(0x333F4F);
    let accent = Rgb::from_u32(0xC65911);
    ThemeDefinition {
        name: "Slate".to_string(),
        whole_table: Fill::Solid(Rgb::from_u32(0xD6DCE4)),
        header_row: Fill::Solid(dark),
        total_row: Some(dark),
        header_first_cell: Some(accent),
        total_last_cell: Some(accent),
        header_font: Some(base_font().bold().with_color(Rgb::WHITE)),
        total_font: Some(base_font().bold().with_color(Rgb::WHITE)),
        ..ThemeDefinition::default()
    }
}

/// Each row a different light tint, first column a stronger tone.
pub fn rainbow_rows() -> ThemeDefinition {
    ThemeDefinition {
        name: "Rainbow Rows".to_string(),
        whole_table: Fill::Rainbow,
        first_column: Fill::Rainbow,
        first_column_font: Some(base_font().bold()),
        ..ThemeDefinition::default()
    }
}

/// Each column a different light tint, header a stronger tone.
pub fn rainbow_columns() -> ThemeDefinition {
    ThemeDefinition {
        name: "Rainbow Columns".to_string(),
        whole_table: Fill::Rainbow,
        header_row: Fill::Rainbow,
        header_font: Some(base_font().bold()),
        ..ThemeDefinition::default()
    }
}

/// Alternating column stripes with a highlighted last column.
pub fn column_bands() -> ThemeDefinition {
    ThemeDefinition {
        name: "Column Bands".to_string(),
        column_stripes: StripePair::new(Rgb::from_u32(0xFFF2CC), Rgb::WHITE),
        header_row: Fill::Solid(Rgb::from_u32(0xBF8F00)),
        last_column: Some(Rgb::from_u32(0xFFE699)),
        header_font: Some(base_font().bold().with_color(Rgb::WHITE)),
        last_column_font: Some(base_font().italic()),
        ..ThemeDefinition::default()
    }
}

/// Only the four corners are marked.
pub fn spotlight() -> ThemeDefinition {
    let corner = Rgb::from_u32(0xFFC000);
    ThemeDefinition {
        name: "Spotlight".to_string(),
        header_first_cell: Some(corner),
        header_last_cell: Some(corner),
        total_first_cell: Some(corner),
        total_last_cell: Some(corner),
        ..ThemeDefinition::default()
    }
}

/// Fonts only, no shading.
pub fn minimal() -> ThemeDefinition {
    ThemeDefinition {
        name: "Minimal".to_string(),
        header_font: Some(base_font().bold()),
        default_font: Some(FontSpec::new("Segoe UI", 10.5).with_color(Rgb::from_u32(0x404040))),
        ..ThemeDefinition::default()
    }
}
