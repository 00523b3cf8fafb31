//! Theme definitions.
//!
//! A [`ThemeDefinition`] is a declarative bundle of shading and font rules for
//! a table. Band fills that may cycle through a palette use the [`Fill`] tagged
//! variant, so a rainbow fill can never be mistaken for a concrete color.
//!
//! # Module Structure
//!
//! - [`palette`] - Light and medium rainbow palettes
//! - [`presets`] - Built-in theme catalog
//! - [`registry`] - Index-based theme lookup and user theme files

pub mod palette;
pub mod presets;
pub mod registry;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::color::{ColorParseError, Rgb};

pub use palette::Palette;
pub use registry::{ThemeError, ThemeRegistry, ThemeSelector};

/// Keyword used for [`Fill::Rainbow`] in theme files.
const RAINBOW: &str = "rainbow";

/// Fill mode for bands that support procedural palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Fill {
    /// No rule
    #[default]
    Unset,
    /// One concrete color
    Solid(Rgb),
    /// Cycle through a palette by position
    Rainbow,
}

impl Fill {
    pub fn is_unset(&self) -> bool {
        matches!(self, Fill::Unset)
    }

    pub fn is_rainbow(&self) -> bool {
        matches!(self, Fill::Rainbow)
    }

    /// The solid color, if this is a solid fill.
    pub fn solid(&self) -> Option<Rgb> {
        match self {
            Fill::Solid(rgb) => Some(*rgb),
            _ => None,
        }
    }
}

impl From<Rgb> for Fill {
    fn from(rgb: Rgb) -> Self {
        Fill::Solid(rgb)
    }
}

impl fmt::Display for Fill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fill::Unset => f.write_str("unset"),
            Fill::Solid(rgb) => rgb.fmt(f),
            Fill::Rainbow => f.write_str(RAINBOW),
        }
    }
}

impl FromStr for Fill {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(RAINBOW) {
            Ok(Fill::Rainbow)
        } else if s.is_empty() || s.eq_ignore_ascii_case("unset") {
            Ok(Fill::Unset)
        } else {
            s.parse().map(Fill::Solid)
        }
    }
}

impl Serialize for Fill {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Fill {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Two alternating stripe colors. Only usable when both are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StripePair {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<Rgb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second: Option<Rgb>,
}

impl StripePair {
    pub const fn new(first: Rgb, second: Rgb) -> Self {
        Self {
            first: Some(first),
            second: Some(second),
        }
    }

    /// Both colors, or `None` if either half is missing.
    pub fn pair(&self) -> Option<(Rgb, Rgb)> {
        match (self.first, self.second) {
            (Some(first), Some(second)) => Some((first, second)),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none() && self.second.is_none()
    }
}

/// Font rule for a table region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: String,
    /// Point size
    pub size: f32,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub underline: bool,
    /// Foreground color; `None` means automatic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgb>,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            bold: false,
            italic: false,
            underline: false,
            color: None,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }

    /// Size with at most one decimal place: `11`, `10.5`.
    pub fn formatted_size(&self) -> String {
        let tenths = (f64::from(self.size) * 10.0).round() as i64;
        if tenths % 10 == 0 {
            format!("{}", tenths / 10)
        } else {
            format!("{:.1}", tenths as f64 / 10.0)
        }
    }
}

/// A named bundle of shading and font rules applicable to a table.
///
/// Unset fields are skipped by the resolvers, so partially authored themes
/// are valid. The all-unset value is the "clear" pseudo-theme.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeDefinition {
    pub name: String,

    // === Base fills ===
    #[serde(skip_serializing_if = "Fill::is_unset")]
    pub whole_table: Fill,
    #[serde(skip_serializing_if = "StripePair::is_empty")]
    pub row_stripes: StripePair,
    #[serde(skip_serializing_if = "StripePair::is_empty")]
    pub column_stripes: StripePair,

    // === Band highlights ===
    #[serde(skip_serializing_if = "Fill::is_unset")]
    pub first_column: Fill,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_column: Option<Rgb>,
    #[serde(skip_serializing_if = "Fill::is_unset")]
    pub header_row: Fill,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_row: Option<Rgb>,

    // === Corner cells ===
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_first_cell: Option<Rgb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_last_cell: Option<Rgb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_first_cell: Option<Rgb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_last_cell: Option<Rgb>,

    // === Fonts ===
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_font: Option<FontSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_font: Option<FontSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_column_font: Option<FontSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_column_font: Option<FontSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_font: Option<FontSpec>,
}

impl ThemeDefinition {
    /// An otherwise empty theme with a display name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The "clear" pseudo-theme: every rule unset.
    pub fn clear() -> Self {
        Self::named("Clear")
    }

    /// True when no shading or font rule is set.
    pub fn is_empty(&self) -> bool {
        let mut rules = self.clone();
        rules.name.clear();
        rules == Self::default()
    }
}
