//! tabtheme - table theme resolution engine.
//!
//! Given a rectangular table and a declarative [`ThemeDefinition`], decides
//! the shading color and font every cell ends up with. Whole-table washes,
//! rainbow palettes, row/column stripes, band highlights, corner overrides
//! and band fonts are resolved under a fixed precedence.
//!
//! ```
//! use tabtheme::{apply_theme, Grid, ThemeRegistry, ThemeSelector};
//!
//! let registry = ThemeRegistry::builtin();
//! let mut grids = vec![Grid::new(4, 3).unwrap()];
//! let report = apply_theme(&registry, ThemeSelector::Index(0), &mut grids).unwrap();
//! assert_eq!(report.tables, 1);
//! ```
//!
//! # Module Structure
//!
//! - [`color`] - RGB and automatic colors
//! - [`theme`] - Theme definitions, palettes, presets and the registry
//! - [`grid`] - Table grid and cells
//! - [`resolve`] - Shading, font and clear passes
//! - [`apply`] - Theme selection applied to matched tables
//! - [`host`] - Host document adapters
//! - [`render`] - Terminal previews
//! - [`config`] - Configuration file
//! - [`cli`] - Command-line definitions
//! - [`output`] - Styled CLI output

pub mod apply;
pub mod cli;
pub mod color;
pub mod config;
pub mod grid;
pub mod host;
pub mod output;
pub mod render;
pub mod resolve;
pub mod theme;

pub use apply::{apply_theme, apply_to_host, ApplyError, ApplyReport};
pub use color::{Color, Rgb};
pub use config::Config;
pub use grid::{AppliedFont, Band, Cell, Corner, Grid, GridError};
pub use host::{HostError, JsonDocument, TableHost};
pub use resolve::{apply_fonts, clear, fill, style_table, FontBounds, FontMode};
pub use theme::{Fill, FontSpec, StripePair, ThemeDefinition, ThemeError, ThemeRegistry, ThemeSelector};
