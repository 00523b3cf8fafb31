//! Theme catalog lookup.
//!
//! The registry maps a catalog index to an immutable [`ThemeDefinition`].
//! Built-in presets come first, followed by any user themes loaded from a
//! TOML file of `[[theme]]` tables.
//!
//! The clear pseudo-theme is not a catalog entry. Callers turn a raw index
//! into a [`ThemeSelector`] first, which maps [`ThemeSelector::CLEAR_SENTINEL`]
//! to [`ThemeSelector::Clear`] before any lookup happens.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{presets, ThemeDefinition};

/// Errors from theme lookup and theme file loading.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("Theme index {index} is out of range (catalog has {count} themes)")]
    OutOfRange { index: i32, count: usize },

    #[error("Unknown theme '{0}'. Run `tabtheme list` to see available themes.")]
    UnknownTheme(String),

    #[error("Failed to read theme file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse theme file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Which theme the caller wants applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSelector {
    /// A catalog index, not yet validated
    Index(i32),
    /// Reset tables to the unstyled baseline
    Clear,
}

impl ThemeSelector {
    /// Raw index reserved for "clear".
    pub const CLEAR_SENTINEL: i32 = i32::MAX;

    /// Map a raw host index, honoring the clear sentinel.
    pub fn from_raw(raw: i32) -> Self {
        if raw == Self::CLEAR_SENTINEL {
            ThemeSelector::Clear
        } else {
            ThemeSelector::Index(raw)
        }
    }

    pub fn is_clear(&self) -> bool {
        matches!(self, ThemeSelector::Clear)
    }
}

/// On-disk layout of a user theme file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ThemeFile {
    #[serde(rename = "theme", default)]
    themes: Vec<ThemeDefinition>,
}

/// Ordered catalog of themes.
#[derive(Debug, Clone, Default)]
pub struct ThemeRegistry {
    themes: Vec<ThemeDefinition>,
}

impl ThemeRegistry {
    /// Registry holding only the built-in presets.
    pub fn builtin() -> Self {
        Self {
            themes: presets::builtin(),
        }
    }

    /// Registry with no themes at all.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_themes(themes: Vec<ThemeDefinition>) -> Self {
        Self { themes }
    }

    /// Parse `[[theme]]` tables from TOML text.
    pub fn parse_themes(content: &str) -> Result<Vec<ThemeDefinition>, toml::de::Error> {
        let file: ThemeFile = toml::from_str(content)?;
        Ok(file.themes)
    }

    /// Render themes as a theme file.
    pub fn to_theme_file(themes: &[ThemeDefinition]) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&ThemeFile {
            themes: themes.to_vec(),
        })
    }

    /// Append user themes from a TOML file. Returns how many were added.
    ///
    /// Nothing is appended if the file cannot be read or parsed.
    pub fn load_user_themes(&mut self, path: &Path) -> Result<usize, ThemeError> {
        let content = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let themes = Self::parse_themes(&content).map_err(|source| ThemeError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let added = themes.len();
        debug!(path = %path.display(), added, "loaded user themes");
        self.themes.extend(themes);
        Ok(added)
    }

    /// Builder form of [`load_user_themes`](Self::load_user_themes).
    pub fn with_user_themes(mut self, path: &Path) -> Result<Self, ThemeError> {
        self.load_user_themes(path)?;
        Ok(self)
    }

    /// Number of themes in the catalog.
    pub fn count(&self) -> usize {
        self.themes.len()
    }

    /// Look up a theme by catalog index.
    pub fn get_theme(&self, index: i32) -> Result<&ThemeDefinition, ThemeError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.themes.get(i))
            .ok_or(ThemeError::OutOfRange {
                index,
                count: self.count(),
            })
    }

    /// Theme for a selector; `Clear` yields the all-unset theme without a lookup.
    pub fn resolve(&self, selector: ThemeSelector) -> Result<Cow<'_, ThemeDefinition>, ThemeError> {
        match selector {
            ThemeSelector::Clear => Ok(Cow::Owned(ThemeDefinition::clear())),
            ThemeSelector::Index(index) => self.get_theme(index).map(Cow::Borrowed),
        }
    }

    /// Find a theme by case-insensitive name.
    pub fn find(&self, name: &str) -> Option<(usize, &ThemeDefinition)> {
        let name = name.trim();
        self.iter()
            .find(|(_, theme)| theme.name.eq_ignore_ascii_case(name))
    }

    /// Themes with their catalog indices.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &ThemeDefinition)> {
        self.themes.iter().enumerate()
    }

    /// Parse a user-supplied selector: `clear`, an index, or a theme name.
    ///
    /// Indices are not range-checked here; that happens on lookup.
    pub fn parse_selector(&self, input: &str) -> Result<ThemeSelector, ThemeError> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("clear") {
            return Ok(ThemeSelector::Clear);
        }
        if let Ok(raw) = input.parse::<i32>() {
            return Ok(ThemeSelector::from_raw(raw));
        }
        match self.find(input) {
            Some((index, _)) => {
                let index =
                    i32::try_from(index).map_err(|_| ThemeError::UnknownTheme(input.to_string()))?;
                Ok(ThemeSelector::Index(index))
            }
            None => Err(ThemeError::UnknownTheme(input.to_string())),
        }
    }
}
