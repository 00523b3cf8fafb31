//! Configuration file handling.
//!
//! The config lives at `<config_dir>/tabtheme/config.toml` unless the
//! `TABTHEME_CONFIG` environment variable points elsewhere. A missing file is
//! not an error: defaults are used.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::theme::{ThemeError, ThemeRegistry};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "TABTHEME_CONFIG";

/// Errors loading or saving the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Theme catalog settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemesConfig {
    /// Include the built-in presets ahead of user themes
    pub include_builtin: bool,
    /// TOML file of additional `[[theme]]` definitions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<PathBuf>,
}

impl Default for ThemesConfig {
    fn default() -> Self {
        Self {
            include_builtin: true,
            user_file: None,
        }
    }
}

/// Preview rendering settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Rows in the sample table
    pub rows: usize,
    /// Columns in the sample table
    pub cols: usize,
    /// Display width of each cell
    pub cell_width: usize,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 4,
            cell_width: 10,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub themes: ThemesConfig,
    pub preview: PreviewConfig,
}

impl Config {
    /// Location of the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        dirs::config_dir()
            .map(|dir| dir.join("tabtheme").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from the default location, falling back to defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`, falling back to defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, self.to_toml()?).map_err(io_err)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Build the theme catalog this config describes.
    ///
    /// A relative `user_file` is resolved against `base_dir` (usually the
    /// directory holding the config file).
    pub fn registry(&self, base_dir: Option<&Path>) -> Result<ThemeRegistry, ThemeError> {
        let mut registry = if self.themes.include_builtin {
            ThemeRegistry::builtin()
        } else {
            ThemeRegistry::empty()
        };

        if let Some(file) = &self.themes.user_file {
            let path = match base_dir {
                Some(base) if file.is_relative() => base.join(file),
                _ => file.clone(),
            };
            registry.load_user_themes(&path)?;
        }
        Ok(registry)
    }
}
