//! Subcommand handlers for the tabtheme binary.

pub mod apply;
pub mod config;
pub mod theme;

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use clap::CommandFactory;
use clap_complete::Shell;

use tabtheme::cli::Cli;
use tabtheme::{Config, ThemeRegistry};

/// Per-invocation state shared by the handlers.
pub struct Context {
    /// `--config` override, if given
    config_override: Option<PathBuf>,
}

impl Context {
    pub fn new(config_override: Option<&Path>) -> Self {
        Self {
            config_override: config_override.map(Path::to_path_buf),
        }
    }

    /// Config file location, honoring `--config` first.
    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.config_override {
            Some(path) => Ok(path.clone()),
            None => Ok(Config::config_path()?),
        }
    }

    pub fn load_config(&self) -> Result<Config> {
        let config = match &self.config_override {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        };
        config.context("Failed to load configuration")
    }

    /// Write `config` to the active location.
    pub fn save_config(&self, config: &Config) -> Result<()> {
        match &self.config_override {
            Some(path) => config.save_to(path)?,
            None => config.save()?,
        }
        Ok(())
    }

    /// Theme catalog from the config, with user files resolved next to it.
    pub fn load_registry(&self) -> Result<ThemeRegistry> {
        let path = self.config_path()?;
        let config = self.load_config()?;
        Ok(config.registry(path.parent())?)
    }
}

/// Write a completion script for `shell` to stdout.
#[cfg(not(tarpaulin_include))]
pub fn handle_completions(shell: Shell) {
    let mut command = Cli::command();
    clap_complete::generate(shell, &mut command, "tabtheme", &mut io::stdout());
}
