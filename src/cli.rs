//! Command-line interface definitions.
//!
//! Lives in the library so tooling (man page generation, completions) can
//! reach the same definitions the binary parses.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Apply table themes to document tables.
#[derive(Debug, Parser)]
#[command(name = "tabtheme", version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List available themes with their catalog index
    List,

    /// Print a theme definition as TOML
    Show {
        /// Theme index or name
        theme: String,
    },

    /// Apply a theme to the selected tables of a JSON document
    Apply {
        /// Theme index, theme name, or `clear` to remove formatting
        theme: String,

        /// JSON table document
        document: PathBuf,

        /// Write the result here instead of overwriting the document
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Preview a theme on a sample table
    Preview {
        /// Theme index, theme name, or `clear`
        theme: String,

        /// Rows in the sample table
        #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
        rows: Option<u16>,

        /// Columns in the sample table
        #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
        cols: Option<u16>,

        /// Print shading values instead of colors
        #[arg(long)]
        plain: bool,
    },

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    Show,
    /// Print the config file location
    Path,
    /// Write a default config file if none exists
    Init,
}
