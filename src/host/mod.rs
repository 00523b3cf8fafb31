//! Host document adapters.
//!
//! The engine never reads or writes a document itself. A [`TableHost`]
//! supplies grids for the tables the user selected and takes the styled
//! grids back for persistence.
//!
//! - [`json`] - JSON table documents

pub mod json;

pub use json::JsonDocument;

use std::path::PathBuf;

use crate::grid::{Grid, GridError};

/// Errors raised by host adapters.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Table {table} is malformed: {source}")]
    MalformedTable {
        table: usize,
        #[source]
        source: GridError,
    },

    #[error("Expected {expected} styled tables to commit, got {found}")]
    CommitMismatch { expected: usize, found: usize },
}

/// Source of selected tables and sink for styled ones.
pub trait TableHost {
    /// Grids for every selected table, in document order.
    ///
    /// Implementations must validate all tables before returning any, so a
    /// malformed table aborts the operation with nothing modified.
    fn selected_tables(&mut self) -> Result<Vec<Grid>, HostError>;

    /// Write styled grids back, in the order `selected_tables` returned them.
    fn commit(&mut self, grids: Vec<Grid>) -> Result<(), HostError>;
}
