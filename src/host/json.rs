//! JSON table documents.
//!
//! A minimal host document: a list of tables, each a matrix of cells with an
//! optional `selected` flag. Shading and fonts use the same text forms the
//! engine hands to its style sink.
//!
//! ```json
//! { "tables": [ { "selected": true, "rows": [[ { "text": "Name" } ]] } ] }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{HostError, TableHost};
use crate::grid::{Cell, Grid};

/// One table in the document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TableRecord {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub selected: bool,
    pub rows: Vec<Vec<Cell>>,
}

/// A document holding tables, some of which may be selected.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JsonDocument {
    #[serde(default)]
    pub tables: Vec<TableRecord>,
}

impl JsonDocument {
    /// Read a document from disk.
    pub fn open(path: &Path) -> Result<Self, HostError> {
        let content = fs::read_to_string(path).map_err(|source| HostError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, HostError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_json(&self) -> Result<String, HostError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the document to disk as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<(), HostError> {
        let mut content = self.to_json()?;
        content.push('\n');
        fs::write(path, content).map_err(|source| HostError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Number of tables with the selected flag.
    pub fn selected_count(&self) -> usize {
        self.tables.iter().filter(|table| table.selected).count()
    }
}

impl TableHost for JsonDocument {
    fn selected_tables(&mut self) -> Result<Vec<Grid>, HostError> {
        let grids = self
            .tables
            .iter()
            .enumerate()
            .filter(|(_, table)| table.selected)
            .map(|(index, table)| {
                Grid::from_rows(table.rows.clone())
                    .map_err(|source| HostError::MalformedTable { table: index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            tables = self.tables.len(),
            selected = grids.len(),
            "collected selected tables"
        );
        Ok(grids)
    }

    fn commit(&mut self, grids: Vec<Grid>) -> Result<(), HostError> {
        let expected = self.selected_count();
        if grids.len() != expected {
            return Err(HostError::CommitMismatch {
                expected,
                found: grids.len(),
            });
        }

        let selected = self.tables.iter_mut().filter(|table| table.selected);
        for (table, grid) in selected.zip(grids) {
            table.rows = grid.into_rows();
        }
        Ok(())
    }
}
