//! Shared helpers for integration tests

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("integration")
        .join("fixtures")
}

/// Copy a fixture into a fresh temp dir and return both.
///
/// The `TempDir` must be kept alive for as long as the path is used.
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    fs::copy(fixtures_dir().join(name), &path).expect("Failed to copy fixture");
    (dir, path)
}

/// tabtheme binary with color off and an isolated config location.
pub fn tabtheme(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tabtheme").expect("binary should build");
    cmd.env("NO_COLOR", "1")
        .env("TABTHEME_CONFIG", config_dir.join("config.toml"))
        .env_remove("TABTHEME_LOG");
    cmd
}

/// Parse a document written by the binary.
pub fn read_document(path: &Path) -> tabtheme::JsonDocument {
    tabtheme::JsonDocument::open(path).expect("document should parse")
}
