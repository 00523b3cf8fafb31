//! Integration tests for the catalog commands (CLI)

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::tabtheme;

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();

    tabtheme(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("apply"))
        .stdout(predicate::str::contains("preview"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn apply_without_arguments_is_usage_error() {
    let dir = TempDir::new().unwrap();

    tabtheme(dir.path())
        .arg("apply")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("<THEME>"));
}

// ============================================================================
// Catalog Tests
// ============================================================================

#[test]
fn list_shows_builtin_catalog_in_order() {
    let dir = TempDir::new().unwrap();

    let output = tabtheme(dir.path()).arg("list").assert().success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();

    assert!(stdout.contains("0  Ocean"));
    assert!(stdout.contains("1  Ledger"));
    assert!(stdout.contains("8  Minimal"));
    let ocean = stdout.find("Ocean").unwrap();
    let minimal = stdout.find("Minimal").unwrap();
    assert!(ocean < minimal);
}

#[test]
fn show_prints_theme_as_toml() {
    let dir = TempDir::new().unwrap();

    tabtheme(dir.path())
        .args(["show", "ledger"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[[theme]]"))
        .stdout(predicate::str::contains("name = \"Ledger\""))
        .stdout(predicate::str::contains("header_row = \"#404040\""))
        .stdout(predicate::str::contains("total_row = \"#D9D9D9\""));
}

#[test]
fn show_unknown_theme_fails() {
    let dir = TempDir::new().unwrap();

    tabtheme(dir.path())
        .args(["show", "Paisley"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown theme 'Paisley'"));
}

// ============================================================================
// Preview Tests
// ============================================================================

#[test]
fn plain_preview_of_corner_theme() {
    let dir = TempDir::new().unwrap();

    let output = tabtheme(dir.path())
        .args(["preview", "spotlight", "--rows", "4", "--cols", "3", "--plain"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();

    insta::assert_snapshot!(stdout.trim_end(), @r"
    Spotlight
    #FFC000   automatic #FFC000
    automatic automatic automatic
    automatic automatic automatic
    #FFC000   automatic #FFC000
    ");
}

#[test]
fn plain_preview_of_clear_is_all_automatic() {
    let dir = TempDir::new().unwrap();

    tabtheme(dir.path())
        .args(["preview", "clear", "--rows", "2", "--cols", "2", "--plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Clear"))
        .stdout(predicate::str::contains("automatic automatic"))
        .stdout(predicate::str::contains("#").not());
}

#[test]
fn preview_uses_configured_shape() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[preview]\nrows = 2\ncols = 2\n",
    )
    .unwrap();

    let output = tabtheme(dir.path())
        .args(["preview", "0", "--plain"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();

    // heading plus two rows
    assert_eq!(stdout.lines().count(), 3);
    assert!(stdout.contains("#1F4E79   #1F4E79"));
}

#[test]
fn preview_rejects_zero_columns() {
    let dir = TempDir::new().unwrap();

    tabtheme(dir.path())
        .args(["preview", "0", "--cols", "0"])
        .assert()
        .code(2);
}

// ============================================================================
// Completions
// ============================================================================

#[test]
fn bash_completions_mention_binary() {
    let dir = TempDir::new().unwrap();

    tabtheme(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tabtheme"));
}
