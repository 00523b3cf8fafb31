//! Integration tests for config handling and user theme files (CLI)

use std::fs;

use predicates::prelude::*;
use tabtheme::{Color, Rgb};
use tempfile::TempDir;

use crate::helpers::{fixtures_dir, read_document, tabtheme, temp_fixture};

fn with_user_themes(dir: &TempDir, include_builtin: bool) {
    fs::copy(fixtures_dir().join("themes.toml"), dir.path().join("themes.toml")).unwrap();
    fs::write(
        dir.path().join("config.toml"),
        format!("[themes]\ninclude_builtin = {include_builtin}\nuser_file = \"themes.toml\"\n"),
    )
    .unwrap();
}

#[test]
fn user_themes_follow_builtins() {
    let dir = TempDir::new().unwrap();
    with_user_themes(&dir, true);

    tabtheme(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("0  Ocean"))
        .stdout(predicate::str::contains("9  Audit"));
}

#[test]
fn user_themes_alone_when_builtins_disabled() {
    let dir = TempDir::new().unwrap();
    with_user_themes(&dir, false);

    tabtheme(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("0  Audit"))
        .stdout(predicate::str::contains("Ocean").not());
}

#[test]
fn apply_user_theme_by_name() {
    let (dir, path) = temp_fixture("report.json");
    with_user_themes(&dir, true);

    tabtheme(dir.path())
        .args(["apply", "audit"])
        .arg(&path)
        .assert()
        .success();

    let rows = &read_document(&path).tables[1].rows;
    assert_eq!(rows[0][0].shading, Color::Rgb(Rgb::from_u32(0xC00000)));
    assert_eq!(rows[2][1].shading, Color::Rgb(Rgb::from_u32(0xFFC7CE)));

    let header = rows[0][0].font.as_ref().expect("header font");
    assert_eq!(header.family, "Consolas");
    assert_eq!(header.size, "9.5");
    assert!(rows[1][0].font.is_none());
}

#[test]
fn broken_theme_file_is_reported() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("themes.toml"), "[[theme]\nname = ").unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[themes]\nuser_file = \"themes.toml\"\n",
    )
    .unwrap();

    tabtheme(dir.path())
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse theme file"));
}

#[test]
fn config_path_honors_environment() {
    let dir = TempDir::new().unwrap();

    tabtheme(dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_flag_overrides_environment() {
    let dir = TempDir::new().unwrap();
    let custom = dir.path().join("custom.toml");

    tabtheme(dir.path())
        .args(["config", "path", "--config"])
        .arg(&custom)
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.toml"));
}

#[test]
fn config_init_writes_defaults_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    tabtheme(dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config"));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("include_builtin = true"));
    assert!(content.contains("[preview]"));

    tabtheme(dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn config_show_prints_effective_values() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "[preview]\ncell_width = 12\n").unwrap();

    tabtheme(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cell_width = 12"))
        .stdout(predicate::str::contains("rows = 5"));
}

#[test]
fn config_init_honors_config_flag() {
    let dir = TempDir::new().unwrap();
    let custom = dir.path().join("nested").join("custom.toml");

    tabtheme(dir.path())
        .args(["config", "init", "--config"])
        .arg(&custom)
        .assert()
        .success();

    assert!(custom.exists());
    assert!(!dir.path().join("config.toml").exists());
}
