//! Integration tests for the apply command

use std::fs;

use predicates::prelude::*;
use tabtheme::{Color, Rgb};

use crate::helpers::{read_document, tabtheme, temp_fixture};

#[test]
fn apply_by_index_styles_only_selected_table() {
    let (dir, path) = temp_fixture("report.json");

    tabtheme(dir.path())
        .args(["apply", "1"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Applied theme 'Ledger' to 1 table (6 cells)"));

    let doc = read_document(&path);
    assert!(doc.tables[0].rows[0][0].is_unstyled());

    let rows = &doc.tables[1].rows;
    assert_eq!(rows[0][0].shading, Color::Rgb(Rgb::from_u32(0x404040)));
    assert_eq!(rows[1][1].shading, Color::Rgb(Rgb::from_u32(0xF2F2F2)));
    assert_eq!(rows[2][0].shading, Color::Rgb(Rgb::from_u32(0xD9D9D9)));

    let header = rows[0][1].font.as_ref().expect("header font");
    assert!(header.bold);
    assert_eq!(header.color, Color::Rgb(Rgb::WHITE));

    let total = rows[2][1].font.as_ref().expect("total font");
    assert!(total.underline);
    assert_eq!(total.size, "11");

    let body = rows[1][0].font.as_ref().expect("default font");
    assert!(!body.bold);
    assert_eq!(body.family, "Calibri");
}

#[test]
fn apply_by_name_is_case_insensitive() {
    let (dir, path) = temp_fixture("report.json");

    tabtheme(dir.path())
        .args(["apply", "spotlight"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("'Spotlight'"));

    let rows = &read_document(&path).tables[1].rows;
    let corner = Color::Rgb(Rgb::from_u32(0xFFC000));
    assert_eq!(rows[0][0].shading, corner);
    assert_eq!(rows[0][1].shading, corner);
    assert_eq!(rows[2][0].shading, corner);
    assert_eq!(rows[2][1].shading, corner);
    assert_eq!(rows[1][0].shading, Color::Automatic);
}

#[test]
fn reapplying_a_corner_theme_drops_old_stripes() {
    let (dir, path) = temp_fixture("report.json");

    tabtheme(dir.path()).args(["apply", "ledger"]).arg(&path).assert().success();
    tabtheme(dir.path()).args(["apply", "spotlight"]).arg(&path).assert().success();

    let rows = &read_document(&path).tables[1].rows;
    assert_eq!(rows[1][0].shading, Color::Automatic);
    assert_eq!(rows[1][1].shading, Color::Automatic);
    assert_eq!(rows[0][0].shading, Color::Rgb(Rgb::from_u32(0xFFC000)));
}

#[test]
fn apply_with_output_leaves_source_untouched() {
    let (dir, path) = temp_fixture("report.json");
    let out = dir.path().join("out.json");
    let before = fs::read_to_string(&path).unwrap();

    tabtheme(dir.path())
        .args(["apply", "0"])
        .arg(&path)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Written to"));

    assert_eq!(fs::read_to_string(&path).unwrap(), before);
    let styled = read_document(&out);
    assert_eq!(
        styled.tables[1].rows[0][0].shading,
        Color::Rgb(Rgb::from_u32(0x1F4E79))
    );
}

#[test]
fn clear_removes_shading_and_fonts() {
    let (dir, path) = temp_fixture("styled.json");

    tabtheme(dir.path())
        .args(["apply", "clear"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared formatting in 1 table"));

    let doc = read_document(&path);
    let rows = &doc.tables[0].rows;
    assert!(rows.iter().flatten().all(|cell| cell.is_unstyled()));
    assert_eq!(rows[0][1].text, "Amount");
}

#[test]
fn clear_sentinel_index_behaves_like_clear() {
    let (dir, path) = temp_fixture("styled.json");

    tabtheme(dir.path())
        .args(["apply", "2147483647"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared formatting"));

    let doc = read_document(&path);
    assert!(doc.tables[0].rows.iter().flatten().all(|cell| cell.is_unstyled()));
}

#[test]
fn no_selected_table_fails_without_writing() {
    let (dir, path) = temp_fixture("unselected.json");
    let before = fs::read_to_string(&path).unwrap();

    tabtheme(dir.path())
        .args(["apply", "0"])
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No table selected"));

    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn out_of_range_index_fails_without_writing() {
    let (dir, path) = temp_fixture("report.json");
    let before = fs::read_to_string(&path).unwrap();

    tabtheme(dir.path())
        .args(["apply", "99"])
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid theme index 99"));

    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn negative_index_is_invalid() {
    let (dir, path) = temp_fixture("report.json");

    tabtheme(dir.path())
        .args(["apply", "--", "-1"])
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid theme index -1"));
}

#[test]
fn unknown_theme_name_fails() {
    let (dir, path) = temp_fixture("report.json");

    tabtheme(dir.path())
        .args(["apply", "nonexistent"])
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nonexistent"));
}

#[test]
fn ragged_table_is_rejected_before_styling() {
    let (dir, path) = temp_fixture("ragged.json");
    let before = fs::read_to_string(&path).unwrap();

    tabtheme(dir.path())
        .args(["apply", "0"])
        .arg(&path)
        .assert()
        .code(1);

    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn missing_document_reports_path() {
    let dir = tempfile::TempDir::new().unwrap();

    tabtheme(dir.path())
        .args(["apply", "0", "does-not-exist.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does-not-exist.json"));
}
