//! Property tests for shading and font resolution

use proptest::prelude::*;

use tabtheme::theme::Palette;
use tabtheme::{
    apply_theme, fill, style_table, Color, FontMode, FontSpec, Grid, Rgb, StripePair,
    ThemeDefinition, ThemeRegistry, ThemeSelector,
};

fn rgb() -> impl Strategy<Value = Rgb> {
    any::<u32>().prop_map(|v| Rgb::from_u32(v & 0xFF_FFFF))
}

fn family_at(grid: &Grid, row: usize, col: usize) -> Option<String> {
    grid[(row, col)].font.as_ref().map(|font| font.family.clone())
}

/// Family each cell should carry when all five fonts are set.
fn expected_family(row: usize, col: usize, rows: usize, cols: usize) -> Option<&'static str> {
    let inner_row = row >= 1 && row + 1 < rows;
    let inner_col = col >= 1 && col + 1 < cols;
    if row == 0 && inner_col {
        Some("Header")
    } else if row + 1 == rows && inner_col {
        Some("Total")
    } else if col == 0 && inner_row {
        Some("First")
    } else if col + 1 == cols && inner_row {
        Some("Last")
    } else if inner_row && inner_col {
        Some("Default")
    } else {
        None
    }
}

proptest! {
    #[test]
    fn clear_after_any_theme_leaves_no_style(
        rows in 1usize..=8,
        cols in 1usize..=8,
        index in 0i32..9,
    ) {
        let registry = ThemeRegistry::builtin();
        let mut grids = vec![Grid::new(rows, cols).unwrap()];

        apply_theme(&registry, ThemeSelector::Index(index), &mut grids).unwrap();
        apply_theme(&registry, ThemeSelector::Clear, &mut grids).unwrap();

        prop_assert!(grids[0].cells().all(|cell| cell.is_unstyled()));
    }

    #[test]
    fn styling_twice_matches_styling_once(
        rows in 1usize..=8,
        cols in 1usize..=8,
        index in 0i32..9,
    ) {
        let registry = ThemeRegistry::builtin();
        let theme = registry.get_theme(index).unwrap();

        let mut once = Grid::new(rows, cols).unwrap();
        style_table(&mut once, theme, FontMode::Apply);
        let mut twice = once.clone();
        style_table(&mut twice, theme, FontMode::Apply);

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn header_first_corner_always_wins(
        rows in 1usize..=8,
        cols in 1usize..=8,
        header in rgb(),
        first in rgb(),
        corner in rgb(),
    ) {
        let theme = ThemeDefinition {
            header_row: header.into(),
            first_column: first.into(),
            header_first_cell: Some(corner),
            ..ThemeDefinition::default()
        };
        let mut grid = Grid::new(rows, cols).unwrap();
        fill(&mut grid, &theme);

        prop_assert_eq!(grid.shading(0, 0), Color::Rgb(corner));
    }

    #[test]
    fn row_stripes_alternate_by_parity(
        rows in 1usize..=8,
        cols in 1usize..=8,
        even in rgb(),
        odd in rgb(),
    ) {
        let theme = ThemeDefinition {
            row_stripes: StripePair::new(even, odd),
            ..ThemeDefinition::default()
        };
        let mut grid = Grid::new(rows, cols).unwrap();
        fill(&mut grid, &theme);

        for (row, col) in grid.positions() {
            let expected = if row % 2 == 0 { even } else { odd };
            prop_assert_eq!(grid.shading(row, col), Color::Rgb(expected));
        }
    }

    #[test]
    fn rainbow_rows_cycle_light_palette(
        rows in 1usize..=12,
        cols in 2usize..=6,
    ) {
        let registry = ThemeRegistry::builtin();
        let (_, theme) = registry.find("Rainbow Rows").unwrap();
        let mut grid = Grid::new(rows, cols).unwrap();
        fill(&mut grid, theme);

        for row in 0..rows {
            prop_assert_eq!(grid.shading(row, 0), Color::Rgb(Palette::Medium.at(row)));
            for col in 1..cols {
                prop_assert_eq!(grid.shading(row, col), Color::Rgb(Palette::Light.at(row)));
            }
        }
    }

    #[test]
    fn band_fonts_never_overlap(
        rows in 2usize..=8,
        cols in 2usize..=8,
    ) {
        let theme = ThemeDefinition {
            header_font: Some(FontSpec::new("Header", 11.0)),
            total_font: Some(FontSpec::new("Total", 11.0)),
            first_column_font: Some(FontSpec::new("First", 11.0)),
            last_column_font: Some(FontSpec::new("Last", 11.0)),
            default_font: Some(FontSpec::new("Default", 11.0)),
            ..ThemeDefinition::default()
        };
        let mut grid = Grid::new(rows, cols).unwrap();
        style_table(&mut grid, &theme, FontMode::Apply);

        for (row, col) in grid.positions() {
            let family = family_at(&grid, row, col);
            prop_assert_eq!(
                family.as_deref(),
                expected_family(row, col, rows, cols),
                "cell ({}, {})", row, col
            );
        }
    }

    #[test]
    fn corner_only_theme_resets_previous_body_shading(
        rows in 3usize..=8,
        cols in 3usize..=8,
        index in 0i32..9,
    ) {
        let registry = ThemeRegistry::builtin();
        let (_, spotlight) = registry.find("Spotlight").unwrap();
        let mut grid = Grid::new(rows, cols).unwrap();

        fill(&mut grid, registry.get_theme(index).unwrap());
        fill(&mut grid, spotlight);

        for row in 1..rows - 1 {
            for col in 1..cols - 1 {
                prop_assert_eq!(grid.shading(row, col), Color::Automatic);
            }
        }
    }
}
