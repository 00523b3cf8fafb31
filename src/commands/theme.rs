//! Theme catalog handlers: list, show and preview.

use anyhow::{Context as _, Result};

use tabtheme::output::current_style;
use tabtheme::render::{render_ansi, render_plain, sample_grid};
use tabtheme::{style_table, FontMode, ThemeRegistry};

use super::Context;

/// Print every theme with its catalog index.
#[cfg(not(tarpaulin_include))]
pub fn handle_list(ctx: &Context) -> Result<()> {
    let registry = ctx.load_registry()?;
    let style = current_style();

    if registry.count() == 0 {
        println!("{}", style.secondary_text("No themes configured."));
        return Ok(());
    }

    println!("{}", style.heading_text("Themes:"));
    let width = (registry.count() - 1).to_string().len();
    for (index, theme) in registry.iter() {
        println!(
            "  {}  {}",
            style.accent_text(&format!("{:>width$}", index, width = width)),
            style.primary_text(&theme.name)
        );
    }
    println!(
        "{}",
        style.secondary_text("Use an index or name with `apply`, or `clear` to remove formatting.")
    );
    Ok(())
}

/// Print one theme definition as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(ctx: &Context, theme: &str) -> Result<()> {
    let registry = ctx.load_registry()?;
    let selector = registry.parse_selector(theme)?;
    let definition = registry.resolve(selector)?;
    let content = ThemeRegistry::to_theme_file(std::slice::from_ref(definition.as_ref()))
        .context("Failed to serialize theme")?;
    print!("{}", current_style().primary_text(&content));
    Ok(())
}

/// Render a themed sample table to the terminal.
#[cfg(not(tarpaulin_include))]
pub fn handle_preview(
    ctx: &Context,
    theme: &str,
    rows: Option<u16>,
    cols: Option<u16>,
    plain: bool,
) -> Result<()> {
    let config = ctx.load_config()?;
    let registry = ctx.load_registry()?;
    let selector = registry.parse_selector(theme)?;
    let definition = registry.resolve(selector)?;

    let rows = rows.map(usize::from).unwrap_or(config.preview.rows);
    let cols = cols.map(usize::from).unwrap_or(config.preview.cols);
    let mut grid = sample_grid(rows, cols)?;

    let mode = if selector.is_clear() {
        FontMode::Clear
    } else {
        FontMode::Apply
    };
    style_table(&mut grid, &definition, mode);

    let style = current_style();
    println!("{}", style.heading_text(&definition.name));
    if plain || !style.color {
        print!("{}", render_plain(&grid));
    } else {
        print!("{}", render_ansi(&grid, config.preview.cell_width));
    }
    Ok(())
}
