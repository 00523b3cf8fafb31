//! Apply handler: style the selected tables of a JSON document.

use std::path::Path;

use anyhow::Result;
use tracing::debug;

use tabtheme::output::current_style;
use tabtheme::{apply_to_host, JsonDocument};

use super::Context;

/// Apply `theme` to `document`, writing to `output` or back in place.
///
/// The document is only written after every selected table was styled.
#[cfg(not(tarpaulin_include))]
pub fn handle_apply(ctx: &Context, theme: &str, document: &Path, output: Option<&Path>) -> Result<()> {
    let registry = ctx.load_registry()?;
    let selector = registry.parse_selector(theme)?;

    let mut doc = JsonDocument::open(document)?;
    debug!(
        path = %document.display(),
        selected = doc.selected_count(),
        "opened document"
    );

    let report = apply_to_host(&mut doc, &registry, selector)?;

    let target = output.unwrap_or(document);
    doc.save(target)?;

    let style = current_style();
    println!("{}", style.success_text(&report.message()));
    if output.is_some() {
        println!(
            "{}",
            style.secondary_text(&format!("Written to {}", target.display()))
        );
    }
    Ok(())
}
