//! Config subcommands handler

use anyhow::Result;

use tabtheme::output::current_style;
use tabtheme::Config;

use super::Context;

/// Show current configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(ctx: &Context) -> Result<()> {
    let config = ctx.load_config()?;
    let style = current_style();
    println!("{}", style.primary_text(&config.to_toml()?));
    Ok(())
}

/// Print where the config file is read from.
#[cfg(not(tarpaulin_include))]
pub fn handle_path(ctx: &Context) -> Result<()> {
    let path = ctx.config_path()?;
    println!("{}", path.display());
    Ok(())
}

/// Write the default config unless a file already exists.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(ctx: &Context) -> Result<()> {
    let path = ctx.config_path()?;
    let style = current_style();

    if path.exists() {
        println!(
            "{}",
            style.secondary_text(&format!("Config already exists at {}", path.display()))
        );
        return Ok(());
    }

    ctx.save_config(&Config::default())?;
    println!(
        "{}",
        style.success_text(&format!("Created config at {}", path.display()))
    );
    Ok(())
}
