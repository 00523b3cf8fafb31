//! tabtheme command-line entry point.

mod commands;
mod logging;

use anyhow::Result;
use clap::Parser;

use tabtheme::cli::{Cli, Commands, ConfigCommands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let ctx = commands::Context::new(cli.config.as_deref());

    match cli.command {
        Commands::List => commands::theme::handle_list(&ctx),
        Commands::Show { theme } => commands::theme::handle_show(&ctx, &theme),
        Commands::Apply {
            theme,
            document,
            output,
        } => commands::apply::handle_apply(&ctx, &theme, &document, output.as_deref()),
        Commands::Preview {
            theme,
            rows,
            cols,
            plain,
        } => commands::theme::handle_preview(&ctx, &theme, rows, cols, plain),
        Commands::Config(command) => match command {
            ConfigCommands::Show => commands::config::handle_show(&ctx),
            ConfigCommands::Path => commands::config::handle_path(&ctx),
            ConfigCommands::Init => commands::config::handle_init(&ctx),
        },
        Commands::Completions { shell } => {
            commands::handle_completions(shell);
            Ok(())
        }
    }
}
