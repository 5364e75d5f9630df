//! Tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_tui::{Cli, Settings};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?
        .with_overrides(cli.log_file, cli.descending);

    tictactoe_tui::init_tracing(settings.log_file())?;
    info!(?settings, "Settings resolved");

    tictactoe_tui::run_tui(&settings)
}
