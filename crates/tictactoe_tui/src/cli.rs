//! Command-line interface for the tic-tac-toe terminal UI.

use std::path::PathBuf;

use clap::Parser;

/// Tic-tac-toe in the terminal, with a clickable move history
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe with the mouse and travel through move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Start with the move list newest-first
    #[arg(long)]
    pub descending: bool,
}
