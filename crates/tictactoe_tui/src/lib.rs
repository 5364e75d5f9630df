//! Terminal front end for tic-tac-toe with time travel.
//!
//! The whole program is one synchronous loop: draw the frame from the
//! current [`App`] state, block on the next terminal event, apply it.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod layout;
mod terminal;
mod ui;

use std::fs::File;
use std::io::{self, Stdout};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use crossterm::event;
use ratatui::{Terminal, backend::CrosstermBackend};
use tictactoe_core::Game;
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

// Crate-level exports
pub use app::App;
pub use cli::Cli;
pub use config::{ConfigError, Settings};
pub use layout::{CELL_HEIGHT, CELL_WIDTH, ScreenLayout, Target};
pub use terminal::TerminalGuard;
pub use ui::draw;

/// Runs the terminal UI until the user quits.
///
/// The terminal is restored even when the event loop fails.
#[instrument(skip(settings))]
pub fn run_tui(settings: &Settings) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    let mut guard = TerminalGuard::enter(io::stdout()).context("Failed to set up terminal")?;
    let mut terminal =
        Terminal::new(CrosstermBackend::new(io::stdout())).context("Failed to create terminal")?;

    let app = App::new(Game::with_order(*settings.order()));
    let res = run_app(&mut terminal, app);

    guard.restore().context("Failed to restore terminal")?;

    if let Err(e) = &res {
        error!(error = ?e, "Event loop error");
    }
    res
}

/// Sends tracing output to the file at `path` so it does not interfere with the TUI.
///
/// Fails if the file cannot be created or a global subscriber is already set.
pub fn init_tracing(path: &Path) -> Result<()> {
    let log_file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install tracing subscriber: {e}"))?;

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| {
            app.resize(f.area());
            ui::draw(f, &app);
        })?;

        let event = event::read()?;
        app.handle_event(&event);

        if app.should_quit() {
            info!(moves = app.game().history().len() - 1, "Leaving game");
            return Ok(());
        }
    }
}
