//! Terminal mode lifecycle.

use std::io::{self, Write};

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use tracing::{debug, warn};

/// Holds the terminal in raw mode on the alternate screen with mouse capture.
///
/// Dropping the guard restores the terminal, so every early return after
/// [`TerminalGuard::enter`] leaves the shell usable.
pub struct TerminalGuard<W: Write> {
    writer: W,
    active: bool,
}

impl<W: Write> TerminalGuard<W> {
    /// Enables raw mode, then switches `writer` to the alternate screen.
    pub fn enter(writer: W) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self {
            writer,
            active: true,
        };
        execute!(guard.writer, EnterAlternateScreen, EnableMouseCapture)?;
        debug!("Terminal switched to alternate screen");
        Ok(guard)
    }

    /// Restores the terminal. Later calls do nothing.
    ///
    /// Both steps are attempted; the first failure is returned.
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        let raw = disable_raw_mode();
        let screen = execute!(self.writer, LeaveAlternateScreen, DisableMouseCapture, Show);
        debug!("Terminal restored");
        raw.and(screen)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEAVE_ALTERNATE_SCREEN: &str = "\x1b[?1049l";

    fn armed<W: Write>(writer: W) -> TerminalGuard<W> {
        TerminalGuard {
            writer,
            active: true,
        }
    }

    #[test]
    fn test_restore_runs_once() {
        let mut guard = armed(Vec::new());
        guard.restore().unwrap();
        guard.restore().unwrap();

        let out = String::from_utf8(guard.writer.clone()).unwrap();
        assert_eq!(out.matches(LEAVE_ALTERNATE_SCREEN).count(), 1);
    }

    #[test]
    fn test_drop_restores_terminal() {
        let mut out = Vec::new();
        drop(armed(&mut out));

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains(LEAVE_ALTERNATE_SCREEN));
    }

    #[test]
    fn test_drop_after_restore_writes_nothing_more() {
        let mut out = Vec::new();
        {
            let mut guard = armed(&mut out);
            guard.restore().unwrap();
        }

        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches(LEAVE_ALTERNATE_SCREEN).count(), 1);
    }
}
