//! Application state and event handling.

use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::Rect;
use tictactoe_core::Game;
use tracing::{debug, info, instrument, warn};

use crate::layout::{ScreenLayout, Target};

/// Main application state.
///
/// Owns the single [`Game`] value and replaces it wholesale after every
/// transition; the next frame is drawn from scratch.
#[derive(Debug)]
pub struct App {
    game: Game,
    area: Rect,
    should_quit: bool,
}

impl App {
    /// Creates a new application around `game`.
    pub fn new(game: Game) -> Self {
        Self {
            game,
            area: Rect::default(),
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records the terminal area of the last drawn frame.
    pub fn resize(&mut self, area: Rect) {
        self.area = area;
    }

    /// Layout of the current frame.
    pub fn layout(&self) -> ScreenLayout {
        ScreenLayout::new(self.area, self.game.history().len())
    }

    /// Handles a terminal event.
    #[instrument(skip(self))]
    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    info!("User quit");
                    self.should_quit = true;
                }
            }
            Event::Mouse(mouse) => {
                if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                    self.click(mouse.column, mouse.row);
                }
            }
            Event::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
                self.area = Rect::new(0, 0, *width, *height);
            }
            _ => {}
        }
    }

    /// Applies a left click at the given terminal cell.
    #[instrument(skip(self))]
    pub fn click(&mut self, column: u16, row: u16) {
        let Some(target) = self.layout().hit(column, row) else {
            return;
        };
        debug!(?target, "Click target");

        match target {
            Target::Cell(pos) => {
                self.game = self.game.click(pos);
            }
            Target::Toggle => {
                self.game = self.game.toggle_order();
            }
            Target::Entry(slot) => {
                let Some(entry) = self.game.moves().get(slot).copied() else {
                    return;
                };
                if entry.is_current() {
                    debug!(index = entry.index(), "Current move is not a jump control");
                    return;
                }
                match self.game.jump_to(entry.index()) {
                    Ok(game) => self.game = game,
                    Err(e) => warn!(error = %e, "Jump rejected"),
                }
            }
        }
    }
}
