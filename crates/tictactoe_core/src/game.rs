//! Game state: snapshot history, current move and list order.
//!
//! [`Game`] is an immutable value. Every transition borrows the current
//! state and returns the next one, so callers swap the whole value after
//! each event:
//!
//! ```
//! use tictactoe_core::{Game, Position};
//!
//! let game = Game::new();
//! let game = game.click(Position::Center);
//! assert_eq!(game.status().to_string(), "Next player: O");
//!
//! let rewound = game.jump_to(0).unwrap();
//! assert_eq!(rewound.history().len(), 2);
//! ```

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::moves::{MoveEntry, changed_position};
use crate::rules::{Verdict, evaluate};
use crate::{Board, BoardView, Position, Status};

/// Order in which the move list is displayed.
///
/// Only presentation changes; history indices are unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayOrder {
    /// Oldest move first.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl DisplayOrder {
    /// Returns the display label for this order.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "Ascending",
            Self::Descending => "Descending",
        }
    }

    /// Toggles between `Ascending` and `Descending`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Errors raised by history navigation.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum HistoryError {
    /// Requested move is not in the history.
    #[display("Move #{} is outside a history of {} snapshots", index, len)]
    MoveOutOfRange {
        /// Requested history index.
        index: usize,
        /// Number of snapshots in the history.
        len: usize,
    },
}

/// Tic-tac-toe game with time travel.
///
/// Invariants:
/// - `history[0]` is the empty board
/// - each snapshot differs from its predecessor in exactly one cell
/// - `current_move < history.len()`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    history: Vec<Board>,
    current_move: usize,
    order: DisplayOrder,
}

impl Game {
    /// Creates a new game at the empty board.
    pub fn new() -> Self {
        Self::with_order(DisplayOrder::default())
    }

    /// Creates a new game whose move list starts in `order`.
    #[instrument]
    pub fn with_order(order: DisplayOrder) -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
            order,
        }
    }

    /// All snapshots, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Current move-list order.
    pub fn order(&self) -> DisplayOrder {
        self.order
    }

    /// The displayed snapshot.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Click handling and highlights for the displayed snapshot.
    pub fn board_view(&self) -> BoardView<'_> {
        BoardView::new(self.current_board())
    }

    /// Winner evaluation of the displayed snapshot.
    pub fn verdict(&self) -> Verdict {
        evaluate(self.current_board())
    }

    /// Status line for the displayed snapshot.
    pub fn status(&self) -> Status {
        Status::of(self.current_board())
    }

    /// Plays `next` after the current move.
    ///
    /// Snapshots after the current move are discarded before `next` is
    /// appended. The caller is responsible for `next` being a legal
    /// successor; see [`Game::click`].
    #[instrument(skip(self, next), fields(current_move = self.current_move, len = self.history.len()))]
    pub fn play(&self, next: Board) -> Self {
        let kept = self.current_move + 1;
        if kept < self.history.len() {
            debug!(
                discarded = self.history.len() - kept,
                "Discarding future snapshots"
            );
        }

        let mut history = self.history[..kept].to_vec();
        history.push(next);
        let current_move = history.len() - 1;
        info!(current_move, "Move played");

        Self {
            history,
            current_move,
            order: self.order,
        }
    }

    /// Clicks the cell at `pos` on the displayed snapshot.
    ///
    /// Returns an unchanged game when the click is ignored.
    #[instrument(skip(self))]
    pub fn click(&self, pos: Position) -> Self {
        match self.board_view().click(pos) {
            Some(next) => self.play(next),
            None => self.clone(),
        }
    }

    /// Displays the snapshot at `index` without touching the history.
    #[instrument(skip(self))]
    pub fn jump_to(&self, index: usize) -> Result<Self, HistoryError> {
        if index >= self.history.len() {
            return Err(HistoryError::MoveOutOfRange {
                index,
                len: self.history.len(),
            });
        }
        debug!(from = self.current_move, "Jumping through history");
        Ok(Self {
            history: self.history.clone(),
            current_move: index,
            order: self.order,
        })
    }

    /// Flips the move-list order.
    #[instrument(skip(self))]
    pub fn toggle_order(&self) -> Self {
        let order = self.order.toggle();
        debug!(order = order.label(), "Toggled move order");
        Self {
            history: self.history.clone(),
            current_move: self.current_move,
            order,
        }
    }

    /// Label of the order toggle control.
    pub fn order_label(&self) -> String {
        format!("Toggle Order ({})", self.order.label())
    }

    /// Move-list entries in display order.
    pub fn moves(&self) -> Vec<MoveEntry> {
        let mut entries: Vec<MoveEntry> = self
            .history
            .iter()
            .enumerate()
            .map(|(index, board)| {
                let location = index
                    .checked_sub(1)
                    .and_then(|prev| changed_position(&self.history[prev], board));
                MoveEntry::new(index, location, index == self.current_move)
            })
            .collect();

        if self.order == DisplayOrder::Descending {
            entries.reverse();
        }
        entries
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.current_move(), 0);
        assert_eq!(game.current_board(), &Board::new());
        assert_eq!(game.order(), DisplayOrder::Ascending);
    }

    #[test]
    fn test_play_appends_and_advances() {
        let game = Game::new();
        let next = Board::new().with_mark(Position::Center, crate::Player::X);
        let game = game.play(next);
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.current_move(), 1);
        assert_eq!(game.current_board(), &next);
    }

    #[test]
    fn test_jump_out_of_range() {
        let game = Game::new().click(Position::Center);
        assert_eq!(
            game.jump_to(2),
            Err(HistoryError::MoveOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_toggle_order_keeps_state() {
        let game = Game::new().click(Position::Center);
        let toggled = game.toggle_order();
        assert_eq!(toggled.order(), DisplayOrder::Descending);
        assert_eq!(toggled.history(), game.history());
        assert_eq!(toggled.current_move(), game.current_move());
        assert_eq!(toggled.toggle_order(), game);
    }

    #[test]
    fn test_order_label() {
        let game = Game::new();
        assert_eq!(game.order_label(), "Toggle Order (Ascending)");
        assert_eq!(
            game.toggle_order().order_label(),
            "Toggle Order (Descending)"
        );
    }
}
