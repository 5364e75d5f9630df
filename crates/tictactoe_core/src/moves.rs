//! Move-list entries shown beside the board.

use tracing::instrument;

use crate::{Board, Position};

/// One line of the move list.
///
/// `index` always refers to the history position, whatever order the list is
/// displayed in, so it can be passed straight to [`Game::jump_to`](crate::Game::jump_to).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEntry {
    index: usize,
    location: Option<Position>,
    is_current: bool,
}

impl MoveEntry {
    /// Creates an entry.
    pub fn new(index: usize, location: Option<Position>, is_current: bool) -> Self {
        Self {
            index,
            location,
            is_current,
        }
    }

    /// History index this entry jumps to.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Cell filled by this move; `None` for the game start.
    pub fn location(&self) -> Option<Position> {
        self.location
    }

    /// Whether this entry is the move currently displayed.
    ///
    /// The current entry is plain text, every other entry is a jump control.
    pub fn is_current(&self) -> bool {
        self.is_current
    }
}

impl std::fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Some(pos) = self.location.filter(|_| self.index > 0) else {
            return write!(f, "Go to game start");
        };
        let prefix = if self.is_current {
            "You are at move"
        } else {
            "Go to move"
        };
        write!(
            f,
            "{} #{} (row {}, col {})",
            prefix,
            self.index,
            pos.row(),
            pos.col()
        )
    }
}

/// Finds the cell that differs between two consecutive snapshots.
#[instrument(skip(prev, next))]
pub fn changed_position(prev: &Board, next: &Board) -> Option<Position> {
    Position::ALL
        .into_iter()
        .find(|pos| prev.get(*pos) != next.get(*pos))
}
