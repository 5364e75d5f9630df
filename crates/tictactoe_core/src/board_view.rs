//! Click dispatch and highlight queries over a single board snapshot.

use tracing::{debug, instrument};

use crate::rules::{Verdict, evaluate};
use crate::{Board, Position, Square};

/// Stateless view over the snapshot being displayed.
///
/// Turns a click on a cell into the next snapshot and answers which cells
/// belong to the winning line. Holds nothing but a borrow of the board and
/// its verdict.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    board: &'a Board,
    verdict: Verdict,
}

impl<'a> BoardView<'a> {
    /// Creates a view over `board`.
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            verdict: evaluate(board),
        }
    }

    /// The square at `pos`.
    pub fn square(&self, pos: Position) -> Square {
        self.board.get(pos)
    }

    /// The winner evaluation for this snapshot.
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// Whether `pos` is part of the winning line.
    pub fn is_winning(&self, pos: Position) -> bool {
        self.verdict.contains(pos)
    }

    /// Handles a click on `pos`.
    ///
    /// Returns the snapshot to play, or `None` when the game is already won
    /// or the cell is taken.
    #[instrument(skip(self))]
    pub fn click(&self, pos: Position) -> Option<Board> {
        if self.verdict.winner().is_some() {
            debug!("Board already has a winner, ignoring click");
            return None;
        }
        if !self.board.is_empty(pos) {
            debug!("Square occupied, ignoring click");
            return None;
        }
        Some(self.board.with_mark(pos, self.board.to_move()))
    }
}
