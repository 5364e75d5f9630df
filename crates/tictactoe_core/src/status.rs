//! Status line derived from a board snapshot.

use derive_more::Display;

use crate::rules::{evaluate, is_full};
use crate::{Board, Player};

/// What the status line reports for a snapshot.
///
/// Exactly one variant holds for any board.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The game has a winner.
    #[display("Winner: {}", _0)]
    Won(Player),
    /// The board is full without a winner.
    #[display("It's a draw!")]
    Draw,
    /// The game continues with this player to move.
    #[display("Next player: {}", _0)]
    Next(Player),
}

impl Status {
    /// Derives the status of `board`.
    pub fn of(board: &Board) -> Self {
        if let Some(winner) = evaluate(board).winner() {
            Status::Won(winner)
        } else if is_full(board) {
            Status::Draw
        } else {
            Status::Next(board.to_move())
        }
    }

    /// Whether further moves are impossible.
    pub fn is_over(self) -> bool {
        !matches!(self, Status::Next(_))
    }
}
