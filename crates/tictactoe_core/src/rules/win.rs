//! Win detection logic for tic-tac-toe.

use tracing::instrument;

use crate::{Board, Player, Position, Square};

/// The 8 winning triples, checked in this order.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Outcome of evaluating a board for a winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Verdict {
    winner: Option<Player>,
    line: Option<[Position; 3]>,
}

impl Verdict {
    /// The winning player, if any.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// The winning triple, if any.
    pub fn line(&self) -> Option<[Position; 3]> {
        self.line
    }

    /// Positions of the winning triple; empty without a winner.
    pub fn positions(&self) -> &[Position] {
        match &self.line {
            Some(line) => line,
            None => &[],
        }
    }

    /// Whether `pos` belongs to the winning triple.
    pub fn contains(&self, pos: Position) -> bool {
        self.positions().contains(&pos)
    }
}

/// Evaluates the board, returning the first complete line in [`LINES`] order.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Verdict {
    for line in LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        let Square::Occupied(player) = sq else {
            continue;
        };
        if sq == board.get(b) && sq == board.get(c) {
            return Verdict {
                winner: Some(player),
                line: Some(line),
            };
        }
    }

    Verdict::default()
}

/// Checks if there is a winner on the board.
pub fn check_winner(board: &Board) -> Option<Player> {
    evaluate(board).winner()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let verdict = evaluate(&Board::new());
        assert_eq!(verdict.winner(), None);
        assert!(verdict.positions().is_empty());
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX OO. ...".parse().unwrap();
        let verdict = evaluate(&board);
        assert_eq!(verdict.winner(), Some(Player::X));
        assert_eq!(
            verdict.line(),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
    }

    #[test]
    fn test_winner_diagonal() {
        let board: Board = "O.X .OX ..O".parse().unwrap();
        let verdict = evaluate(&board);
        assert_eq!(verdict.winner(), Some(Player::O));
        assert!(verdict.contains(Position::Center));
        assert!(!verdict.contains(Position::TopRight));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "OOX .X. X..".parse().unwrap();
        assert_eq!(
            evaluate(&board).line(),
            Some([Position::TopRight, Position::Center, Position::BottomLeft])
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX. ... ...".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board: Board = "XOX ... ...".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Row 0 and column 0 both complete; rows are checked first.
        let board: Board = "XXX X.. X..".parse().unwrap();
        assert_eq!(
            evaluate(&board).line(),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            let board = line
                .iter()
                .fold(Board::new(), |b, pos| b.with_mark(*pos, Player::O));
            let verdict = evaluate(&board);
            assert_eq!(verdict.winner(), Some(Player::O));
            assert_eq!(verdict.line(), Some(line));
        }
    }
}
