//! Core domain types for tic-tac-toe.

use std::str::FromStr;

use derive_more::{Display, Error};
use tracing::instrument;

use crate::position::Position;

/// Player in the game, doubling as the mark they place.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// Immutable 3x3 board snapshot.
///
/// Snapshots are never edited in place: [`Board::with_mark`] returns a new
/// board, leaving the original untouched for the move history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// The player whose turn it is on this board.
    ///
    /// X moves when an even number of squares is filled, O otherwise.
    pub fn to_move(&self) -> Player {
        if self.occupied() % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Returns a copy of this board with `player` placed at `pos`.
    #[instrument(skip(self))]
    pub fn with_mark(&self, pos: Position, player: Player) -> Self {
        let mut squares = self.squares;
        squares[pos.to_index()] = Square::Occupied(player);
        Self { squares }
    }
}

/// Error parsing a board from its compact text form.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// The text did not hold exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(#[error(not(source))] usize),
    /// A cell was not `X`, `O`, `.` or `-`.
    #[display("Invalid cell character {:?}", _0)]
    InvalidCell(#[error(not(source))] char),
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells in row-major order, ignoring whitespace.
    ///
    /// `X`/`O` are marks, `.` or `-` is an empty square: `"XO. .X. ..O"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                'X' | 'x' => Ok(Square::Occupied(Player::X)),
                'O' | 'o' => Ok(Square::Occupied(Player::O)),
                '.' | '-' => Ok(Square::Empty),
                other => Err(BoardParseError::InvalidCell(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let len = cells.len();
        let squares: [Square; 9] = cells
            .try_into()
            .map_err(|_| BoardParseError::WrongLength(len))?;
        Ok(Self { squares })
    }
}
