//! Tic-tac-toe rules and time-travel history.
//!
//! # Architecture
//!
//! - **Types**: marks, squares and immutable [`Board`] snapshots
//! - **Rules**: pure win and draw evaluation over one snapshot
//! - **BoardView**: click dispatch and winning-cell queries
//! - **Game**: snapshot history with branch-and-replace semantics
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Game, Position, Status, TicTacToePlayer as Player};
//!
//! let game = [
//!     Position::TopLeft,
//!     Position::Center,
//!     Position::TopCenter,
//!     Position::BottomCenter,
//!     Position::TopRight,
//! ]
//! .into_iter()
//! .fold(Game::new(), |game, pos| game.click(pos));
//!
//! assert_eq!(game.status(), Status::Won(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board_view;
mod game;
mod moves;
mod position;
pub mod rules;
mod status;
mod types;

// Crate-level exports - Game types
pub use board_view::BoardView;
pub use game::{DisplayOrder, Game, HistoryError};
pub use moves::{MoveEntry, changed_position};
pub use position::Position;
pub use rules::Verdict;
pub use status::Status;
pub use types::{Board, BoardParseError, Player, Square};

/// Alias matching how the UI refers to players.
pub type TicTacToePlayer = Player;
