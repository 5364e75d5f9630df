//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. Rules know nothing about
//! history, so every snapshot can be judged on its own.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Verdict, check_winner, evaluate};
