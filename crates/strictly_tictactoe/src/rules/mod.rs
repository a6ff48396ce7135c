//! Game rules evaluated over a board.
//!
//! Rules are pure functions of the grid; they never mutate it.

pub mod win;

pub use win::check_for_winner;
