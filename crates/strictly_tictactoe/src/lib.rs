//! Pure N×N tic-tac-toe game logic.
//!
//! - [`Board`] owns the grid: move validation, placement, rendering
//! - [`Player`] couples a [`Mark`] with a display name
//! - [`check_for_winner`] evaluates rows, columns, and diagonals
//! - [`Console`] drives the interactive move loop over any reader/writer
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Board, BoardSize, GameOutcome, Mark, Player, Position};
//!
//! let first = Player::new(Mark::O, "Player 1");
//! let second = Player::new(Mark::X, "Player 2");
//! let mut board = Board::new(BoardSize::default());
//!
//! for number in [1, 2, 3] {
//!     board.place(Position::new(number).unwrap(), Mark::O).unwrap();
//! }
//! assert_eq!(
//!     board.check_for_winner(&first, &second),
//!     GameOutcome::Win("Player 1".to_string())
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod console;
mod error;
mod mark;
mod outcome;
mod player;
mod position;
pub mod rules;

pub use board::{Board, BoardSize, Cell};
pub use console::Console;
pub use error::{BoardSizeError, MoveError};
pub use mark::{Mark, MarkError};
pub use outcome::GameOutcome;
pub use player::Player;
pub use position::{Coordinates, Position};
pub use rules::check_for_winner;
