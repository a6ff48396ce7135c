//! Engine error types.
//!
//! The `Display` output of each error is the exact text shown to the player.

use crate::mark::Mark;

/// Reasons a single move attempt is rejected.
///
/// Every variant is recoverable: the move loop reports it and asks again.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The input is not an integer.
    #[display(
        "'{raw}' is not a valid position. Please enter a number between 1 and {max_position}."
    )]
    NotANumber {
        /// Input as typed, without the line terminator.
        raw: String,
        /// Largest accepted position.
        max_position: usize,
    },

    /// The input is an integer outside `1..=max_position`.
    #[display(
        "'{raw}' is not a valid position. Please enter a number between 1 and {max_position}."
    )]
    OutOfRange {
        /// Input as typed, without the line terminator.
        raw: String,
        /// Largest accepted position.
        max_position: usize,
    },

    /// The target cell already holds a mark.
    #[display("Position {raw} is already taken by {mark}")]
    Occupied {
        /// Input as typed, without the line terminator.
        raw: String,
        /// Mark occupying the cell.
        mark: Mark,
    },
}

impl std::error::Error for MoveError {}

/// Rejected board dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardSizeError {
    /// Boards below 3×3 give a forced or degenerate game.
    #[display("The board is too small. 3 is the minimum size")]
    TooSmall(i64),

    /// The grid for this side length would not fit in memory, or its
    /// position count would overflow.
    #[display("The board is too large. {max} is the maximum size")]
    TooLarge {
        /// Side length that was asked for.
        requested: i64,
        /// Largest accepted side length.
        max: usize,
    },
}

impl std::error::Error for BoardSizeError {}
