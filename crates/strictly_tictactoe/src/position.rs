//! Linear board positions and their grid coordinates.

use tracing::instrument;

/// A 1-based linear position on an N×N board, counted row by row.
///
/// Position 1 is the top-left cell and N² the bottom-right one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
#[display("{}", _0)]
pub struct Position(usize);

impl Position {
    /// Creates a position from a 1-based number. Returns `None` for zero.
    pub fn new(number: usize) -> Option<Self> {
        (number >= 1).then_some(Self(number))
    }

    /// Creates a position from a zero-based linear index.
    pub fn from_index(index: usize) -> Self {
        Self(index + 1)
    }

    /// Returns the 1-based number.
    pub fn number(self) -> usize {
        self.0
    }

    /// Returns the zero-based linear index.
    pub fn index(self) -> usize {
        self.0 - 1
    }

    /// Maps this position onto the grid of a board with `size` columns.
    #[instrument]
    pub fn coordinates(self, size: usize) -> Coordinates {
        let index = self.index();
        Coordinates {
            row: index / size,
            column: index % size,
        }
    }
}

/// Zero-based `(row, column)` grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinates {
    /// Row from the top.
    pub row: usize,
    /// Column from the left.
    pub column: usize,
}

impl Coordinates {
    /// Creates coordinates.
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Maps these coordinates back to a linear position on a board with `size` columns.
    pub fn position(self, size: usize) -> Position {
        Position::from_index(self.row * size + self.column)
    }
}
