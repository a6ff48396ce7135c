//! Board state, move application, and text rendering.

use std::fmt;

use tracing::{debug, instrument};

use crate::error::{BoardSizeError, MoveError};
use crate::mark::Mark;
use crate::player::Player;
use crate::position::{Coordinates, Position};

/// Contents of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Unoccupied.
    #[default]
    Blank,
    /// Occupied by a mark.
    Marked(Mark),
}

impl Cell {
    /// Returns true if no mark occupies the cell.
    pub fn is_blank(self) -> bool {
        matches!(self, Cell::Blank)
    }

    /// Returns the occupying mark, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Blank => None,
            Cell::Marked(mark) => Some(mark),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Blank => f.write_str(" "),
            Cell::Marked(mark) => write!(f, "{}", mark),
        }
    }
}

/// Side length of a square board, between [`BoardSize::MIN`] and
/// [`BoardSize::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{}", _0)]
pub struct BoardSize(usize);

impl BoardSize {
    /// Smallest playable side length.
    pub const MIN: usize = 3;

    /// Largest side length. Keeps the grid allocation and `size²` small.
    pub const MAX: usize = 1000;

    /// Returns the side length.
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<i64> for BoardSize {
    type Error = BoardSizeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match usize::try_from(value) {
            Ok(size) if size < Self::MIN => Err(BoardSizeError::TooSmall(value)),
            Ok(size) if size > Self::MAX => Err(BoardSizeError::TooLarge {
                requested: value,
                max: Self::MAX,
            }),
            Ok(size) => Ok(Self(size)),
            Err(_) => Err(BoardSizeError::TooSmall(value)),
        }
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = BoardSizeError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        let requested = i64::try_from(value).unwrap_or(i64::MAX);
        Self::try_from(requested)
    }
}

/// Square tic-tac-toe grid.
///
/// Dimensions are fixed at construction; only [`Board::place`] and the
/// move operations built on it change cell contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Vec<Cell>>,
}

impl Board {
    /// Creates an empty board.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        let size = size.get();
        debug!(size, "Allocating board");
        Self {
            size,
            cells: vec![vec![Cell::Blank; size]; size],
        }
    }

    /// Returns the side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the largest valid 1-based position (size²).
    pub fn max_position(&self) -> usize {
        self.size * self.size
    }

    /// Returns the cell at the given coordinates, or `None` off the board.
    pub fn cell(&self, row: usize, column: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Iterates over the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Counts cells without a mark.
    pub fn blank_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_blank()).count()
    }

    /// Returns true if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.blank_count() == 0
    }

    /// Lists the positions still available, in ascending order.
    pub fn open_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .flatten()
            .enumerate()
            .filter(|(_, cell)| cell.is_blank())
            .map(|(index, _)| Position::from_index(index))
            .collect()
    }

    /// Parses raw user input into a position on this board.
    ///
    /// A trailing line terminator is ignored; surrounding spaces are tolerated.
    #[instrument(skip(self), fields(max_position = self.max_position()))]
    pub fn parse_position(&self, raw: &str) -> Result<Position, MoveError> {
        let raw = raw.trim_end_matches(['\r', '\n']);
        let max_position = self.max_position();

        let number: i64 = raw.trim().parse().map_err(|_| {
            debug!(raw, "Rejected non-numeric position");
            MoveError::NotANumber {
                raw: raw.to_string(),
                max_position,
            }
        })?;

        usize::try_from(number)
            .ok()
            .filter(|n| (1..=max_position).contains(n))
            .and_then(Position::new)
            .ok_or_else(|| {
                debug!(raw, number, "Rejected out-of-range position");
                MoveError::OutOfRange {
                    raw: raw.to_string(),
                    max_position,
                }
            })
    }

    /// Writes `mark` at `position` if the cell is blank.
    ///
    /// The occupancy error names the position by its number.
    #[instrument(skip(self))]
    pub fn place(&mut self, position: Position, mark: Mark) -> Result<Coordinates, MoveError> {
        self.place_as(position, mark, &position.to_string())
    }

    /// Validates and applies one move attempt from raw input.
    ///
    /// Checks, in order: the input is an integer, it is in range, the cell
    /// is blank.
    #[instrument(skip(self, player), fields(player = %player.name(), mark = %player.mark()))]
    pub fn try_move(&mut self, player: &Player, raw: &str) -> Result<Coordinates, MoveError> {
        let position = self.parse_position(raw)?;
        self.place_as(position, player.mark(), raw.trim_end_matches(['\r', '\n']))
    }

    fn place_as(
        &mut self,
        position: Position,
        mark: Mark,
        raw: &str,
    ) -> Result<Coordinates, MoveError> {
        let max_position = self.max_position();
        if position.number() > max_position {
            return Err(MoveError::OutOfRange {
                raw: raw.to_string(),
                max_position,
            });
        }

        let coordinates = position.coordinates(self.size);
        let cell = &mut self.cells[coordinates.row][coordinates.column];
        if let Cell::Marked(occupant) = *cell {
            debug!(%position, %occupant, "Rejected occupied position");
            return Err(MoveError::Occupied {
                raw: raw.to_string(),
                mark: occupant,
            });
        }

        *cell = Cell::Marked(mark);
        debug!(%position, %mark, ?coordinates, "Placed mark");
        Ok(coordinates)
    }

    /// Renders the grid as bordered text.
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }

    fn border(&self) -> String {
        format!("{}+", "+---".repeat(self.size))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = self.border();
        f.write_str(&border)?;
        for row in &self.cells {
            let joined = row
                .iter()
                .map(Cell::to_string)
                .collect::<Vec<_>>()
                .join(" | ");
            write!(f, "\n| {} |\n{}", joined, border)?;
        }
        Ok(())
    }
}
