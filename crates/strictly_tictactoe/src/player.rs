//! Game participants.

use derive_getters::Getters;
use tracing::instrument;

use crate::mark::{Mark, MarkError};

/// A participant: a mark coupled with a display name.
///
/// Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Player {
    /// The mark this player places.
    #[getter(skip)]
    mark: Mark,
    /// Name used in prompts and when announcing the winner.
    name: String,
}

impl Player {
    /// Creates a player with a typed mark.
    #[instrument(skip(name))]
    pub fn new(mark: Mark, name: impl Into<String>) -> Self {
        Self {
            mark,
            name: name.into(),
        }
    }

    /// Creates a player from a textual symbol such as `"x"` or `"O"`.
    ///
    /// The symbol is normalised to upper case and must be one of the two marks.
    #[instrument(skip(name))]
    pub fn from_symbol(symbol: &str, name: impl Into<String>) -> Result<Self, MarkError> {
        Ok(Self::new(Mark::parse(symbol)?, name))
    }

    /// Returns the player's mark.
    pub fn mark(&self) -> Mark {
        self.mark
    }
}
