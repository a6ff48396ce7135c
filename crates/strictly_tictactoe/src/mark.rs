//! The two-symbol mark alphabet.

use std::str::FromStr;

use tracing::{debug, instrument};

/// A symbol a player places on the board.
///
/// Marks always display upper-cased. `O` moves first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Noughts. Always seated first.
    O,
    /// Crosses.
    X,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::O => Mark::X,
            Mark::X => Mark::O,
        }
    }

    /// Parses a mark from user text, ignoring case.
    ///
    /// A trailing line terminator is dropped; any other whitespace makes the
    /// symbol invalid.
    #[instrument]
    pub fn parse(symbol: &str) -> Result<Self, MarkError> {
        let symbol = symbol.trim_end_matches(['\r', '\n']);
        Mark::from_str(symbol).map_err(|_| {
            debug!(symbol, "Rejected mark selection");
            MarkError::Unknown(symbol.to_uppercase())
        })
    }
}

/// Error raised when text does not name one of the two marks.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MarkError {
    /// The symbol is outside the `{O, X}` alphabet. Holds the upper-cased input.
    #[display("'{}' is not a valid selection. Please try again.", _0)]
    Unknown(String),
}

impl std::error::Error for MarkError {}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!(Mark::parse("o"), Ok(Mark::O));
        assert_eq!(Mark::parse("X"), Ok(Mark::X));
        assert_eq!(Mark::parse("x\r\n"), Ok(Mark::X));
    }

    #[test]
    fn test_parse_rejects_padded_symbols() {
        let padded = MarkError::Unknown(" X".to_string());
        assert_eq!(Mark::parse(" x\n"), Err(padded));
        let padded = MarkError::Unknown("O ".to_string());
        assert_eq!(Mark::parse("o \n"), Err(padded));
    }

    #[test]
    fn test_parse_rejects_other_symbols() {
        assert_eq!(Mark::parse("z"), Err(MarkError::Unknown("Z".to_string())));
        assert_eq!(Mark::parse("xo"), Err(MarkError::Unknown("XO".to_string())));
        assert!(Mark::parse("").is_err());
    }

    #[test]
    fn test_display_is_upper_case() {
        let rendered: Vec<String> = Mark::iter().map(|m| m.to_string()).collect();
        assert_eq!(rendered, vec!["O", "X"]);
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::O.opponent(), Mark::X);
        assert_eq!(Mark::X.opponent(), Mark::O);
    }

    #[test]
    fn test_error_message() {
        let err = Mark::parse("q").unwrap_err();
        let expected = "'Q' is not a valid selection. Please try again.";
        assert_eq!(err.to_string(), expected);
    }
}
