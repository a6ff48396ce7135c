//! Result of evaluating a board.

/// State of the game after a half-move.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    /// Nobody has a line and blank cells remain.
    Ongoing,
    /// The named player completed a line.
    Win(String),
    /// The board is full without a completed line.
    Tie,
}

impl GameOutcome {
    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameOutcome::Ongoing)
    }

    /// Returns the winner's name for a win.
    pub fn winner(&self) -> Option<&str> {
        match self {
            GameOutcome::Win(name) => Some(name),
            GameOutcome::Ongoing | GameOutcome::Tie => None,
        }
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Ongoing => write!(f, "Game in progress"),
            GameOutcome::Win(name) => write!(f, "The winner is: {}", name),
            GameOutcome::Tie => write!(f, "Good news: no one lost! Bad news: no one won :("),
        }
    }
}
