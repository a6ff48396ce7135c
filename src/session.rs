//! The turn loop for one game on the terminal.

use std::io::{self, BufRead, Write};

use strictly_tictactoe::{Board, BoardSize, Console, GameOutcome, Player};
use tracing::{debug, info, instrument};

/// One game between two seated players.
#[derive(Debug, Clone)]
pub struct GameSession {
    /// The board.
    board: Board,
    /// Player holding `O`; moves first.
    first: Player,
    /// Player holding `X`.
    second: Player,
}

impl GameSession {
    /// Creates a session with an empty board.
    #[instrument]
    pub fn new(size: BoardSize, first: Player, second: Player) -> Self {
        info!(%size, first = %first.name(), second = %second.name(), "Creating new game session");
        Self {
            board: Board::new(size),
            first,
            second,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Plays until a win or a tie, then announces the result.
    ///
    /// The board is printed after every half-move.
    #[instrument(skip_all, fields(size = self.board.size()))]
    pub fn play<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> io::Result<GameOutcome> {
        let mut half_moves = 0usize;
        let outcome = loop {
            let player = if half_moves % 2 == 0 {
                &self.first
            } else {
                &self.second
            };
            self.board.make_move(player, console)?;
            half_moves += 1;

            console.say(&self.board.to_display_string())?;

            let outcome = self.board.check_for_winner(&self.first, &self.second);
            debug!(half_moves, %outcome, "Evaluated board");
            if outcome.is_over() {
                break outcome;
            }
        };

        info!(half_moves, %outcome, "Game over");
        console.say(&outcome.to_string())?;
        Ok(outcome)
    }
}
