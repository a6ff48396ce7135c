//! Seating the two players.

use std::io::{self, BufRead, Write};

use strictly_tictactoe::{Console, Mark, Player};
use tracing::{debug, info, instrument};

/// Asks the first player to pick a mark and seats both players.
///
/// Returns `(first_to_move, second_to_move)`. Whoever holds `O` moves first,
/// so choosing `X` seats the other player first. Anything other than `x` or
/// `o` (any case) is reported and asked again.
#[instrument(skip(console))]
pub fn create_players<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    first_name: &str,
    second_name: &str,
) -> io::Result<(Player, Player)> {
    let prompt = format!("{}, choose X or O: ", first_name);

    loop {
        let answer = console.prompt(&prompt)?;
        match Mark::parse(&answer) {
            Ok(Mark::O) => {
                info!(name = first_name, "Picked O and moves first");
                return Ok((
                    Player::new(Mark::O, first_name),
                    Player::new(Mark::X, second_name),
                ));
            }
            Ok(Mark::X) => {
                info!(name = first_name, "Picked X and moves second");
                return Ok((
                    Player::new(Mark::O, second_name),
                    Player::new(Mark::X, first_name),
                ));
            }
            Err(err) => {
                debug!(error = %err, "Invalid mark selection");
                console.say(&err.to_string())?;
            }
        }
    }
}
