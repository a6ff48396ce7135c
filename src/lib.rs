//! Strictly Terminal - two-player tic-tac-toe on the terminal.
//!
//! The game engine lives in [`strictly_tictactoe`]; this crate adds the
//! terminal glue around it.
//!
//! # Architecture
//!
//! - **CLI**: the optional `--board-size` flag
//! - **Config**: defaults, an optional TOML settings file, CLI overrides
//! - **Setup**: Player 1 picks a mark; `O` always moves first
//! - **Session**: the turn loop, rendering after every half-move
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use strictly_terminal::{GameSession, create_players};
//! use strictly_tictactoe::{BoardSize, Console, GameOutcome};
//!
//! # fn main() -> std::io::Result<()> {
//! let script = "o\n1\n4\n2\n5\n3\n";
//! let mut console = Console::new(Cursor::new(script), Vec::new());
//!
//! let (first, second) = create_players(&mut console, "Player 1", "Player 2")?;
//! let mut session = GameSession::new(BoardSize::default(), first, second);
//! let outcome = session.play(&mut console)?;
//!
//! assert_eq!(outcome, GameOutcome::Win("Player 1".to_string()));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod session;
mod setup;

pub use cli::Cli;
pub use config::{CONFIG_ENV_VAR, ConfigError, Settings};
pub use session::GameSession;
pub use setup::create_players;
