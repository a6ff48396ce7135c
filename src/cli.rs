//! Command-line interface for strictly_terminal.

use clap::Parser;

/// Strictly Terminal - two-player tic-tac-toe on the terminal
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "strictly_terminal")]
#[command(about = "Two-player tic-tac-toe on the terminal", long_about = None)]
pub struct Cli {
    /// Board size to use for tic-tac-toe. The default is 3 if not specified.
    #[arg(short = 's', long = "board-size", allow_negative_numbers = true)]
    pub board_size: Option<i64>,
}
