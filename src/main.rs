//! Strictly Terminal - play tic-tac-toe on the terminal.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use strictly_terminal::{Cli, GameSession, Settings, create_players};
use strictly_tictactoe::{BoardSize, Console, GameOutcome};
use tracing::{error, info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let settings = match Settings::from_env() {
        Ok(settings) => settings.with_cli(&cli),
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    initialize_tracing(settings.log_filter());

    // Reject degenerate or oversized boards before any game state exists
    let size = match settings.board_size() {
        Ok(size) => size,
        Err(e) => {
            println!("{}", e);
            return ExitCode::from(1);
        }
    };

    match run(size, &settings) {
        Ok(outcome) => {
            info!(%outcome, winner = ?outcome.winner(), "Exiting normally");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Game aborted");
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Seats the players and plays one game on stdin/stdout.
#[instrument(skip(settings))]
fn run(size: BoardSize, settings: &Settings) -> Result<GameOutcome> {
    let mut console = Console::stdio();

    let (first, second) = create_players(
        &mut console,
        settings.first_name(),
        settings.second_name(),
    )
    .context("Failed to seat players")?;

    let mut session = GameSession::new(size, first, second);
    let outcome = session.play(&mut console).context("Game interrupted")?;
    Ok(outcome)
}

/// Logs to stderr so the game's own output on stdout stays clean.
fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
