//! Game settings: defaults, optional TOML file, command-line overrides.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_tictactoe::{BoardSize, BoardSizeError};
use tracing::{debug, info, instrument};

/// Environment variable naming an optional settings file.
pub const CONFIG_ENV_VAR: &str = "STRICTLY_TERMINAL_CONFIG";

/// Settings for one game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Requested side length. Validated by [`Settings::board_size`].
    #[getter(skip)]
    board_size: i64,

    /// Display name of the player who picks a mark.
    first_name: String,

    /// Display name of the other player.
    second_name: String,

    /// Tracing filter used when `RUST_LOG` is not set.
    log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board_size: BoardSize::MIN as i64,
            first_name: "Player 1".to_string(),
            second_name: "Player 2".to_string(),
            log_filter: "warn".to_string(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file. Missing keys keep their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(board_size = settings.board_size, "Settings loaded");
        Ok(settings)
    }

    /// Loads the file named by [`CONFIG_ENV_VAR`], or defaults if it is unset.
    #[instrument]
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No settings file configured, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(size) = cli.board_size {
            debug!(size, "Board size overridden on the command line");
            self.board_size = size;
        }
        self
    }

    /// Returns the validated board size.
    pub fn board_size(&self) -> Result<BoardSize, BoardSizeError> {
        BoardSize::try_from(self.board_size)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.board_size().map(BoardSize::get), Ok(3));
        assert_eq!(settings.first_name(), "Player 1");
        assert_eq!(settings.second_name(), "Player 2");
        assert_eq!(settings.log_filter(), "warn");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let settings: Settings = toml::from_str("board_size = 4\n").unwrap();
        assert_eq!(settings.board_size().map(BoardSize::get), Ok(4));
        assert_eq!(settings.first_name(), "Player 1");
    }

    #[test]
    fn test_cli_overrides_file() {
        let settings: Settings = toml::from_str("board_size = 4\n").unwrap();
        let cli = Cli {
            board_size: Some(6),
        };
        let settings = settings.with_cli(&cli);
        assert_eq!(settings.board_size().map(BoardSize::get), Ok(6));
    }

    #[test]
    fn test_absent_flag_keeps_file_value() {
        let settings: Settings = toml::from_str("board_size = 5\n").unwrap();
        let settings = settings.with_cli(&Cli::default());
        assert_eq!(settings.board_size().map(BoardSize::get), Ok(5));
    }

    #[test]
    fn test_small_board_rejected() {
        let cli = Cli {
            board_size: Some(2),
        };
        let settings = Settings::default().with_cli(&cli);
        assert_eq!(settings.board_size(), Err(BoardSizeError::TooSmall(2)));
    }

    #[test]
    fn test_config_error_tracks_location() {
        let err = ConfigError::new("boom".to_string());
        assert_eq!(err.line, line!() - 1);
        assert!(err.to_string().starts_with("Config error: boom at "));
    }
}
