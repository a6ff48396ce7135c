//! Tests for loading settings files.

use std::io::Write;

use strictly_terminal::{Cli, Settings};
use strictly_tictactoe::{BoardSize, BoardSizeError};
use tempfile::NamedTempFile;

fn settings_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write settings");
    file
}

#[test]
fn test_full_settings_file() {
    let file = settings_file(
        r#"
board_size = 5
first_name = "Ada"
second_name = "Grace"
log_filter = "debug"
"#,
    );

    let settings = Settings::from_file(file.path()).unwrap();

    assert_eq!(settings.board_size().map(BoardSize::get), Ok(5));
    assert_eq!(settings.first_name(), "Ada");
    assert_eq!(settings.second_name(), "Grace");
    assert_eq!(settings.log_filter(), "debug");
}

#[test]
fn test_empty_settings_file_uses_defaults() {
    let file = settings_file("");
    let settings = Settings::from_file(file.path()).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_too_small_board_in_file() {
    let file = settings_file("board_size = 1\n");
    let settings = Settings::from_file(file.path()).unwrap();
    assert_eq!(settings.board_size(), Err(BoardSizeError::TooSmall(1)));
}

#[test]
fn test_command_line_fixes_file_size() {
    let file = settings_file("board_size = 1\n");
    let cli = Cli {
        board_size: Some(4),
    };
    let settings = Settings::from_file(file.path()).unwrap().with_cli(&cli);
    assert_eq!(settings.board_size().map(BoardSize::get), Ok(4));
}

#[test]
fn test_malformed_file_is_an_error() {
    let file = settings_file("board_size = \"three\"\n");
    let err = Settings::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("absent.toml");
    let err = Settings::from_file(missing).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}
