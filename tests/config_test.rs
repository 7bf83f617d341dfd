//! Tests for loading configuration from disk.

use std::io::Write;
use tempfile::NamedTempFile;
use tictactoe::{GameConfig, GameMode, Mark};

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
ai_mark = "X"
first_mark = "O"
default_mode = "human_vs_human"
log_file = "game.log"
log_filter = "tictactoe=debug"
"#
    )
    .unwrap();

    let config = GameConfig::load_or_default(file.path()).unwrap();
    assert_eq!(*config.ai_mark(), Mark::X);
    assert_eq!(*config.first_mark(), Mark::O);
    assert_eq!(*config.default_mode(), Some(GameMode::HumanVsHuman));
    assert_eq!(config.log_file().to_str(), Some("game.log"));
    assert_eq!(config.log_filter(), "tictactoe=debug");
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "ai_mark = \"Z\"").unwrap();

    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}
