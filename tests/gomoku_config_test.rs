//! Tests for loading game configuration files.

use std::io::Write;
use strictly_gomoku::{BoardSize, ConfigErrorKind, Game, GameConfig};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        r#"
size = 10
run_length = 4

[obstacles]
enabled = true
count = 12
"#,
    );
    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.size(), BoardSize::Ten);
    assert_eq!(config.run_length(), 4);
    assert!(*config.obstacles().enabled());
    assert_eq!(*config.obstacles().count(), 12);

    let game = Game::new(config).unwrap();
    assert_eq!(game.obstacles().len(), 12);
}

#[test]
fn test_empty_file_uses_defaults() {
    let file = write_config("");
    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_unsupported_size_is_parse_error() {
    let file = write_config("size = 8\n");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err.kind(), ConfigErrorKind::Parse(_)));
}

#[test]
fn test_run_length_longer_than_board() {
    let file = write_config("size = 3\nrun_length = 4\n");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert_eq!(
        err.kind(),
        &ConfigErrorKind::InvalidRunLength { run_length: 4, size: 3 }
    );
}

#[test]
fn test_missing_file() {
    let err = GameConfig::from_file("/definitely/not/here.toml").unwrap_err();
    assert!(matches!(err.kind(), ConfigErrorKind::Io(_)));
    assert!(err.to_string().starts_with("Config error:"));
}
