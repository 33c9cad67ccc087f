//! Core domain: config parsing tests.

use std::path::Path;

use super::config::parse_config;
use super::{PassiveTreeConfig, load_config};

#[test]
fn test_default_config() {
    let config = PassiveTreeConfig::default();
    assert_eq!(config.boards_dir, "assets/data/boards");
    assert_eq!(config.starting_points, 30);
    assert_eq!(config.core_board.id, "core");
    assert!(config.core_board.board_id.is_none());
    assert_eq!(config.debug.random_allocations, 0);
    assert!(!config.debug.log_summary_on_start);
}

#[test]
fn test_partial_config_fills_defaults() {
    let config = parse_config("(starting_points: 12, debug: (seed: 42))", "inline").unwrap();
    assert_eq!(config.starting_points, 12);
    assert_eq!(config.debug.seed, Some(42));
    assert!(config.debug.log_summary);
    assert_eq!(config.save_path, "saves/passive_tree.json");
}

#[test]
fn test_invalid_config_reports_file() {
    let err = parse_config("(starting_points: \"many\")", "bad.ron").unwrap_err();
    assert_eq!(err.file, "bad.ron");
    assert!(err.to_string().starts_with("Failed to load bad.ron"));
}

#[test]
fn test_load_missing_config_is_io_error() {
    let err = load_config(Path::new("definitely/not/here.ron")).unwrap_err();
    assert!(err.message.starts_with("IO error"));
}

#[test]
fn test_shipped_config_parses() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(super::CONFIG_PATH);
    let config = load_config(&path).unwrap();
    assert_eq!(config.core_board.id, "core");
}
