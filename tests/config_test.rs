//! 設定ファイルの統合テスト

use std::path::PathBuf;
use tempfile::tempdir;
use widget_factory::config::Config;
use widget_factory::theme::ThemePreset;

#[test]
fn test_save_then_load_round_trips() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");

    let config = Config {
        scan_dir: Some(PathBuf::from("/tmp/showcase")),
        theme: ThemePreset::Light,
    };
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.scan_dir, Some(PathBuf::from("/tmp/showcase")));
    assert_eq!(loaded.theme, ThemePreset::Light);
}

#[test]
fn test_missing_file_loads_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("no_such_config.json");

    let loaded = Config::load_from(&path).unwrap();
    assert!(loaded.scan_dir.is_none());
    assert_eq!(loaded.theme, ThemePreset::Dark);
}

#[test]
fn test_save_creates_parent_dirs() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("deeper").join("config.json");

    Config::default().save_to(&path).unwrap();
    assert!(path.exists());
}
