use tempfile::TempDir;
use yamlnav::config::Config;

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert_eq!(config.theme, "default-dark");
    assert!(!config.line_numbers);
    assert_eq!(config.scroll_step, 1);
    assert!(config.enable_mouse);
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("config.toml"));
    assert_eq!(config, Config::default());
}

#[test]
fn test_invalid_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "theme = [not valid").unwrap();
    assert_eq!(Config::load_from(&path), Config::default());
}
