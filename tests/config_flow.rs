use safework_cli::config::config_manager::{ConfigManager, ConfigOverrides};
use safework_cli::config::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use safework_cli::errors::SafeworkError;

#[test]
fn sample_config_round_trips_through_loader() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("safework").join("config.toml");

    ConfigManager::create_sample_config(&path).expect("sample written");
    let config = ConfigManager::load_file(&path).expect("sample parses");

    assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.api.timeout_secs, DEFAULT_TIMEOUT_SECS);
    assert!(ConfigManager::validate_config(&config).is_ok());
}

#[test]
fn init_refuses_to_overwrite() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "").expect("write file");

    let error = ConfigManager::create_sample_config(&path).unwrap_err();
    assert!(matches!(error, SafeworkError::ConfigurationError { .. }));
}

#[test]
fn cli_flags_win_over_file_values() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[api]\nbase_url = \"http://file:5000\"\ntimeout_secs = 30\n").expect("write file");

    let mut config = ConfigManager::load_file(&path).expect("file parses");
    let overrides = ConfigOverrides {
        base_url: Some("http://flag:9000".to_string()),
        timeout_secs: None,
    };
    ConfigManager::apply_overrides(&mut config, Some("http://env:7000".to_string()), &overrides);

    assert_eq!(config.api.base_url, "http://flag:9000");
    assert_eq!(config.api.timeout_secs, 30);
    assert_eq!(config.api.upload_url(), "http://flag:9000/upload-document");
}

#[test]
fn invalid_values_are_all_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[api]\nbase_url = \"ftp://svc\"\ntimeout_secs = 0\n").expect("write file");

    let config = ConfigManager::load_file(&path).expect("file parses");
    let problems = ConfigManager::validate_config(&config).unwrap_err();

    assert_eq!(problems.len(), 2);
}

#[test]
fn broken_toml_names_the_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[api\nbase_url =").expect("write file");

    let error = ConfigManager::load_file(&path).unwrap_err();
    assert!(matches!(error, SafeworkError::ConfigurationFileError { .. }));
}
