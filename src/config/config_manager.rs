use std::path::{Path, PathBuf};
use std::fs;
use reqwest::Url;
use crate::config::constants::{BASE_URL_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, MAX_FILE_SIZE_MB};
use crate::errors::{SafeworkError, SafeworkResult};
use crate::structs::config::config::Config;

/// Values given on the command line, applied after the file and environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

pub struct ConfigManager;

impl ConfigManager {

    pub fn default_path() -> SafeworkResult<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| SafeworkError::config_error(
                "Could not determine the home directory",
                None,
                Some("Pass --config <PATH> explicitly"),
            ))
    }

    /// File (if present) < `SAFEWORK_API_BASE_URL` < command-line overrides.
    pub fn load(path: Option<&Path>, overrides: &ConfigOverrides) -> SafeworkResult<Config> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_path()?,
        };

        let mut config = Self::load_file(&path)?;
        let env_base_url = std::env::var(BASE_URL_ENV).ok();
        Self::apply_overrides(&mut config, env_base_url, overrides);
        Ok(config)
    }

    pub fn load_file(path: &Path) -> SafeworkResult<Config> {
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        log::debug!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| SafeworkError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| SafeworkError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.message().to_string(),
        })
    }

    pub fn apply_overrides(config: &mut Config, env_base_url: Option<String>, overrides: &ConfigOverrides) {
        if let Some(base_url) = env_base_url.filter(|url| !url.trim().is_empty()) {
            config.api.base_url = base_url.trim().to_string();
        }

        if let Some(base_url) = &overrides.base_url {
            config.api.base_url = base_url.trim().to_string();
        }

        if let Some(timeout_secs) = overrides.timeout_secs {
            config.api.timeout_secs = timeout_secs;
        }
    }

    pub fn create_sample_config(path: &Path) -> SafeworkResult<()> {
        if path.exists() {
            return Err(SafeworkError::config_error(
                &format!("Configuration file already exists at {}", path.display()),
                None,
                Some("Edit the existing file or remove it first"),
            ));
        }

        let sample_config = Self::sample_config()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, sample_config)?;
        Ok(())
    }

    fn sample_config() -> SafeworkResult<String> {
        let body = toml::to_string_pretty(&Config::default())
            .map_err(|e| SafeworkError::system_error("render sample config", &e.to_string()))?;

        Ok(format!(
            "# SafeWork CLI configuration\n\
             #\n\
             # api.base_url is the root of both /upload-document and /download-report/{{fileId}}.\n\
             # It can also be set with the {BASE_URL_ENV} environment variable or --base-url.\n\n\
             {body}"
        ))
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        match Url::parse(&config.api.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => errors.push(format!("api.base_url must use http or https, got '{}'", url.scheme())),
            Err(e) => errors.push(format!("api.base_url '{}' is not a valid URL: {}", config.api.base_url, e)),
        }

        if config.api.timeout_secs == 0 {
            errors.push("api.timeout_secs must be greater than 0".to_string());
        }

        if config.upload.max_file_size_mb == 0 {
            errors.push("upload.max_file_size_mb must be greater than 0".to_string());
        } else if config.upload.max_file_size_mb > MAX_FILE_SIZE_MB {
            errors.push(format!("upload.max_file_size_mb must be at most {MAX_FILE_SIZE_MB}"));
        }

        if config.upload.allowed_extensions.is_empty() {
            errors.push("upload.allowed_extensions must list at least one extension".to_string());
        }

        if config.display.animate_score && config.display.score_tick_ms == 0 {
            errors.push("display.score_tick_ms must be greater than 0 while animate_score is on".to_string());
        }

        if config.display.highlight_keywords.iter().all(|k| k.trim().is_empty()) {
            errors.push("display.highlight_keywords must contain at least one keyword".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ConfigManager::load_file(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[api]\nbase_url = \"https://safework.example.com\"\n").unwrap();

        let config = ConfigManager::load_file(&path).unwrap();
        assert_eq!(config.api.base_url, "https://safework.example.com");
        assert_eq!(config.api.timeout_secs, 120);
        assert_eq!(config.upload.max_file_size_mb, 10);
    }

    #[test]
    fn command_line_beats_environment() {
        let mut config = Config::default();
        let overrides = ConfigOverrides {
            base_url: Some("http://cli:9000".to_string()),
            timeout_secs: Some(5),
        };
        ConfigManager::apply_overrides(&mut config, Some("http://env:8000".to_string()), &overrides);
        assert_eq!(config.api.base_url, "http://cli:9000");
        assert_eq!(config.api.timeout_secs, 5);

        let mut config = Config::default();
        ConfigManager::apply_overrides(&mut config, Some("http://env:8000".to_string()), &ConfigOverrides::default());
        assert_eq!(config.api.base_url, "http://env:8000");
    }

    #[test]
    fn sample_config_round_trips_and_validates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        ConfigManager::create_sample_config(&path).unwrap();

        let config = ConfigManager::load_file(&path).unwrap();
        assert!(ConfigManager::validate_config(&config).is_ok());
        assert!(ConfigManager::create_sample_config(&path).is_err());
    }

    #[test]
    fn validation_collects_every_problem() {
        let mut config = Config::default();
        config.api.base_url = "ftp://files".to_string();
        config.api.timeout_secs = 0;
        config.upload.allowed_extensions.clear();

        let errors = ConfigManager::validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn rejects_limits_that_would_break_uploads() {
        let mut config = Config::default();
        config.upload.max_file_size_mb = u64::MAX / 1024;
        config.display.score_tick_ms = 0;

        let errors = ConfigManager::validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.starts_with("upload.max_file_size_mb")));
        assert!(errors.iter().any(|e| e.starts_with("display.score_tick_ms")));
    }

    #[test]
    fn zero_tick_is_fine_without_animation() {
        let mut config = Config::default();
        config.display.animate_score = false;
        config.display.score_tick_ms = 0;
        assert!(ConfigManager::validate_config(&config).is_ok());
    }
}
