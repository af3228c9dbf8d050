use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct UploadConfig {
    #[serde(default = "ConfigHelper::default_max_file_size_mb")]
    pub max_file_size_mb: u64,

    #[serde(default = "ConfigHelper::default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
}

impl UploadConfig {
    pub const fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_mb.saturating_mul(1024 * 1024)
    }

    pub fn allows_extension(&self, extension: &str) -> bool {
        self.allowed_extensions
            .iter()
            .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(extension))
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: ConfigHelper::default_max_file_size_mb(),
            allowed_extensions: ConfigHelper::default_allowed_extensions(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn huge_size_limit_saturates() {
        let limits = UploadConfig {
            max_file_size_mb: u64::MAX / 1024,
            ..UploadConfig::default()
        };
        assert_eq!(limits.max_file_size_bytes(), u64::MAX);
    }

    #[test]
    fn extensions_match_with_or_without_dot() {
        let limits = UploadConfig {
            allowed_extensions: vec![".PDF".to_string()],
            ..UploadConfig::default()
        };
        assert!(limits.allows_extension("pdf"));
        assert!(!limits.allows_extension("png"));
    }
}
