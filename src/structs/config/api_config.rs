use serde::{Deserialize, Serialize};
use crate::config::constants::{DOWNLOAD_REPORT_PATH, UPLOAD_DOCUMENT_PATH};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Root of both the upload and the report endpoints
    #[serde(default = "ConfigHelper::default_base_url")]
    pub base_url: String,

    #[serde(default = "ConfigHelper::default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn upload_url(&self) -> String {
        format!("{}{}", self.trimmed_base_url(), UPLOAD_DOCUMENT_PATH)
    }

    pub fn report_url(&self, file_id: &str) -> String {
        format!("{}{}/{}", self.trimmed_base_url(), DOWNLOAD_REPORT_PATH, file_id)
    }

    fn trimmed_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: ConfigHelper::default_base_url(),
            timeout_secs: ConfigHelper::default_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_share_one_base_url() {
        let api = ApiConfig { base_url: "https://safework.example.com/".to_string(), timeout_secs: 5 };
        assert_eq!(api.upload_url(), "https://safework.example.com/upload-document");
        assert_eq!(api.report_url("f1"), "https://safework.example.com/download-report/f1");
    }
}
