use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const BASE_URL_ENV: &str = "SAFEWORK_API_BASE_URL";
pub const UPLOAD_DOCUMENT_PATH: &str = "/upload-document";
pub const DOWNLOAD_REPORT_PATH: &str = "/download-report";
pub const UPLOAD_FIELD_NAME: &str = "file";

pub const CONFIG_DIR_NAME: &str = "safework";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_MAX_FILE_SIZE_MB: u64 = 10;
pub const MAX_FILE_SIZE_MB: u64 = 1024;
pub const DEFAULT_SCORE_TICK_MS: u64 = 20;
pub const SCORE_BAR_WIDTH: usize = 20;
pub const MAX_RISK_SCORE: u8 = 100;

pub const SUPPORTED_DOCUMENT_TYPES: &[(&str, &str)] = &[
    ("pdf", "application/pdf"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
];

pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

pub const RISK_KEYWORDS: &[&str] = &[
    "hazard",
    "risk",
    "danger",
    "unsafe",
    "failure",
    "malfunction",
    "inadequate",
    "expired",
    "missing",
    "damaged",
    "broken",
    "leak",
    "worn",
    "outdated",
    "violation",
    "non-compliance",
    "deficiency",
];

pub const fn timeout_duration(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}

pub const fn tick_duration(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}

pub fn mime_type_for(extension: &str) -> &'static str {
    SUPPORTED_DOCUMENT_TYPES
        .iter()
        .find(|(ext, _)| ext.eq_ignore_ascii_case(extension))
        .map_or(DEFAULT_MIME_TYPE, |(_, mime)| *mime)
}
