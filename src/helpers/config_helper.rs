use crate::config::constants::{
    DEFAULT_BASE_URL, DEFAULT_MAX_FILE_SIZE_MB, DEFAULT_SCORE_TICK_MS, DEFAULT_TIMEOUT_SECS,
    RISK_KEYWORDS, SUPPORTED_DOCUMENT_TYPES,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_base_url() -> String {
        DEFAULT_BASE_URL.to_string()
    }

    pub const fn default_timeout_secs() -> u64 {
        DEFAULT_TIMEOUT_SECS
    }

    pub const fn default_max_file_size_mb() -> u64 {
        DEFAULT_MAX_FILE_SIZE_MB
    }

    pub fn default_allowed_extensions() -> Vec<String> {
        SUPPORTED_DOCUMENT_TYPES
            .iter()
            .map(|(extension, _)| (*extension).to_string())
            .collect()
    }

    pub const fn default_animate_score() -> bool {
        true
    }

    pub const fn default_score_tick_ms() -> u64 {
        DEFAULT_SCORE_TICK_MS
    }

    pub fn default_highlight_keywords() -> Vec<String> {
        RISK_KEYWORDS.iter().map(ToString::to_string).collect()
    }
}
