use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum SafeworkError {
    // Configuration errors
    #[error("Configuration Error: {message}")]
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    #[error("Configuration file error at '{path}': {reason}")]
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // Document errors
    #[error("File operation '{operation}' failed for '{file_path}': {reason}")]
    FileOperationError {
        file_path: String,
        operation: String,
        reason: String,
    },
    #[error("Unsupported document '{file_path}': {reason}")]
    UnsupportedDocument {
        file_path: String,
        reason: String,
    },

    // Upload lifecycle errors
    #[error("An upload is already in progress")]
    UploadInProgress,
    #[error("Network error during {operation}: {reason}")]
    NetworkError {
        operation: String,
        url: Option<String>,
        reason: String,
    },
    #[error("Upload failed")]
    HttpStatus {
        status_code: u16,
        url: String,
    },
    #[error("Malformed response: {reason}")]
    MalformedResponse {
        reason: String,
    },
    #[error("Upload timed out after {elapsed:?}")]
    Timeout {
        elapsed: Duration,
    },
    #[error("Upload cancelled")]
    Cancelled,

    // Session errors
    #[error("No analysis with id '{id}'")]
    ResultNotFound {
        id: String,
    },
    #[error("Invalid input '{input}': expected {expected}")]
    UserInputError {
        input: String,
        expected: String,
        suggestion: String,
    },

    // System errors
    #[error("System error during {operation}: {reason}")]
    SystemError {
        operation: String,
        reason: String,
    },
}

impl SafeworkError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(ToString::to_string),
            suggestion: suggestion.map(ToString::to_string),
        }
    }

    pub fn file_error(file_path: &str, operation: &str, reason: &str) -> Self {
        Self::FileOperationError {
            file_path: file_path.to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn unsupported_document(file_path: &str, reason: &str) -> Self {
        Self::UnsupportedDocument {
            file_path: file_path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedResponse { reason: reason.into() }
    }

    pub fn network_error(operation: &str, url: Option<&str>, reason: &str) -> Self {
        Self::NetworkError {
            operation: operation.to_string(),
            url: url.map(ToString::to_string),
            reason: reason.to_string(),
        }
    }

    pub fn input_error(input: &str, expected: &str, suggestion: &str) -> Self {
        Self::UserInputError {
            input: input.to_string(),
            expected: expected.to_string(),
            suggestion: suggestion.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Short message shown next to the upload status.
    pub fn status_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            "Upload failed".to_string()
        } else {
            message
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::NetworkError { .. }
            | Self::HttpStatus { .. }
            | Self::Timeout { .. }
            | Self::Cancelled
            | Self::UploadInProgress
            | Self::UserInputError { .. }
            | Self::ResultNotFound { .. }
            | Self::UnsupportedDocument { .. }
            | Self::ConfigurationError { .. } => true,
            Self::MalformedResponse { .. }
            | Self::ConfigurationFileError { .. }
            | Self::FileOperationError { .. }
            | Self::SystemError { .. } => false,
        }
    }

    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::FileOperationError { .. }
            | Self::ConfigurationFileError { .. }
            | Self::MalformedResponse { .. } => ErrorSeverity::High,
            Self::NetworkError { .. }
            | Self::HttpStatus { .. }
            | Self::Timeout { .. }
            | Self::UnsupportedDocument { .. } => ErrorSeverity::Medium,
            Self::Cancelled
            | Self::UploadInProgress
            | Self::ResultNotFound { .. }
            | Self::UserInputError { .. }
            | Self::ConfigurationError { .. } => ErrorSeverity::Low,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {message}");
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {field})"));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {suggestion}"));
                }
                msg
            }
            Self::ConfigurationFileError { .. } => {
                format!("{self}\n💡 Check file permissions and TOML syntax")
            }
            Self::FileOperationError { .. } => {
                format!("{self}\n💡 Check file permissions and path")
            }
            Self::UnsupportedDocument { .. } => {
                format!("{self}\n💡 Upload a PDF, PNG or JPG document within the configured size limit")
            }
            Self::UploadInProgress => {
                format!("{self}\n💡 Wait for the current upload to finish or cancel it")
            }
            Self::NetworkError { url, .. } => {
                let mut msg = self.to_string();
                if let Some(url) = url {
                    msg.push_str(&format!(" (URL: {url})"));
                }
                msg.push_str("\n💡 Check your connection and the configured base_url");
                msg
            }
            Self::HttpStatus { status_code, url } => {
                format!("{self} (Status: {status_code}, URL: {url})\n💡 The analysis service rejected the document, try again later")
            }
            Self::MalformedResponse { .. } => {
                format!("{self}\n💡 The analysis service returned an unexpected payload")
            }
            Self::Timeout { .. } => {
                format!("{self}\n💡 Increase api.timeout_secs or pass --timeout")
            }
            Self::Cancelled => self.to_string(),
            Self::ResultNotFound { .. } => {
                format!("{self}\n💡 Run 'list' to see the available analyses")
            }
            Self::UserInputError { suggestion, .. } => {
                format!("{self}\n💡 {suggestion}")
            }
            Self::SystemError { .. } => {
                format!("{self}\n💡 This may require administrator intervention")
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{self:?}")
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for safework operations
pub type SafeworkResult<T> = Result<T, SafeworkError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Handle error with appropriate logging and user feedback
    pub fn handle_error(error: &SafeworkError) {
        let severity = error.severity();

        log::debug!("[{}] {}", severity.name(), error.technical_details());

        eprintln!("{} {}", severity.emoji(), error.user_message());

        if error.is_recoverable() {
            eprintln!("🔄 This error is recoverable - you can retry the operation");
        }
    }
}

impl From<std::io::Error> for SafeworkError {
    fn from(error: std::io::Error) -> Self {
        Self::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for SafeworkError {
    fn from(error: serde_json::Error) -> Self {
        Self::MalformedResponse {
            reason: format!("invalid JSON at line {}: {error}", error.line()),
        }
    }
}

impl From<toml::de::Error> for SafeworkError {
    fn from(error: toml::de::Error) -> Self {
        Self::ConfigurationError {
            message: error.message().to_string(),
            field: None,
            suggestion: Some("Run 'safework init' to regenerate a sample configuration".to_string()),
        }
    }
}

impl From<reqwest::Error> for SafeworkError {
    fn from(error: reqwest::Error) -> Self {
        if let Some(status) = error.status() {
            return Self::HttpStatus {
                status_code: status.as_u16(),
                url: error.url().map(ToString::to_string).unwrap_or_default(),
            };
        }

        Self::NetworkError {
            operation: "HTTP request".to_string(),
            url: error.url().map(ToString::to_string),
            reason: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_collapses_to_generic_message() {
        let error = SafeworkError::HttpStatus { status_code: 500, url: "http://x/upload-document".to_string() };
        assert_eq!(error.status_message(), "Upload failed");
        assert!(error.user_message().contains("Status: 500"));
    }

    #[test]
    fn json_errors_become_malformed_responses() {
        let error: SafeworkError = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err().into();
        assert!(matches!(error, SafeworkError::MalformedResponse { .. }));
        assert!(!error.is_recoverable());
    }

    #[test]
    fn severity_orders_from_low_to_critical() {
        assert!(ErrorSeverity::Low < ErrorSeverity::Critical);
        assert_eq!(SafeworkError::Cancelled.severity(), ErrorSeverity::Low);
        assert_eq!(SafeworkError::system_error("boot", "disk").severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn short_timeouts_keep_their_precision() {
        let error = SafeworkError::Timeout { elapsed: Duration::from_millis(300) };
        assert_eq!(error.status_message(), "Upload timed out after 300ms");

        let error = SafeworkError::Timeout { elapsed: Duration::from_secs(120) };
        assert_eq!(error.to_string(), "Upload timed out after 120s");
    }
}
