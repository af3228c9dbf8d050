use std::fmt;

/// Lifecycle of a single document submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadStatus {
    #[default]
    Idle,
    Uploading,
    Processing,
    Complete,
    Error,
}

impl UploadStatus {
    pub const fn is_in_flight(self) -> bool {
        matches!(self, Self::Uploading | Self::Processing)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Complete | Self::Error)
    }

    /// Message shown under the upload area; `error` is only used for `Error`.
    pub fn message(self, error: Option<&str>) -> String {
        match self {
            Self::Idle => String::new(),
            Self::Uploading => "Uploading file...".to_string(),
            Self::Processing => "Processing document...".to_string(),
            Self::Complete => "Analysis complete!".to_string(),
            Self::Error => match error {
                Some(message) if !message.is_empty() => message.to_string(),
                _ => "An error occurred".to_string(),
            },
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Idle => "",
            Self::Uploading => "📤",
            Self::Processing => "⚙️",
            Self::Complete => "✅",
            Self::Error => "❌",
        }
    }
}

impl fmt::Display for UploadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Uploading => "uploading",
            Self::Processing => "processing",
            Self::Complete => "complete",
            Self::Error => "error",
        };
        write!(f, "{name}")
    }
}
