use std::path::{Path, PathBuf};
use crate::config::constants::mime_type_for;
use crate::errors::{SafeworkError, SafeworkResult};
use crate::structs::config::upload_config::UploadConfig;

/// A document read from disk and ready to be sent as the `file` part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentUpload {
    pub path: PathBuf,
    pub filename: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl DocumentUpload {
    pub fn new(filename: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        let filename = filename.into();
        Self {
            path: PathBuf::from(&filename),
            filename,
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Reads `path` after checking its extension and size against `limits`.
    pub async fn load(path: &Path, limits: &UploadConfig) -> SafeworkResult<Self> {
        let display = path.display().to_string();

        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .ok_or_else(|| SafeworkError::unsupported_document(&display, "path has no file name"))?;

        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        if !limits.allows_extension(&extension) {
            return Err(SafeworkError::unsupported_document(
                &display,
                &format!("extension '{}' is not one of {}", extension, limits.allowed_extensions.join(", ")),
            ));
        }

        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|e| SafeworkError::file_error(&display, "stat", &e.to_string()))?;

        if !metadata.is_file() {
            return Err(SafeworkError::unsupported_document(&display, "not a regular file"));
        }

        if metadata.len() > limits.max_file_size_bytes() {
            return Err(SafeworkError::unsupported_document(
                &display,
                &format!("{} exceeds the {} MB limit", Self::format_size(metadata.len()), limits.max_file_size_mb),
            ));
        }

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| SafeworkError::file_error(&display, "read", &e.to_string()))?;

        Ok(Self {
            path: path.to_path_buf(),
            filename,
            mime_type: mime_type_for(&extension).to_string(),
            bytes,
        })
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn format_size(bytes: u64) -> String {
        format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
    }
}
