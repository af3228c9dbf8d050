use async_trait::async_trait;
use crate::errors::SafeworkResult;
use crate::structs::document_upload::DocumentUpload;
use crate::structs::service_reply::ServiceReply;

/// Transport to the document analysis service.
///
/// Implementations return `Err` only when no HTTP reply was obtained at all;
/// non-success statuses come back as a `ServiceReply` so the caller decides
/// how to treat them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalysisClient: Send + Sync {
    async fn post_document(&self, document: &DocumentUpload) -> SafeworkResult<ServiceReply>;
}
