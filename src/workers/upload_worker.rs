use std::path::Path;
use std::sync::Arc;
use crate::errors::SafeworkResult;
use crate::logger::animated_logger::AnimatedLogger;
use crate::services::cancellation::cancel_pair;
use crate::services::upload_controller::UploadController;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::config::upload_config::UploadConfig;
use crate::structs::document_upload::DocumentUpload;
use crate::traits::analysis_client::AnalysisClient;

/// Loads a document from disk and pushes it through the controller with a
/// spinner on screen. Ctrl+C cancels the request rather than the process.
pub struct UploadWorker;

impl UploadWorker {
    pub async fn upload_path<C: AnalysisClient>(
        controller: &UploadController<C>,
        path: &Path,
        limits: &UploadConfig,
    ) -> SafeworkResult<Arc<AnalysisResult>> {
        let document = DocumentUpload::load(path, limits).await?;
        log::info!("📄 {} ({})", document.filename, DocumentUpload::format_size(document.size()));

        let (cancel_handle, cancel_signal) = cancel_pair();
        let mut spinner = AnimatedLogger::new();
        spinner.start(controller.subscribe());

        let submission = controller.submit(&document, &cancel_signal);
        tokio::pin!(submission);

        let outcome = tokio::select! {
            outcome = &mut submission => outcome,
            _ = tokio::signal::ctrl_c() => {
                cancel_handle.cancel();
                submission.await
            }
        };

        match &outcome {
            Ok(_) => spinner.stop(&controller.state().message()).await,
            Err(_) => spinner.error(&controller.state().message()).await,
        }

        outcome
    }
}
