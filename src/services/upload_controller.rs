use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use chrono::Utc;
use tokio::sync::watch;
use crate::enums::upload_status::UploadStatus;
use crate::errors::{SafeworkError, SafeworkResult};
use crate::services::cancellation::CancelSignal;
use crate::services::result_store::ResultStore;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::document_upload::DocumentUpload;
use crate::structs::sort_state::SortState;
use crate::structs::upload_response::UploadResponse;
use crate::traits::analysis_client::AnalysisClient;

/// Status of the latest submission and its error message, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadState {
    pub status: UploadStatus,
    pub error: Option<String>,
}

impl UploadState {
    pub fn message(&self) -> String {
        self.status.message(self.error.as_deref())
    }
}

/// Drives one document submission at a time and records successful
/// analyses in the shared [`ResultStore`].
pub struct UploadController<C: AnalysisClient> {
    client: C,
    store: Arc<Mutex<ResultStore>>,
    state: watch::Sender<UploadState>,
    busy: AtomicBool,
    timeout: Duration,
}

/// Held for the duration of a submission. Releases the busy flag on every
/// exit path, including the submission future being dropped.
struct InFlightGuard<'a> {
    busy: &'a AtomicBool,
    state: &'a watch::Sender<UploadState>,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(busy: &'a AtomicBool, state: &'a watch::Sender<UploadState>) -> SafeworkResult<Self> {
        busy.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| SafeworkError::UploadInProgress)?;
        Ok(Self { busy, state })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.state.send_if_modified(|state| {
            if state.status.is_in_flight() {
                *state = UploadState {
                    status: UploadStatus::Error,
                    error: Some(SafeworkError::Cancelled.status_message()),
                };
                true
            } else {
                false
            }
        });
        self.busy.store(false, Ordering::Release);
    }
}

impl<C: AnalysisClient> UploadController<C> {
    pub fn new(client: C, timeout: Duration) -> Self {
        Self::with_store(client, timeout, Arc::new(Mutex::new(ResultStore::new())))
    }

    pub fn with_store(client: C, timeout: Duration, store: Arc<Mutex<ResultStore>>) -> Self {
        let (state, _) = watch::channel(UploadState::default());
        Self {
            client,
            store,
            state,
            busy: AtomicBool::new(false),
            timeout,
        }
    }

    pub fn state(&self) -> UploadState {
        self.state.borrow().clone()
    }

    /// Receives every status transition.
    pub fn subscribe(&self) -> watch::Receiver<UploadState> {
        self.state.subscribe()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn store(&self) -> Arc<Mutex<ResultStore>> {
        Arc::clone(&self.store)
    }

    pub fn current(&self) -> Option<Arc<AnalysisResult>> {
        self.lock_store().current()
    }

    pub fn select(&self, id: &str) -> SafeworkResult<Arc<AnalysisResult>> {
        self.lock_store().select(id)
    }

    pub fn sorted_results(&self, sort: &SortState) -> Vec<Arc<AnalysisResult>> {
        self.lock_store().sorted(sort)
    }

    pub fn result_count(&self) -> usize {
        self.lock_store().len()
    }

    /// Uploads `document` and, on success, prepends the analysis to the store
    /// and makes it current. A second call while one is running is rejected
    /// with `UploadInProgress` and leaves the status alone.
    pub async fn submit(&self, document: &DocumentUpload, cancel: &CancelSignal) -> SafeworkResult<Arc<AnalysisResult>> {
        let _guard = InFlightGuard::acquire(&self.busy, &self.state)?;

        self.transition(UploadStatus::Uploading, None);
        log::debug!("📤 Uploading {} ({})", document.filename, DocumentUpload::format_size(document.size()));

        let outcome = tokio::select! {
            biased;
            () = cancel.cancelled() => Err(SafeworkError::Cancelled),
            outcome = self.perform(document) => outcome,
        };

        match outcome {
            Ok(result) => {
                let result = {
                    let mut store = self.lock_store();
                    let result = store.add(result);
                    store.select(&result.id)?
                };
                self.transition(UploadStatus::Complete, None);
                log::debug!("✅ Stored analysis {} for {}", result.id, result.filename);
                Ok(result)
            }
            Err(error) => {
                log::error!("❌ Upload of {} failed: {}", document.filename, error);
                self.transition(UploadStatus::Error, Some(error.status_message()));
                Err(error)
            }
        }
    }

    async fn perform(&self, document: &DocumentUpload) -> SafeworkResult<AnalysisResult> {
        let reply = tokio::time::timeout(self.timeout, self.client.post_document(document))
            .await
            .map_err(|_| SafeworkError::Timeout { elapsed: self.timeout })??;

        if !reply.is_success() {
            return Err(SafeworkError::HttpStatus {
                status_code: reply.status,
                url: reply.url,
            });
        }

        self.transition(UploadStatus::Processing, None);
        let received_at = Utc::now();

        UploadResponse::from_slice(&reply.body)?.into_analysis_result(received_at)
    }

    fn transition(&self, status: UploadStatus, error: Option<String>) {
        log::debug!("Upload status -> {status}");
        self.state.send_replace(UploadState { status, error });
    }

    fn lock_store(&self) -> MutexGuard<'_, ResultStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
