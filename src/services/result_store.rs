use std::sync::Arc;
use crate::errors::{SafeworkError, SafeworkResult};
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::sort_state::SortState;

/// Completed analyses for the current session, most recent first, plus the
/// one shown in the detail panels.
#[derive(Debug, Default, Clone)]
pub struct ResultStore {
    results: Vec<Arc<AnalysisResult>>,
    current: Option<Arc<AnalysisResult>>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends `result`. An existing entry with the same id is dropped first.
    pub fn add(&mut self, result: AnalysisResult) -> Arc<AnalysisResult> {
        let result = Arc::new(result);
        self.results.retain(|existing| existing.id != result.id);
        self.results.insert(0, Arc::clone(&result));
        result
    }

    /// Marks the analysis with `id` as current without reordering the store.
    pub fn select(&mut self, id: &str) -> SafeworkResult<Arc<AnalysisResult>> {
        let result = self
            .get(id)
            .ok_or_else(|| SafeworkError::ResultNotFound { id: id.to_string() })?;
        self.current = Some(Arc::clone(&result));
        Ok(result)
    }

    pub fn current(&self) -> Option<Arc<AnalysisResult>> {
        self.current.clone()
    }

    pub fn get(&self, id: &str) -> Option<Arc<AnalysisResult>> {
        self.results.iter().find(|result| result.id == id).cloned()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<AnalysisResult>> {
        self.results.iter()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// A reordered copy for display; the store itself is left as is.
    pub fn sorted(&self, sort: &SortState) -> Vec<Arc<AnalysisResult>> {
        let mut rows = self.results.clone();
        rows.sort_by(|a, b| sort.compare(a, b));
        rows
    }
}
