//! Shared application state injected into route handlers.

use gdptrend_analysis::TrendSummarizer;
use gdptrend_store::RecordStore;
use std::sync::Arc;

/// Handles to the external collaborators, chosen at startup and injected.
///
/// Cheap to clone; axum clones it per request.
#[derive(Clone)]
pub struct AppState {
    /// Gateway to the GDP record collection.
    pub store: Arc<dyn RecordStore>,
    /// Summarizer over the configured completion model.
    pub summarizer: TrendSummarizer,
}

impl AppState {
    /// Creates the application state.
    pub fn new(store: Arc<dyn RecordStore>, summarizer: TrendSummarizer) -> Self {
        Self { store, summarizer }
    }
}
