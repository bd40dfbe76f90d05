//! Application state.

use std::path::PathBuf;
use std::sync::Arc;

use textintel_core::TextIntelligenceProvider;

/// Application state shared across handlers. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn TextIntelligenceProvider>,
    pub metadata_path: Arc<PathBuf>,
}

impl AppState {
    pub fn new(provider: Arc<dyn TextIntelligenceProvider>, metadata_path: impl Into<PathBuf>) -> Self {
        Self {
            provider,
            metadata_path: Arc::new(metadata_path.into()),
        }
    }
}
