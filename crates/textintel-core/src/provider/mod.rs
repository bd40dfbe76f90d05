//! Text intelligence providers.

pub mod deepgram;

use async_trait::async_trait;
use serde_json::Value;

use crate::analysis::model::AnalysisInput;
use crate::analysis::options::AnalysisOptions;
use crate::error::TextIntelResult;

pub use deepgram::{DeepgramClient, DeepgramConfig};

/// A remote service that runs summarization, topic detection, sentiment
/// analysis and intent recognition.
///
/// Shared across request handlers as `Arc<dyn TextIntelligenceProvider>`.
#[async_trait]
pub trait TextIntelligenceProvider: Send + Sync {
    /// Submit one input with the selected features and return the raw
    /// provider response body.
    async fn analyze(&self, input: &AnalysisInput, options: &AnalysisOptions) -> TextIntelResult<Value>;
}
