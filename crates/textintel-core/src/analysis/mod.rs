//! Text analysis: request validation, feature selection and dispatch.

pub mod model;
pub mod options;

use tracing::{debug, info};

use crate::error::TextIntelResult;
use crate::provider::TextIntelligenceProvider;
use model::{AnalysisBody, AnalysisInput, AnalysisRequest, AnalysisResult};
use options::{AnalysisOptions, AnalysisQuery};

/// Validate the body and query of an analyze call.
///
/// The body is checked first so a request missing its input reports that
/// before any query problem.
pub fn validate_request(body: AnalysisBody, query: &AnalysisQuery) -> TextIntelResult<AnalysisRequest> {
    let input = AnalysisInput::from_body(body)?;
    let options = AnalysisOptions::from_query(query)?;
    Ok(AnalysisRequest { input, options })
}

/// Run one analysis against the provider and shape the results envelope.
///
/// Exactly one provider call is made; failures are returned as-is.
pub async fn analyze(
    provider: &dyn TextIntelligenceProvider,
    request: &AnalysisRequest,
) -> TextIntelResult<AnalysisResult> {
    info!(
        input = request.input.kind(),
        bytes = request.input.size_bytes(),
        features = ?request.options.requested_features(),
        language = %request.options.language,
        "Analyzing"
    );

    let response = provider.analyze(&request.input, &request.options).await?;
    let result = AnalysisResult::from_provider(response, &request.options)?;

    debug!(keys = ?result.keys().collect::<Vec<_>>(), "Analysis complete");
    Ok(result)
}
