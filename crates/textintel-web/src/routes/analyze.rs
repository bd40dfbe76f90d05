//! Text intelligence route handler.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use textintel_core::{analysis, AnalysisBody, AnalysisQuery, AnalysisResult};

use crate::error::ApiError;
use crate::state::AppState;

/// POST /text-intelligence/analyze - Analyze text or a URL.
///
/// The body carries exactly one of `text` or `url`; the query selects
/// features, and a repeated query key keeps its first value. Responds with
/// `{"results": {...}}` holding only the requested features.
pub async fn analyze(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
    body: Result<Json<AnalysisBody>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let Json(body) = body?;
    let Query(pairs) = query?;
    let query = AnalysisQuery::from_pairs(pairs);

    let request = analysis::validate_request(body, &query)?;
    let result = analysis::analyze(state.provider.as_ref(), &request).await?;

    Ok(Json(result))
}
