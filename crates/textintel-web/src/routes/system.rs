//! System handlers: health and app metadata.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use textintel_core::meta;
use tracing::error;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

#[derive(Serialize)]
pub struct MetadataError {
    pub error: &'static str,
    pub message: String,
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "text-intelligence",
    })
}

/// GET /api/metadata - The `[meta]` table of the app manifest.
pub async fn metadata(State(state): State<AppState>) -> Response {
    match meta::load_metadata(&state.metadata_path).await {
        Ok(table) => Json(table).into_response(),
        Err(e) => {
            error!(path = %state.metadata_path.display(), error = %e, "Error reading metadata");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MetadataError {
                    error: "INTERNAL_SERVER_ERROR",
                    message: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
