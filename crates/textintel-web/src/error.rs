//! JSON error responses.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};
use textintel_core::{ErrorCode, TextIntelError};
use tracing::{error, warn};

/// Message shown to callers when the failure is on our side or the provider's.
pub const PROCESSING_FAILED: &str = "Text processing failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    ValidationError,
    ProcessingError,
}

/// `{"error": {"type", "code", "message", "details"}}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    #[serde(rename = "type")]
    pub kind: ErrorType,
    pub code: ErrorCode,
    pub message: String,
    pub details: Map<String, Value>,
}

/// Error returned by the analyze handler.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub kind: ErrorType,
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn validation(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            kind: ErrorType::ValidationError,
            code,
            message: message.into(),
        }
    }
}

impl From<TextIntelError> for ApiError {
    fn from(err: TextIntelError) -> Self {
        let code = err.code();
        match err {
            TextIntelError::Validation { code, message } => {
                warn!(code = code.as_str(), %message, "Rejected analyze request");
                Self::validation(code, message)
            }
            err if err.is_input_rejection() => {
                warn!(error = %err, "Provider rejected input");
                let message = match err {
                    TextIntelError::Upstream { message, .. } => message,
                    other => other.to_string(),
                };
                Self {
                    status: StatusCode::BAD_REQUEST,
                    kind: ErrorType::ProcessingError,
                    code,
                    message,
                }
            }
            err @ TextIntelError::Config(_) => {
                error!(error = %err, "Text intelligence error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    kind: ErrorType::ProcessingError,
                    code,
                    message: PROCESSING_FAILED.to_string(),
                }
            }
            err => {
                error!(error = %err, "Text intelligence error");
                Self {
                    status: StatusCode::BAD_GATEWAY,
                    kind: ErrorType::ProcessingError,
                    code,
                    message: PROCESSING_FAILED.to_string(),
                }
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(reason = %rejection.body_text(), "Analyze body rejected");
        match rejection {
            JsonRejection::JsonDataError(_) => {
                Self::validation(ErrorCode::InvalidText, "'text' and 'url' must be strings")
            }
            JsonRejection::BytesRejection(ref inner)
                if inner.status() == StatusCode::PAYLOAD_TOO_LARGE =>
            {
                Self::validation(ErrorCode::TextTooLong, "Text is too long")
            }
            _ => Self::validation(ErrorCode::InvalidText, "Request body must be JSON"),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        warn!(reason = %rejection.body_text(), "Analyze query string rejected");
        Self::validation(ErrorCode::InvalidText, "Invalid query parameters")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorDetail {
                kind: self.kind,
                code: self.code,
                message: self.message,
                details: Map::new(),
            },
        };
        (self.status, Json(body)).into_response()
    }
}
