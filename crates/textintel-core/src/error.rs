//! Centralized error types for the text intelligence service.

use serde::Serialize;
use thiserror::Error;

/// Machine-readable error code carried in every error response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidText,
    InvalidUrl,
    TextTooLong,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidText => "INVALID_TEXT",
            Self::InvalidUrl => "INVALID_URL",
            Self::TextTooLong => "TEXT_TOO_LONG",
        }
    }
}

/// Main error type for text intelligence operations.
#[derive(Error, Debug)]
pub enum TextIntelError {
    #[error("{message}")]
    Validation { code: ErrorCode, message: String },

    #[error("Provider rejected request ({status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("Failed to reach text intelligence provider: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for text intelligence operations.
pub type TextIntelResult<T> = Result<T, TextIntelError>;

impl TextIntelError {
    /// Create a validation error about the text input.
    pub fn invalid_text(msg: impl Into<String>) -> Self {
        Self::Validation {
            code: ErrorCode::InvalidText,
            message: msg.into(),
        }
    }

    /// Create a validation error about the url input.
    pub fn invalid_url(msg: impl Into<String>) -> Self {
        Self::Validation {
            code: ErrorCode::InvalidUrl,
            message: msg.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// True when the provider refused the payload itself, as opposed to
    /// refusing the credential, the quota, or failing internally.
    pub fn is_input_rejection(&self) -> bool {
        matches!(self, Self::Upstream { status, .. } if matches!(status, 400 | 413 | 422))
    }

    /// Code to report for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Validation { code, .. } => *code,
            Self::Upstream { status, message } => {
                let lower = message.to_lowercase();
                if *status == 413 || lower.contains("too long") {
                    ErrorCode::TextTooLong
                } else if lower.contains("url") {
                    ErrorCode::InvalidUrl
                } else {
                    ErrorCode::InvalidText
                }
            }
            _ => ErrorCode::InvalidText,
        }
    }
}
