//! Deepgram HTTP client for text intelligence.
//!
//! Calls `POST /v1/read` with the features as query parameters and the
//! input as a JSON body, authenticated with `Authorization: Token <key>`.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::TextIntelligenceProvider;
use crate::analysis::model::AnalysisInput;
use crate::analysis::options::AnalysisOptions;
use crate::error::{TextIntelError, TextIntelResult};

/// Default Deepgram API URL.
pub const DEFAULT_DEEPGRAM_URL: &str = "https://api.deepgram.com";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings, loaded once at startup.
#[derive(Clone)]
pub struct DeepgramConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl DeepgramConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_DEEPGRAM_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl fmt::Debug for DeepgramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeepgramConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Deepgram text intelligence client.
#[derive(Clone)]
pub struct DeepgramClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

/// Error body returned by Deepgram on non-2xx responses.
#[derive(Deserialize)]
struct DeepgramErrorBody {
    #[serde(alias = "message")]
    err_msg: Option<String>,
}

impl DeepgramClient {
    pub fn new(config: &DeepgramConfig) -> TextIntelResult<Self> {
        if config.api_key.trim().is_empty() {
            return Err(TextIntelError::config("Deepgram API key is empty"));
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TextIntelError::config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            client,
        })
    }

    fn read_url(&self) -> String {
        format!("{}/v1/read", self.base_url)
    }
}

#[async_trait]
impl TextIntelligenceProvider for DeepgramClient {
    async fn analyze(&self, input: &AnalysisInput, options: &AnalysisOptions) -> TextIntelResult<Value> {
        let response = self
            .client
            .post(self.read_url())
            .header(reqwest::header::AUTHORIZATION, format!("Token {}", self.api_key))
            .query(&options.query_pairs())
            .json(input)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<DeepgramErrorBody>(&body)
                .ok()
                .and_then(|b| b.err_msg)
                .unwrap_or(body);
            warn!(status = status.as_u16(), %message, "Deepgram rejected request");
            return Err(TextIntelError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let value: Value = response
            .json()
            .await
            .map_err(|e| TextIntelError::MalformedResponse(e.to_string()))?;

        debug!(status = status.as_u16(), "Deepgram responded");
        Ok(value)
    }
}
