//! Analysis domain models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::options::AnalysisOptions;
use crate::error::{TextIntelError, TextIntelResult};

/// Raw request body as posted by the frontend.
///
/// Both fields are optional here; [`AnalysisInput::from_body`] turns them
/// into exactly one input.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisBody {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// The content to analyze: inline text or a remote resource.
///
/// Serializes to `{"text": ...}` or `{"url": ...}`, which is the body the
/// provider expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisInput {
    Text(String),
    Url(String),
}

impl AnalysisInput {
    /// Validate a raw body into a single input.
    pub fn from_body(body: AnalysisBody) -> TextIntelResult<Self> {
        let text = body.text.filter(|t| !t.is_empty());
        let url = body.url.filter(|u| !u.is_empty());

        match (text, url) {
            (None, None) => Err(TextIntelError::invalid_text(
                "Request must contain either 'text' or 'url' field",
            )),
            (Some(_), Some(_)) => Err(TextIntelError::invalid_text(
                "Request must contain either 'text' or 'url', not both",
            )),
            (None, Some(url)) => {
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    return Err(TextIntelError::invalid_url("Invalid URL format"));
                }
                Ok(Self::Url(url))
            }
            (Some(text), None) => {
                if text.trim().is_empty() {
                    return Err(TextIntelError::invalid_text("Text content cannot be empty"));
                }
                Ok(Self::Text(text))
            }
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Url(_) => "url",
        }
    }

    /// Size of the submitted value in bytes, for logging.
    pub fn size_bytes(&self) -> usize {
        match self {
            Self::Text(s) | Self::Url(s) => s.len(),
        }
    }
}

/// A validated analysis request.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub input: AnalysisInput,
    pub options: AnalysisOptions,
}

/// An intelligence capability that can be switched on per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Summarize,
    Topics,
    Sentiment,
    Intents,
}

impl Feature {
    /// Key under which the provider reports this feature's output.
    pub fn result_key(&self) -> &'static str {
        match self {
            Self::Summarize => "summary",
            Self::Topics => "topics",
            Self::Sentiment => "sentiments",
            Self::Intents => "intents",
        }
    }
}

/// The results envelope returned to the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub results: Map<String, Value>,
}

impl AnalysisResult {
    /// Build the envelope from a provider response, keeping only the
    /// entries of requested features.
    pub fn from_provider(response: Value, options: &AnalysisOptions) -> TextIntelResult<Self> {
        let mut results = match response {
            Value::Object(mut root) => match root.remove("results") {
                Some(Value::Object(results)) => results,
                Some(Value::Null) | None => Map::new(),
                Some(other) => {
                    return Err(TextIntelError::MalformedResponse(format!(
                        "expected 'results' to be an object, got {}",
                        type_name(&other)
                    )))
                }
            },
            other => {
                return Err(TextIntelError::MalformedResponse(format!(
                    "expected a JSON object, got {}",
                    type_name(&other)
                )))
            }
        };

        let wanted: Vec<&str> = options
            .requested_features()
            .iter()
            .map(Feature::result_key)
            .collect();
        results.retain(|key, _| wanted.contains(&key.as_str()));

        Ok(Self { results })
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.results.keys().map(String::as_str)
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::options::Summarize;
    use crate::error::ErrorCode;
    use serde_json::json;

    fn body(text: Option<&str>, url: Option<&str>) -> AnalysisBody {
        AnalysisBody {
            text: text.map(String::from),
            url: url.map(String::from),
        }
    }

    fn validation_message(result: TextIntelResult<AnalysisInput>) -> (ErrorCode, String) {
        match result {
            Err(TextIntelError::Validation { code, message }) => (code, message),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_text_input() {
        let input = AnalysisInput::from_body(body(Some("Hello world"), None)).unwrap();
        assert_eq!(input, AnalysisInput::Text("Hello world".to_string()));
        assert_eq!(input.kind(), "text");
        assert_eq!(input.size_bytes(), 11);
    }

    #[test]
    fn test_url_input() {
        let input = AnalysisInput::from_body(body(None, Some("https://example.com/a"))).unwrap();
        assert_eq!(input, AnalysisInput::Url("https://example.com/a".to_string()));
    }

    #[test]
    fn test_neither_field() {
        let (code, message) = validation_message(AnalysisInput::from_body(AnalysisBody::default()));
        assert_eq!(code, ErrorCode::InvalidText);
        assert!(message.contains("'text'"));
        assert!(message.contains("'url'"));
    }

    #[test]
    fn test_empty_strings_count_as_missing() {
        let (_, message) = validation_message(AnalysisInput::from_body(body(Some(""), Some(""))));
        assert_eq!(message, "Request must contain either 'text' or 'url' field");

        let input = AnalysisInput::from_body(body(Some(""), Some("http://example.com"))).unwrap();
        assert_eq!(input.kind(), "url");
    }

    #[test]
    fn test_both_fields() {
        let (code, message) =
            validation_message(AnalysisInput::from_body(body(Some("hi"), Some("https://x.io"))));
        assert_eq!(code, ErrorCode::InvalidText);
        assert!(message.contains("not both"));
    }

    #[test]
    fn test_url_scheme_required() {
        let (code, message) =
            validation_message(AnalysisInput::from_body(body(None, Some("ftp://example.com"))));
        assert_eq!(code, ErrorCode::InvalidUrl);
        assert_eq!(message, "Invalid URL format");
    }

    #[test]
    fn test_whitespace_text_rejected() {
        let (code, message) = validation_message(AnalysisInput::from_body(body(Some("  \n\t"), None)));
        assert_eq!(code, ErrorCode::InvalidText);
        assert_eq!(message, "Text content cannot be empty");
    }

    #[test]
    fn test_input_serializes_as_provider_body() {
        let text = serde_json::to_value(AnalysisInput::Text("abc".into())).unwrap();
        assert_eq!(text, json!({"text": "abc"}));
        let url = serde_json::to_value(AnalysisInput::Url("https://a.b".into())).unwrap();
        assert_eq!(url, json!({"url": "https://a.b"}));
    }

    #[test]
    fn test_result_keeps_only_requested_features() {
        let options = AnalysisOptions {
            summarize: Summarize::On,
            sentiment: true,
            ..AnalysisOptions::default()
        };
        let response = json!({
            "metadata": {"request_id": "abc"},
            "results": {
                "summary": {"text": "AI changes things."},
                "sentiments": {"average": {"sentiment": "positive"}},
                "topics": {"segments": []}
            }
        });

        let result = AnalysisResult::from_provider(response, &options).unwrap();
        let mut keys: Vec<&str> = result.keys().collect();
        keys.sort();
        assert_eq!(keys, vec!["sentiments", "summary"]);
    }

    #[test]
    fn test_result_without_results_is_empty() {
        let result =
            AnalysisResult::from_provider(json!({"metadata": {}}), &AnalysisOptions::default())
                .unwrap();
        assert!(result.results.is_empty());
    }

    #[test]
    fn test_result_rejects_non_object() {
        let err = AnalysisResult::from_provider(json!([1, 2]), &AnalysisOptions::default())
            .unwrap_err();
        assert!(matches!(err, TextIntelError::MalformedResponse(_)));
    }
}
