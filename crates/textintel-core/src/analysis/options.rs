//! Feature selection, from inbound query parameters to provider parameters.

use super::model::Feature;
use crate::error::{TextIntelError, TextIntelResult};

pub const DEFAULT_LANGUAGE: &str = "en";

/// Query string accepted by the analyze endpoint.
#[derive(Debug, Clone, Default)]
pub struct AnalysisQuery {
    pub summarize: Option<String>,
    pub topics: Option<String>,
    pub sentiment: Option<String>,
    pub intents: Option<String>,
    pub language: Option<String>,
}

impl AnalysisQuery {
    /// Build from raw query pairs. When a key repeats, its first value wins.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "summarize" => &mut query.summarize,
                "topics" => &mut query.topics,
                "sentiment" => &mut query.sentiment,
                "intents" => &mut query.intents,
                "language" => &mut query.language,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        query
    }
}

/// Summarization mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Summarize {
    #[default]
    Off,
    On,
    V2,
}

impl Summarize {
    fn as_param(&self) -> Option<&'static str> {
        match self {
            Self::Off => None,
            Self::On => Some("true"),
            Self::V2 => Some("v2"),
        }
    }
}

/// Provider feature selectors for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOptions {
    pub summarize: Summarize,
    pub topics: bool,
    pub sentiment: bool,
    pub intents: bool,
    pub language: String,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            summarize: Summarize::Off,
            topics: false,
            sentiment: false,
            intents: false,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl AnalysisOptions {
    /// Translate the inbound query. Only the literal `true` switches a
    /// boolean feature on; unknown summarize values leave it off.
    pub fn from_query(query: &AnalysisQuery) -> TextIntelResult<Self> {
        let summarize = match query.summarize.as_deref() {
            Some("true") => Summarize::On,
            Some("v2") => Summarize::V2,
            Some("v1") => {
                return Err(TextIntelError::invalid_text(
                    "Summarization v1 is no longer supported. Please use v2 or true.",
                ))
            }
            _ => Summarize::Off,
        };

        Ok(Self {
            summarize,
            topics: is_true(&query.topics),
            sentiment: is_true(&query.sentiment),
            intents: is_true(&query.intents),
            language: query
                .language
                .clone()
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
        })
    }

    pub fn requested_features(&self) -> Vec<Feature> {
        let mut features = Vec::with_capacity(4);
        if self.summarize != Summarize::Off {
            features.push(Feature::Summarize);
        }
        if self.topics {
            features.push(Feature::Topics);
        }
        if self.sentiment {
            features.push(Feature::Sentiment);
        }
        if self.intents {
            features.push(Feature::Intents);
        }
        features
    }

    /// Query parameters for the provider call. Disabled features are omitted.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("language", self.language.clone())];
        if let Some(mode) = self.summarize.as_param() {
            pairs.push(("summarize", mode.to_string()));
        }
        if self.topics {
            pairs.push(("topics", "true".to_string()));
        }
        if self.sentiment {
            pairs.push(("sentiment", "true".to_string()));
        }
        if self.intents {
            pairs.push(("intents", "true".to_string()));
        }
        pairs
    }
}

fn is_true(value: &Option<String>) -> bool {
    value.as_deref() == Some("true")
}
