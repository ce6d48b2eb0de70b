//! Google translate adapter

use async_trait::async_trait;
use tracing::warn;

use crate::application::ports::Translator;
use crate::domain::language::LangTag;

/// Unofficial Google translate endpoint (same one the gtx web client uses)
const API_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Google translate adapter.
///
/// The source language is auto-detected by the engine. Every failure mode
/// (transport, HTTP status, response shape) collapses to `None`.
pub struct GoogleTranslator {
    endpoint: String,
    client: reqwest::Client,
}

impl GoogleTranslator {
    pub fn new() -> Self {
        Self::with_endpoint(API_ENDPOINT)
    }

    /// Create a translator against a custom endpoint (used in tests)
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Join the translated segments from the gtx response shape:
    /// `[[["hello","salom",...],["!","!",...]], ...]`
    fn extract_translation(value: &serde_json::Value) -> Option<String> {
        let segments = value.get(0)?.as_array()?;
        let joined: String = segments
            .iter()
            .filter_map(|segment| segment.get(0).and_then(|v| v.as_str()))
            .collect();

        let trimmed = joined.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

impl Default for GoogleTranslator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str, target: &LangTag) -> Option<String> {
        let response = match self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target.primary()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "translation request failed");
                return None;
            }
        };

        if !response.status().is_success() {
            warn!(status = %response.status(), "translation service error");
            return None;
        }

        let value: serde_json::Value = match response.json().await {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "translation response unparseable");
                return None;
            }
        };

        Self::extract_translation(&value)
    }
}
