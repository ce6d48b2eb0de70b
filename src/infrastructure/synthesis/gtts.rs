//! Google Translate TTS synthesizer adapter (Backend A)

use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{SpeechSynthesizer, SynthesisError};
use crate::domain::language::LangTag;

/// Google Translate TTS endpoint (free, single default voice)
const API_ENDPOINT: &str = "https://translate.google.com/translate_tts";

/// Free default-voice synthesizer over the Google Translate TTS endpoint.
pub struct GttsSynthesizer {
    endpoint: String,
    language: LangTag,
    client: reqwest::Client,
}

impl GttsSynthesizer {
    /// Create a synthesizer speaking the given language
    pub fn new(language: LangTag) -> Self {
        Self::with_endpoint(API_ENDPOINT, language)
    }

    /// Create a synthesizer against a custom endpoint (used in tests)
    pub fn with_endpoint(endpoint: impl Into<String>, language: LangTag) -> Self {
        Self {
            endpoint: endpoint.into(),
            language,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for GttsSynthesizer {
    async fn synthesize(&self, text: &str, output: &Path) -> Result<(), SynthesisError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", self.language.primary()),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| SynthesisError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SynthesisError::ProviderError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SynthesisError::RequestFailed(e.to_string()))?;

        if bytes.is_empty() {
            return Err(SynthesisError::EmptyResponse);
        }

        tokio::fs::write(output, &bytes)
            .await
            .map_err(|e| SynthesisError::WriteFailed(e.to_string()))
    }

    fn label(&self) -> &str {
        "gTTS"
    }
}
