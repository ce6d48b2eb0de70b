//! ElevenLabs synthesizer adapter (Backend B)

use std::path::Path;

use async_trait::async_trait;
use serde::Serialize;

use crate::application::ports::{SpeechSynthesizer, SynthesisError};

/// ElevenLabs text-to-speech base URL
const API_BASE_URL: &str = "https://api.elevenlabs.io/v1/text-to-speech";

/// Built-in default voice ("Rachel")
const DEFAULT_VOICE_ID: &str = "21m00Tcm4TlvDq8ikWAM";

/// Model used for non-English targets
const DEFAULT_MODEL_ID: &str = "eleven_multilingual_v2";

// Request types for the ElevenLabs API

#[derive(Debug, Serialize)]
struct SynthesisRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

#[derive(Debug, Serialize)]
struct VoiceSettings {
    stability: f32,
    similarity_boost: f32,
}

/// Paid synthesizer over the ElevenLabs HTTPS API.
pub struct ElevenLabsSynthesizer {
    api_key: String,
    voice_id: String,
    base_url: String,
    client: reqwest::Client,
}

impl ElevenLabsSynthesizer {
    /// Create a synthesizer using the built-in default voice
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_voice(api_key, DEFAULT_VOICE_ID)
    }

    /// Create a synthesizer with a custom voice identifier
    pub fn with_voice(api_key: impl Into<String>, voice_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            voice_id: voice_id.into(),
            base_url: API_BASE_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Point the synthesizer at a custom base URL (used in tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn api_url(&self) -> String {
        format!("{}/{}", self.base_url, self.voice_id)
    }

    fn build_request<'a>(&self, text: &'a str) -> SynthesisRequest<'a> {
        SynthesisRequest {
            text,
            model_id: DEFAULT_MODEL_ID,
            voice_settings: VoiceSettings {
                stability: 0.5,
                similarity_boost: 0.75,
            },
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for ElevenLabsSynthesizer {
    async fn synthesize(&self, text: &str, output: &Path) -> Result<(), SynthesisError> {
        let body = self.build_request(text);

        let response = self
            .client
            .post(self.api_url())
            .header("xi-api-key", &self.api_key)
            .header(reqwest::header::ACCEPT, "audio/mpeg")
            .json(&body)
            .send()
            .await
            .map_err(|e| SynthesisError::RequestFailed(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(SynthesisError::InvalidApiKey);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(SynthesisError::QuotaExhausted);
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SynthesisError::ProviderError(format!(
                "HTTP {}: {}",
                status, error_text
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
        "ElevenLabs"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_contains_voice_id() {
        let synthesizer = ElevenLabsSynthesizer::with_voice("key", "voice-x");
        assert_eq!(
            synthesizer.api_url(),
            "https://api.elevenlabs.io/v1/text-to-speech/voice-x"
        );
    }

    #[test]
    fn default_voice_is_used_when_unconfigured() {
        let synthesizer = ElevenLabsSynthesizer::new("key");
        assert!(synthesizer.api_url().ends_with(DEFAULT_VOICE_ID));
    }

    #[test]
    fn build_request_has_expected_shape() {
        let synthesizer = ElevenLabsSynthesizer::new("key");
        let request = synthesizer.build_request("hello");

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["text"], "hello");
        assert_eq!(value["model_id"], DEFAULT_MODEL_ID);
        assert_eq!(value["voice_settings"]["stability"], 0.5);
        assert_eq!(value["voice_settings"]["similarity_boost"], 0.75);
    }

    #[test]
    fn label_names_the_engine() {
        assert_eq!(ElevenLabsSynthesizer::new("key").label(), "ElevenLabs");
    }
}
