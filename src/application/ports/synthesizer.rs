//! Speech synthesizer port interface

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

/// Synthesis errors
#[derive(Debug, Clone, Error)]
pub enum SynthesisError {
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Quota exhausted. Please try again later.")]
    QuotaExhausted,

    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Empty audio response")]
    EmptyResponse,

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to write output audio: {0}")]
    WriteFailed(String),
}

/// Port for text-to-speech synthesis.
///
/// Backends are interchangeable and selected at deployment time. A failure
/// (remote error, quota, non-2xx response) is returned, never raised past
/// this boundary; there is no retry.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize speech for `text`, writing audio bytes to `output`.
    async fn synthesize(&self, text: &str, output: &Path) -> Result<(), SynthesisError>;

    /// Short engine name used as the audio reply's performer label.
    fn label(&self) -> &str;
}

#[async_trait]
impl SpeechSynthesizer for Box<dyn SpeechSynthesizer> {
    async fn synthesize(&self, text: &str, output: &Path) -> Result<(), SynthesisError> {
        (**self).synthesize(text, output).await
    }

    fn label(&self) -> &str {
        (**self).label()
    }
}
