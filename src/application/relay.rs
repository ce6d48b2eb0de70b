//! Voice translation pipeline orchestrator

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tracing::warn;

use crate::domain::artifacts::ArtifactSet;
use crate::domain::language::LanguagePair;
use crate::domain::request::VoiceRequest;

use super::ports::{
    AudioNormalizer, MessageRef, Messenger, NormalizeError, RecognitionOutcome, SpeechRecognizer,
    SpeechSynthesizer, TransportError, Translator,
};

/// Status and terminal message texts shown on the single status handle
pub mod status {
    pub const RECEIVED: &str = "⏳ Audio received. Processing started...";
    pub const LISTENING: &str = "⏳ Listening...";
    pub const UNINTELLIGIBLE: &str = "❌ Could not understand the audio.";
    pub const TRANSLATION_FAILED: &str = "❌ Translation failed.";
    pub const SYNTHESIS_FAILED: &str =
        "❌ Voice synthesis failed (provider error or quota exhausted).";

    pub fn translating(transcript: &str) -> String {
        format!("📝 {transcript}\n\n⏳ Translating...")
    }

    pub fn synthesizing(translation: &str) -> String {
        format!("🌐 {translation}\n\n🎙 Synthesizing voice...")
    }

    pub fn pipeline_error(detail: &str) -> String {
        format!("❌ Something went wrong: {detail}")
    }
}

/// Unexpected errors caught by the umbrella handler
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("{0}")]
    Transport(#[from] TransportError),

    #[error("{0}")]
    Normalize(#[from] NormalizeError),
}

/// How one request terminated.
///
/// Soft halts carry no error; the terminal text has already been written to
/// the status handle by the time this is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    /// Audio reply sent, status message deleted
    Delivered,
    /// Nothing intelligible in the recording
    NoSpeech,
    /// Translation engine returned no result
    TranslationFailed,
    /// Synthesis backend reported failure
    SynthesisFailed,
    /// Umbrella-caught error, status message shows the detail
    Failed(String),
}

/// Sequences the pipeline stages for one voice request.
///
/// Stages run strictly forward with no retries; a single status message is
/// edited in place as the pipeline advances. The artifact set is cleaned up
/// unconditionally on every exit path.
pub struct VoiceRelay<M, N, R, T, S>
where
    M: Messenger,
    N: AudioNormalizer,
    R: SpeechRecognizer,
    T: Translator,
    S: SpeechSynthesizer,
{
    transport: Arc<M>,
    normalizer: N,
    recognizer: R,
    translator: T,
    synthesizer: S,
    languages: LanguagePair,
    work_dir: PathBuf,
}

impl<M, N, R, T, S> VoiceRelay<M, N, R, T, S>
where
    M: Messenger,
    N: AudioNormalizer,
    R: SpeechRecognizer,
    T: Translator,
    S: SpeechSynthesizer,
{
    /// Create a new relay instance
    pub fn new(
        transport: Arc<M>,
        normalizer: N,
        recognizer: R,
        translator: T,
        synthesizer: S,
        languages: LanguagePair,
        work_dir: PathBuf,
    ) -> Self {
        Self {
            transport,
            normalizer,
            recognizer,
            translator,
            synthesizer,
            languages,
            work_dir,
        }
    }

    /// Run the full pipeline for one inbound voice request.
    ///
    /// Never returns an error: unexpected failures are reported on the
    /// status message and folded into `RelayOutcome::Failed`.
    pub async fn handle_voice(&self, request: &VoiceRequest) -> RelayOutcome {
        let artifacts = ArtifactSet::for_token(&self.work_dir, &request.token());

        let outcome = self.run(request, &artifacts).await;

        // Unconditional: success, soft halt, or umbrella-caught error
        artifacts.cleanup().await;

        match outcome {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(error = %e, "pipeline failed");
                RelayOutcome::Failed(e.to_string())
            }
        }
    }

    async fn run(
        &self,
        request: &VoiceRequest,
        artifacts: &ArtifactSet,
    ) -> Result<RelayOutcome, RelayError> {
        let handle = self
            .transport
            .send_text(request.chat_id, status::RECEIVED)
            .await?;

        match self.run_stages(request, &handle, artifacts).await {
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                // Umbrella handler: rewrite the status with the error text
                // and halt. The edit itself is best-effort.
                let _ = self
                    .transport
                    .edit_text(&handle, &status::pipeline_error(&e.to_string()))
                    .await;
                Err(e)
            }
        }
    }

    async fn run_stages(
        &self,
        request: &VoiceRequest,
        handle: &MessageRef,
        artifacts: &ArtifactSet,
    ) -> Result<RelayOutcome, RelayError> {
        self.transport
            .download(&request.attachment, artifacts.raw())
            .await?;

        self.normalizer
            .normalize(artifacts.raw(), artifacts.normalized())
            .await?;

        self.transport.edit_text(handle, status::LISTENING).await?;

        let transcript = match self
            .recognizer
            .transcribe(artifacts.normalized(), &self.languages.source)
            .await
        {
            RecognitionOutcome::Transcript(text) => text,
            RecognitionOutcome::NoMatch => {
                self.transport
                    .edit_text(handle, status::UNINTELLIGIBLE)
                    .await?;
                return Ok(RelayOutcome::NoSpeech);
            }
            RecognitionOutcome::ServiceError(detail) => {
                // Collapsed to the same terminal text as NoMatch
                warn!(error = %detail, "recognition service error");
                self.transport
                    .edit_text(handle, status::UNINTELLIGIBLE)
                    .await?;
                return Ok(RelayOutcome::NoSpeech);
            }
        };

        self.transport
            .edit_text(handle, &status::translating(&transcript))
            .await?;

        let translation = match self
            .translator
            .translate(&transcript, &self.languages.target)
            .await
        {
            Some(text) => text,
            None => {
                self.transport
                    .edit_text(handle, status::TRANSLATION_FAILED)
                    .await?;
                return Ok(RelayOutcome::TranslationFailed);
            }
        };

        self.transport
            .edit_text(handle, &status::synthesizing(&translation))
            .await?;

        if let Err(e) = self
            .synthesizer
            .synthesize(&translation, artifacts.output())
            .await
        {
            warn!(error = %e, backend = self.synthesizer.label(), "synthesis failed");
            self.transport
                .edit_text(handle, status::SYNTHESIS_FAILED)
                .await?;
            return Ok(RelayOutcome::SynthesisFailed);
        }

        let caption = self.languages.caption(&transcript, &translation);
        let title = format!("{} Translation", self.languages.target.label());
        self.transport
            .send_audio(
                request.chat_id,
                artifacts.output(),
                &caption,
                Some(self.synthesizer.label()),
                Some(&title),
            )
            .await?;

        self.transport.delete_message(handle).await?;
        Ok(RelayOutcome::Delivered)
    }
}
