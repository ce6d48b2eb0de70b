//! Speech recognizer port interface

use std::path::Path;

use async_trait::async_trait;

use crate::domain::language::LangTag;

/// Tagged outcome of one recognition attempt.
///
/// `NoMatch` (nothing intelligible) and `ServiceError` (engine unreachable
/// or erroring) are both soft outcomes; neither is raised as an error. The
/// orchestrator treats both as "no transcript produced", the distinction is
/// only logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionOutcome {
    /// Recognized text in the source language
    Transcript(String),
    /// No speech understood in the audio
    NoMatch,
    /// Recognition service unreachable or erroring
    ServiceError(String),
}

/// Port for speech-to-text recognition
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    /// Recognize speech in a normalized WAV file.
    ///
    /// Implementations may measure ambient noise in the input stream to tune
    /// recognition, but any clip with audible energy must reach the engine;
    /// only near-silence may short-circuit to `NoMatch`.
    async fn transcribe(&self, audio: &Path, language: &LangTag) -> RecognitionOutcome;
}
