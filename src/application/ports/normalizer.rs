//! Format normalizer port interface

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

/// Normalization errors
#[derive(Debug, Clone, Error)]
pub enum NormalizeError {
    #[error("ffmpeg not found. Please install ffmpeg.")]
    FfmpegNotFound,

    #[error("Failed to start decoder: {0}")]
    StartFailed(String),

    #[error("Failed to decode audio: {0}")]
    DecodeFailed(String),
}

/// Port for audio format normalization.
///
/// Decodes an audio container of unspecified sub-format into a canonical
/// uncompressed form suitable for speech recognition. A decode failure is a
/// fatal pipeline error, not a soft failure.
#[async_trait]
pub trait AudioNormalizer: Send + Sync {
    /// Decode `input` into a 16 kHz mono PCM WAV at `output`.
    async fn normalize(&self, input: &Path, output: &Path) -> Result<(), NormalizeError>;
}
