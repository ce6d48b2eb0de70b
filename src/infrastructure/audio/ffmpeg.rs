//! FFmpeg-based format normalizer adapter

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{AudioNormalizer, NormalizeError};

/// Sample rate expected by the speech recognizer
const TARGET_SAMPLE_RATE: &str = "16000";

/// Decodes any audio container FFmpeg understands into 16 kHz mono
/// signed 16-bit PCM WAV.
pub struct FfmpegNormalizer;

impl FfmpegNormalizer {
    pub fn new() -> Self {
        Self
    }

    fn build_args(input: &Path, output: &Path) -> Vec<String> {
        vec![
            "-i".to_string(),
            input.to_string_lossy().to_string(),
            "-ar".to_string(),
            TARGET_SAMPLE_RATE.to_string(),
            "-ac".to_string(),
            "1".to_string(), // Mono
            "-c:a".to_string(),
            "pcm_s16le".to_string(),
            "-y".to_string(), // Overwrite output
            output.to_string_lossy().to_string(),
        ]
    }
}

impl Default for FfmpegNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AudioNormalizer for FfmpegNormalizer {
    async fn normalize(&self, input: &Path, output: &Path) -> Result<(), NormalizeError> {
        let child = Command::new("ffmpeg")
            .args(Self::build_args(input, output))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    NormalizeError::FfmpegNotFound
                } else {
                    NormalizeError::StartFailed(e.to_string())
                }
            })?;

        let output_result = child
            .wait_with_output()
            .await
            .map_err(|e| NormalizeError::DecodeFailed(e.to_string()))?;

        if !output_result.status.success() {
            let stderr = String::from_utf8_lossy(&output_result.stderr);
            return Err(NormalizeError::DecodeFailed(
                stderr
                    .lines()
                    .last()
                    .unwrap_or("ffmpeg exited with non-zero status")
                    .to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_request_recognition_format() {
        let args = FfmpegNormalizer::build_args(Path::new("/tmp/in.ogg"), Path::new("/tmp/out.wav"));
        let joined = args.join(" ");
        assert!(joined.contains("-ar 16000"));
        assert!(joined.contains("-ac 1"));
        assert!(joined.contains("pcm_s16le"));
        assert!(joined.ends_with("/tmp/out.wav"));
    }

    #[test]
    fn args_overwrite_existing_output() {
        let args = FfmpegNormalizer::build_args(Path::new("in.ogg"), Path::new("out.wav"));
        assert!(args.contains(&"-y".to_string()));
    }
}
