//! Temporary artifact set for one request

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

/// The three temporary files produced across pipeline stages.
///
/// Owned exclusively by the orchestrator for the duration of one request.
/// All three names are derived deterministically from the request token, so
/// concurrent requests with different tokens never collide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSet {
    raw: PathBuf,
    normalized: PathBuf,
    output: PathBuf,
}

impl ArtifactSet {
    /// Derive artifact paths for a request token inside a base directory.
    pub fn for_token(dir: &Path, token: &str) -> Self {
        Self {
            raw: dir.join(format!("raw-{token}.ogg")),
            normalized: dir.join(format!("norm-{token}.wav")),
            output: dir.join(format!("out-{token}.mp3")),
        }
    }

    /// Downloaded audio, container format unknown
    pub fn raw(&self) -> &Path {
        &self.raw
    }

    /// Decoded 16 kHz mono WAV ready for recognition
    pub fn normalized(&self) -> &Path {
        &self.normalized
    }

    /// Synthesized output audio
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Remove every artifact, each removal independently best-effort.
    ///
    /// Runs on every exit path of the pipeline; a missing file or a
    /// permission error is swallowed and never aborts the remaining removals.
    pub async fn cleanup(&self) {
        for path in [&self.raw, &self.normalized, &self.output] {
            if let Err(e) = fs::remove_file(path).await {
                if e.kind() != std::io::ErrorKind::NotFound {
                    debug!(path = %path.display(), error = %e, "artifact removal failed");
                }
            }
        }
    }
}
