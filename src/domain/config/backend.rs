//! Synthesis backend selection

use std::fmt;
use std::str::FromStr;

/// Which speech-synthesis backend to use.
///
/// Both backends satisfy the same `SpeechSynthesizer` port; the choice is
/// made once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SynthBackend {
    /// Free Google Translate TTS, fixed default voice
    #[default]
    Gtts,
    /// Paid ElevenLabs API, configurable voice
    ElevenLabs,
}

impl fmt::Display for SynthBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SynthBackend::Gtts => write!(f, "gtts"),
            SynthBackend::ElevenLabs => write!(f, "elevenlabs"),
        }
    }
}

/// Error type for parsing a synthesis backend name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBackendError {
    pub value: String,
}

impl fmt::Display for ParseBackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid synthesis backend '{}'. Valid options: gtts, elevenlabs",
            self.value
        )
    }
}

impl std::error::Error for ParseBackendError {}

impl FromStr for SynthBackend {
    type Err = ParseBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gtts" => Ok(SynthBackend::Gtts),
            "elevenlabs" => Ok(SynthBackend::ElevenLabs),
            _ => Err(ParseBackendError {
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_display() {
        assert_eq!(SynthBackend::Gtts.to_string(), "gtts");
        assert_eq!(SynthBackend::ElevenLabs.to_string(), "elevenlabs");
    }

    #[test]
    fn backend_from_str() {
        assert_eq!("gtts".parse::<SynthBackend>().unwrap(), SynthBackend::Gtts);
        assert_eq!(
            "ElevenLabs".parse::<SynthBackend>().unwrap(),
            SynthBackend::ElevenLabs
        );
    }

    #[test]
    fn backend_from_str_invalid() {
        let err = "polly".parse::<SynthBackend>().unwrap_err();
        assert_eq!(err.value, "polly");
    }

    #[test]
    fn backend_default_is_gtts() {
        assert_eq!(SynthBackend::default(), SynthBackend::Gtts);
    }
}
