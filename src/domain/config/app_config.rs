//! Application configuration value object

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::config::SynthBackend;
use crate::domain::language::{LangTag, LanguagePair};

/// Relay configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelayConfig {
    pub bot_token: Option<String>,
    pub operator_id: Option<String>,
    pub synth_backend: Option<String>,
    pub elevenlabs_api_key: Option<String>,
    pub elevenlabs_voice_id: Option<String>,
    pub source_lang: Option<String>,
    pub target_lang: Option<String>,
    pub work_dir: Option<String>,
}

impl RelayConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            bot_token: None,
            operator_id: None,
            synth_backend: Some("gtts".to_string()),
            elevenlabs_api_key: None,
            elevenlabs_voice_id: None,
            source_lang: Some("uz-UZ".to_string()),
            target_lang: Some("en".to_string()),
            work_dir: None,
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            bot_token: other.bot_token.or(self.bot_token),
            operator_id: other.operator_id.or(self.operator_id),
            synth_backend: other.synth_backend.or(self.synth_backend),
            elevenlabs_api_key: other.elevenlabs_api_key.or(self.elevenlabs_api_key),
            elevenlabs_voice_id: other.elevenlabs_voice_id.or(self.elevenlabs_voice_id),
            source_lang: other.source_lang.or(self.source_lang),
            target_lang: other.target_lang.or(self.target_lang),
            work_dir: other.work_dir.or(self.work_dir),
        }
    }

    /// Get backend as parsed SynthBackend, or gtts if not set/invalid
    pub fn synth_backend_or_default(&self) -> SynthBackend {
        self.synth_backend
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get the language pair, falling back to uz-UZ → en
    pub fn language_pair(&self) -> LanguagePair {
        let defaults = LanguagePair::default();
        LanguagePair::new(
            self.source_lang
                .as_deref()
                .map(LangTag::new)
                .unwrap_or(defaults.source),
            self.target_lang
                .as_deref()
                .map(LangTag::new)
                .unwrap_or(defaults.target),
        )
    }

    /// Get the artifact directory, or the system temp dir if not set
    pub fn work_dir_or_default(&self) -> PathBuf {
        self.work_dir
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(std::env::temp_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = RelayConfig::defaults();
        assert!(config.bot_token.is_none());
        assert!(config.operator_id.is_none());
        assert_eq!(config.synth_backend, Some("gtts".to_string()));
        assert_eq!(config.source_lang, Some("uz-UZ".to_string()));
        assert_eq!(config.target_lang, Some("en".to_string()));
    }

    #[test]
    fn empty_has_all_none() {
        let config = RelayConfig::empty();
        assert!(config.bot_token.is_none());
        assert!(config.operator_id.is_none());
        assert!(config.synth_backend.is_none());
        assert!(config.work_dir.is_none());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = RelayConfig {
            bot_token: Some("base_token".to_string()),
            operator_id: Some("1".to_string()),
            synth_backend: Some("gtts".to_string()),
            ..Default::default()
        };

        let other = RelayConfig {
            bot_token: Some("other_token".to_string()),
            operator_id: None, // Should not override
            synth_backend: Some("elevenlabs".to_string()),
            ..Default::default()
        };

        let merged = base.merge(other);

        assert_eq!(merged.bot_token, Some("other_token".to_string()));
        assert_eq!(merged.operator_id, Some("1".to_string())); // Kept from base
        assert_eq!(merged.synth_backend_or_default(), SynthBackend::ElevenLabs);
    }

    #[test]
    fn merge_preserves_base_when_other_is_none() {
        let base = RelayConfig {
            elevenlabs_api_key: Some("key".to_string()),
            target_lang: Some("de".to_string()),
            ..Default::default()
        };

        let merged = base.merge(RelayConfig::empty());

        assert_eq!(merged.elevenlabs_api_key, Some("key".to_string()));
        assert_eq!(merged.target_lang, Some("de".to_string()));
    }

    #[test]
    fn synth_backend_or_default_parses() {
        let config = RelayConfig {
            synth_backend: Some("elevenlabs".to_string()),
            ..Default::default()
        };
        assert_eq!(config.synth_backend_or_default(), SynthBackend::ElevenLabs);
    }

    #[test]
    fn synth_backend_or_default_uses_default_on_invalid() {
        let config = RelayConfig {
            synth_backend: Some("invalid".to_string()),
            ..Default::default()
        };
        assert_eq!(config.synth_backend_or_default(), SynthBackend::Gtts);
    }

    #[test]
    fn language_pair_falls_back_to_defaults() {
        let config = RelayConfig::empty();
        let pair = config.language_pair();
        assert_eq!(pair.source.as_str(), "uz-UZ");
        assert_eq!(pair.target.as_str(), "en");
    }

    #[test]
    fn language_pair_uses_configured_tags() {
        let config = RelayConfig {
            source_lang: Some("ru-RU".to_string()),
            target_lang: Some("fr".to_string()),
            ..Default::default()
        };
        let pair = config.language_pair();
        assert_eq!(pair.source.as_str(), "ru-RU");
        assert_eq!(pair.target.as_str(), "fr");
    }

    #[test]
    fn work_dir_or_default_uses_configured_path() {
        let config = RelayConfig {
            work_dir: Some("/var/tmp/relay".to_string()),
            ..Default::default()
        };
        assert_eq!(config.work_dir_or_default(), PathBuf::from("/var/tmp/relay"));
    }
}
