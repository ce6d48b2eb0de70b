//! Speech synthesis adapters and backend selection

pub mod elevenlabs;
pub mod gtts;

pub use elevenlabs::ElevenLabsSynthesizer;
pub use gtts::GttsSynthesizer;

use crate::application::ports::SpeechSynthesizer;
use crate::domain::config::{RelayConfig, SynthBackend};
use crate::domain::error::ConfigError;

/// Create the configured synthesis backend.
///
/// Both backends satisfy the same port, so the orchestrator never knows
/// which one is running.
pub fn create_synthesizer(
    config: &RelayConfig,
) -> Result<Box<dyn SpeechSynthesizer>, ConfigError> {
    match config.synth_backend_or_default() {
        SynthBackend::Gtts => Ok(Box::new(GttsSynthesizer::new(
            config.language_pair().target,
        ))),
        SynthBackend::ElevenLabs => {
            let api_key = config
                .elevenlabs_api_key
                .clone()
                .filter(|key| !key.is_empty())
                .ok_or_else(|| ConfigError::ValidationError {
                    key: "elevenlabs_api_key".to_string(),
                    message: "required when synth_backend is 'elevenlabs'".to_string(),
                })?;

            Ok(match config.elevenlabs_voice_id.clone() {
                Some(voice_id) => Box::new(ElevenLabsSynthesizer::with_voice(api_key, voice_id)),
                None => Box::new(ElevenLabsSynthesizer::new(api_key)),
            })
        }
    }
}
