//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with external systems like the Telegram Bot API,
//! FFmpeg, and the remote speech engines.

pub mod audio;
pub mod config;
pub mod recognition;
pub mod synthesis;
pub mod telegram;
pub mod translation;

// Re-export adapters
pub use audio::FfmpegNormalizer;
pub use config::XdgConfigStore;
pub use recognition::GoogleSpeechRecognizer;
pub use synthesis::{create_synthesizer, ElevenLabsSynthesizer, GttsSynthesizer};
pub use telegram::TelegramClient;
pub use translation::GoogleTranslator;
