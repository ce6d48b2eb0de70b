//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod normalizer;
pub mod recognizer;
pub mod synthesizer;
pub mod translator;
pub mod transport;

// Re-export common types
pub use config::ConfigStore;
pub use normalizer::{AudioNormalizer, NormalizeError};
pub use recognizer::{RecognitionOutcome, SpeechRecognizer};
pub use synthesizer::{SpeechSynthesizer, SynthesisError};
pub use translator::Translator;
pub use transport::{MessageRef, Messenger, TransportError};
