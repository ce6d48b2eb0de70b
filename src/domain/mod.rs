//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod artifacts;
pub mod config;
pub mod error;
pub mod language;
pub mod request;

// Re-export common types
pub use artifacts::ArtifactSet;
pub use config::{RelayConfig, SynthBackend};
pub use error::*;
pub use language::{LangTag, LanguagePair};
pub use request::{AttachmentRef, VoiceRequest};
