//! Application layer - Use cases and port interfaces
//!
//! Contains the pipeline orchestrator, the access gate, and trait
//! definitions for external system interactions.

pub mod access;
pub mod ports;
pub mod relay;

// Re-export use cases
pub use access::AccessGate;
pub use relay::{RelayError, RelayOutcome, VoiceRelay};
