//! Configuration value objects

pub mod app_config;
pub mod backend;

pub use app_config::RelayConfig;
pub use backend::{ParseBackendError, SynthBackend};
