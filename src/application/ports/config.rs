//! Config store port interface

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::config::RelayConfig;
use crate::domain::error::ConfigError;

/// Port for configuration persistence
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load config; an absent file yields an empty config.
    async fn load(&self) -> Result<RelayConfig, ConfigError>;

    /// Save config, creating parent directories as needed.
    async fn save(&self, config: &RelayConfig) -> Result<(), ConfigError>;

    /// Path of the backing file.
    fn path(&self) -> PathBuf;

    /// Whether the backing file exists.
    fn exists(&self) -> bool;
}
