use std::path::PathBuf;

use thiserror::Error;

use crate::domain::{ConfigError, OverflowConfig};

#[derive(Debug, Clone, Error)]
pub enum ConfigSourceError {
    #[error("Config version mismatch: found {found}, expected {expected}")]
    VersionMismatch { found: u32, expected: u32 },
    #[error("Read error: {0}")]
    ReadError(String),
    #[error("Write error: {0}")]
    WriteError(String),
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Invalid value: {0}")]
    Invalid(#[from] ConfigError),
    #[error("IO error: {0}")]
    IoError(String),
}

/// Persistent home of the user's default [`OverflowConfig`].
#[cfg_attr(test, mockall::automock)]
pub trait ConfigSource: Send + Sync {
    /// Missing storage is not an error: it yields the defaults.
    fn load(&self) -> Result<OverflowConfig, ConfigSourceError>;

    fn save(&self, config: &OverflowConfig) -> Result<(), ConfigSourceError>;

    fn storage_path(&self) -> PathBuf;
}
