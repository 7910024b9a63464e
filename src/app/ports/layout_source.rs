use std::path::Path;

use thiserror::Error;

use crate::domain::LayoutSnapshot;

#[derive(Debug, Clone, Error)]
pub enum LayoutSourceError {
    #[error("Read error: {0}")]
    ReadError(String),
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Unsupported layout file extension: {0}")]
    UnsupportedFormat(String),
}

#[cfg_attr(test, mockall::automock)]
pub trait LayoutSource: Send + Sync {
    fn load(&self, path: &Path) -> Result<LayoutSnapshot, LayoutSourceError>;
}
