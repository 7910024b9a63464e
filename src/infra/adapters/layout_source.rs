use std::fs;
use std::path::Path;

use crate::app::ports::layout_source::{LayoutSource, LayoutSourceError};
use crate::domain::LayoutSnapshot;

/// Reads layout snapshots from disk, choosing the parser by file extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileLayoutSource;

impl FileLayoutSource {
    pub fn new() -> Self {
        Self
    }
}

impl LayoutSource for FileLayoutSource {
    fn load(&self, path: &Path) -> Result<LayoutSnapshot, LayoutSourceError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        if extension != "json" && extension != "toml" {
            return Err(LayoutSourceError::UnsupportedFormat(
                path.display().to_string(),
            ));
        }

        let content =
            fs::read_to_string(path).map_err(|e| LayoutSourceError::ReadError(e.to_string()))?;

        let snapshot: LayoutSnapshot = if extension == "json" {
            serde_json::from_str(&content)
                .map_err(|e| LayoutSourceError::InvalidFormat(e.to_string()))?
        } else {
            toml::from_str(&content).map_err(|e| LayoutSourceError::InvalidFormat(e.to_string()))?
        };

        tracing::debug!(
            path = %path.display(),
            items = snapshot.items.len(),
            has_container = snapshot.container.is_some(),
            "loaded layout snapshot"
        );
        Ok(snapshot)
    }
}
