use serde::{Deserialize, Serialize};

use crate::domain::OverflowConfig;

pub const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
pub struct OverflowConfigFile {
    pub version: u32,
    #[serde(default)]
    pub overflow: OverflowConfig,
}

impl OverflowConfigFile {
    pub fn from_config(config: &OverflowConfig) -> Self {
        Self {
            version: CURRENT_VERSION,
            overflow: *config,
        }
    }

    pub fn to_config(&self) -> OverflowConfig {
        self.overflow
    }
}
