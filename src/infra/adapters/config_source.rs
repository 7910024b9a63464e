use std::fs;
use std::path::PathBuf;

use crate::app::ports::config_source::{ConfigSource, ConfigSourceError};
use crate::domain::OverflowConfig;
use crate::infra::config::overflow_config_file::{CURRENT_VERSION, OverflowConfigFile};

const CONFIG_FILE_NAME: &str = "overflow.toml";
const APP_DIR_NAME: &str = "wsx-overflow";

pub struct TomlConfigSource {
    config_dir: PathBuf,
}

impl TomlConfigSource {
    pub fn new() -> Result<Self, ConfigSourceError> {
        let config_dir = get_config_dir()?;
        Ok(Self { config_dir })
    }

    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    fn config_file_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }
}

impl ConfigSource for TomlConfigSource {
    fn load(&self) -> Result<OverflowConfig, ConfigSourceError> {
        let path = self.config_file_path();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(OverflowConfig::default());
        }

        let content =
            fs::read_to_string(&path).map_err(|e| ConfigSourceError::ReadError(e.to_string()))?;

        let file: OverflowConfigFile = toml::from_str(&content)
            .map_err(|e| ConfigSourceError::InvalidFormat(e.to_string()))?;

        if file.version != CURRENT_VERSION {
            return Err(ConfigSourceError::VersionMismatch {
                found: file.version,
                expected: CURRENT_VERSION,
            });
        }

        let config = file.to_config();
        config.validate()?;
        tracing::debug!(path = %path.display(), ?config, "loaded overflow config");
        Ok(config)
    }

    fn save(&self, config: &OverflowConfig) -> Result<(), ConfigSourceError> {
        config.validate()?;

        if !self.config_dir.exists() {
            fs::create_dir_all(&self.config_dir)
                .map_err(|e| ConfigSourceError::IoError(e.to_string()))?;
        }

        let file = OverflowConfigFile::from_config(config);
        let content = toml::to_string_pretty(&file)
            .map_err(|e| ConfigSourceError::WriteError(e.to_string()))?;

        let content_with_header = format!("# wsx-overflow defaults\n\n{}", content);

        let path = self.config_file_path();
        fs::write(&path, content_with_header)
            .map_err(|e| ConfigSourceError::WriteError(e.to_string()))?;

        tracing::info!(path = %path.display(), "saved overflow config");
        Ok(())
    }

    fn storage_path(&self) -> PathBuf {
        self.config_file_path()
    }
}

fn get_config_dir() -> Result<PathBuf, ConfigSourceError> {
    let config_base = dirs::config_dir()
        .ok_or_else(|| ConfigSourceError::IoError("Could not find config directory".into()))?;
    Ok(config_base.join(APP_DIR_NAME))
}
