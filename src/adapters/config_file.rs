//! JSON file config store.
//!
//! Implements [`ConfigPort`] on top of a single JSON document.  A
//! missing file is not an error: the game runs on defaults and the
//! file is only written on an explicit save.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::app::ports::{ConfigError, ConfigPort};
use crate::config::GameConfig;

pub struct JsonConfigFile {
    path: PathBuf,
}

impl JsonConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigPort for JsonConfigFile {
    fn load(&self) -> Result<GameConfig, ConfigError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("JsonConfigFile: {} absent, using defaults", self.path.display());
                return Ok(GameConfig::default());
            }
            Err(e) => {
                warn!("JsonConfigFile: read {} failed: {}", self.path.display(), e);
                return Err(ConfigError::IoError);
            }
        };

        let config: GameConfig = serde_json::from_str(&text).map_err(|e| {
            warn!("JsonConfigFile: {} unparsable: {}", self.path.display(), e);
            ConfigError::Corrupted
        })?;
        config.validate()?;
        info!("JsonConfigFile: loaded {}", self.path.display());
        Ok(config)
    }

    fn save(&self, config: &GameConfig) -> Result<(), ConfigError> {
        config.validate()?;
        let text = serde_json::to_string_pretty(config).map_err(|_| ConfigError::Corrupted)?;
        std::fs::write(&self.path, text).map_err(|e| {
            warn!("JsonConfigFile: write {} failed: {}", self.path.display(), e);
            ConfigError::IoError
        })?;
        info!("JsonConfigFile: saved {}", self.path.display());
        Ok(())
    }
}
