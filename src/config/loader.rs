use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};

use super::Config;

/// Location of the user config file: `~/.config/dcol/config.toml` on Linux
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("dcol").join("config.toml"))
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// tried and a missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            if !path.is_file() {
                return Err(Error::ConfigNotFound(path.to_path_buf()));
            }
            return Self::load_from_path(path);
        }

        match default_config_path() {
            Some(path) if path.is_file() => Self::load_from_path(&path),
            _ => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Read and parse a config file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
