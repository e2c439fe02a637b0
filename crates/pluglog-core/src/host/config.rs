//! Host configuration file (YAML)
//!
//! User-level config lives at `~/.config/pluglog/config.yaml`:
//!
//! ```yaml
//! uploads_dir: /var/www/site/uploads
//! global_debug_flag: WP_DEBUG
//! flags:
//!   SHOP_SYNC_DEBUG: true
//! loggers:
//!   shop-sync:
//!     log_file: sync.log
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::logger::LoggerOptions;

use super::environment::MarkerFile;

/// Errors that can occur while loading host configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostConfig {
    /// Root under which per-logger directories are created
    #[serde(default)]
    pub uploads_dir: Option<PathBuf>,

    /// Name of the global debug flag
    #[serde(default)]
    pub global_debug_flag: Option<String>,

    /// Flags declared in the file; environment variables take precedence
    #[serde(default)]
    pub flags: HashMap<String, bool>,

    #[serde(default)]
    pub access_marker: Option<MarkerFile>,

    #[serde(default)]
    pub placeholder_marker: Option<MarkerFile>,

    /// Loggers to register up front, keyed by name
    #[serde(default)]
    pub loggers: HashMap<String, LoggerOptions>,
}

impl HostConfig {
    /// Default user-level config path (`~/.config/pluglog/config.yaml`)
    pub fn user_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config")
        });
        config_dir.join("pluglog").join("config.yaml")
    }

    /// Load config from a file; a missing file yields the default config
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Load the user-level config
    pub fn load_user() -> ConfigResult<Self> {
        Self::load(Self::user_path())
    }

    pub fn from_yaml(content: &str) -> ConfigResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Save config to a file, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_yaml()?)?;
        Ok(())
    }
}
