//! Application configuration
//!
//! Loads `majlis.toml` from the platform config directory. A missing
//! file falls back to the built-in defaults; a malformed file is an
//! error so typos do not silently vanish.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default gift overlay display time in milliseconds
const DEFAULT_GIFT_DURATION_MS: u64 = 4000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Could not determine config directory")]
    NoConfigDir,
}

/// Config loaded from `majlis.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Room title shown in the header
    #[serde(default = "default_room_name")]
    pub room_name: String,
    /// Display name for the local user
    #[serde(default = "default_user_name")]
    pub user_display_name: String,
    /// How long a triggered gift stays visible, in milliseconds
    #[serde(default = "default_gift_duration_ms")]
    pub gift_duration_ms: u64,
}

fn default_room_name() -> String {
    "Friends Lounge".to_string()
}

fn default_user_name() -> String {
    "Guest".to_string()
}

fn default_gift_duration_ms() -> u64 {
    DEFAULT_GIFT_DURATION_MS
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            room_name: default_room_name(),
            user_display_name: default_user_name(),
            gift_duration_ms: default_gift_duration_ms(),
        }
    }
}

impl AppConfig {
    /// Load from the platform config directory, defaulting if absent
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from an explicit path, defaulting if the file is absent
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        tracing::info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn gift_duration(&self) -> Duration {
        Duration::from_millis(self.gift_duration_ms)
    }

    fn config_path() -> Result<PathBuf, ConfigError> {
        let dirs =
            ProjectDirs::from("dev", "majlis", "majlis").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("majlis.toml"))
    }
}
