//! Configuration file support for platesnap.
//!
//! Loads deployment policy from `~/.config/platesnap/config.toml`. The one
//! policy today is which clipboard representation snapshots produce: a binary
//! PNG blob, or its data-URL text form for environments without a native
//! image clipboard.
//!
//! If no config file exists, defaults are used automatically.

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::snapshot::TransferMode;

/// Main configuration structure.
///
/// # Example TOML
/// ```toml
/// [snapshot]
/// transfer-mode = "data-url"
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Snapshot delivery settings.
    #[serde(default)]
    pub snapshot: SnapshotConfig,
}

/// Settings for the snapshot subsystem.
#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct SnapshotConfig {
    /// Clipboard representation for snapshot payloads.
    #[serde(default)]
    pub transfer_mode: TransferMode,
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g.,
    /// HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("platesnap");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if the config directory path cannot be determined,
    /// or the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }
}
