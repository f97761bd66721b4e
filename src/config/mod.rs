//! Configuration loading and management

mod io;
mod settings;

pub use settings::{LoggingSettings, StorageSettings};

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Where rewards state is stored
    #[serde(default)]
    pub storage: StorageSettings,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Database path, falling back to ~/.flashcard/rewards.db
    pub fn database_path(&self) -> PathBuf {
        self.storage
            .database_path
            .clone()
            .unwrap_or_else(Self::default_database_path)
    }

    /// Default database location (~/.flashcard/rewards.db)
    pub fn default_database_path() -> PathBuf {
        Self::global_config_dir().join("rewards.db")
    }
}
