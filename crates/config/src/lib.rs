//! Configuration management for finni.
//!
//! This crate provides configuration loading and saving in TOML format,
//! with the config file placed according to XDG directory conventions.

mod settings;
mod xdg;

pub use settings::{Config, EditorSettings, LoggingSettings};
pub use xdg::AppDir;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Default values as constants
pub mod defaults {
    pub const TAB_SIZE: usize = 4;
    pub const INSERT_SPACES: bool = false;
    pub const MIN_LOG_LEVEL: &str = "info";
}

/// Application constants
pub mod constants {
    /// Event poll interval in milliseconds
    pub const EVENT_HANDLER_INTERVAL_MS: u64 = 42;

    pub const KILOBYTE: u64 = 1024;
    pub const MEGABYTE: u64 = KILOBYTE * 1024;

    /// Largest document the editor will load (100 MB)
    pub const MAX_DOCUMENT_SIZE: u64 = 100 * MEGABYTE;

    /// Log file name inside the cache directory
    pub const LOG_FILE_NAME: &str = "finni.log";
}

impl Config {
    /// Load configuration from the XDG config file.
    ///
    /// On first run, creates the config file with default values.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from the given file.
    ///
    /// A missing file is created with default values. Missing keys are
    /// filled in and the normalized content is written back.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let original_content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = Self::validate_content(&original_content)?;

        // Serialize back to get normalized content
        let normalized_content = toml::to_string_pretty(&config)?;
        if original_content != normalized_content {
            config.save_to(path)?;
        }

        Ok(config)
    }

    /// Save configuration to the given file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Get path to config file.
    pub fn config_file_path() -> Result<PathBuf> {
        AppDir::Config.file("config.toml")
    }

    /// Resolve the log file: the configured path, or the default one in the
    /// cache directory.
    pub fn log_file_path(&self) -> Result<PathBuf> {
        match &self.logging.file_path {
            Some(path) => Ok(PathBuf::from(path)),
            None => AppDir::Cache.file(constants::LOG_FILE_NAME),
        }
    }

    /// Validate config content.
    pub fn validate_content(content: &str) -> Result<Config> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("{}", e))
    }
}
