//! Per-user directories for finni.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "finni";

/// Which per-user location to resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppDir {
    /// `$XDG_CONFIG_HOME/finni`, holds `config.toml`
    Config,
    /// `$XDG_CACHE_HOME/finni`, holds the log file
    Cache,
}

impl AppDir {
    fn base(self) -> Option<PathBuf> {
        match self {
            AppDir::Config => dirs::config_dir(),
            AppDir::Cache => dirs::cache_dir(),
        }
    }

    fn label(self) -> &'static str {
        match self {
            AppDir::Config => "config",
            AppDir::Cache => "cache",
        }
    }

    /// Resolve the finni subdirectory. Nothing is created on disk.
    fn resolve(self) -> Result<PathBuf> {
        self.base()
            .map(|base| base.join(APP_NAME))
            .with_context(|| format!("Failed to determine {} directory", self.label()))
    }

    /// Resolve a file inside the finni subdirectory.
    pub fn file(self, name: &str) -> Result<PathBuf> {
        Ok(self.resolve()?.join(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolved_dirs_end_with_app_name() {
        for dir in [AppDir::Config, AppDir::Cache] {
            assert!(dir.resolve().unwrap().ends_with(APP_NAME));
        }
        assert_ne!(
            AppDir::Config.resolve().unwrap(),
            AppDir::Cache.resolve().unwrap()
        );
    }

    #[test]
    fn test_file_joins_under_app_dir() {
        let path = AppDir::Config.file("config.toml").unwrap();
        assert_eq!(path.parent().unwrap(), AppDir::Config.resolve().unwrap());
        assert_eq!(path.file_name().unwrap(), "config.toml");
    }
}
