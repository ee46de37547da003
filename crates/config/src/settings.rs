//! Configuration structures for finni settings.

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Application configuration with nested sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Editor settings
    #[serde(default)]
    pub editor: EditorSettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Editor settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Number of spaces inserted by Tab when `insert_spaces` is set
    #[serde(default = "default_tab_size")]
    pub tab_size: usize,

    /// Insert spaces instead of a tab byte
    #[serde(default = "default_insert_spaces")]
    pub insert_spaces: bool,
}

impl EditorSettings {
    /// Bytes inserted for a single Tab key press.
    pub fn tab_bytes(&self) -> Vec<u8> {
        if self.insert_spaces {
            vec![b' '; self.tab_size]
        } else {
            vec![b'\t']
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log file path (optional)
    #[serde(default)]
    pub file_path: Option<String>,

    /// Minimum log level (debug, info, warn, error)
    #[serde(default = "default_min_level")]
    pub min_level: String,
}

// Default value functions for serde
fn default_tab_size() -> usize {
    defaults::TAB_SIZE
}

fn default_insert_spaces() -> bool {
    defaults::INSERT_SPACES
}

fn default_min_level() -> String {
    defaults::MIN_LOG_LEVEL.to_string()
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            tab_size: default_tab_size(),
            insert_spaces: default_insert_spaces(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file_path: None,
            min_level: default_min_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.editor.tab_size, 4);
        assert!(!config.editor.insert_spaces);
        assert_eq!(config.logging.min_level, "info");
    }

    #[test]
    fn test_partial_section() {
        let config: Config = toml::from_str("[editor]\ninsert_spaces = true\n").unwrap();
        assert!(config.editor.insert_spaces);
        assert_eq!(config.editor.tab_size, defaults::TAB_SIZE);
        assert_eq!(config.logging.file_path, None);
    }

    #[test]
    fn test_tab_bytes() {
        let mut editor = EditorSettings::default();
        assert_eq!(editor.tab_bytes(), b"\t");

        editor.insert_spaces = true;
        editor.tab_size = 2;
        assert_eq!(editor.tab_bytes(), b"  ");
    }
}
