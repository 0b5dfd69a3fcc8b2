//! # Configuration
//!
//! Application configuration loaded at startup.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command line flags (highest priority)                              │
//! │     --file ./shop.txt                                                  │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     STOCKROOM_FILE=./shop.txt                                          │
//! │     STOCKROOM_CLEAR_SCREEN=false                                       │
//! │     STOCKROOM_PAUSE=false                                              │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     ~/.config/stockroom/config.toml (Linux)                            │
//! │     ~/Library/Application Support/com.stockroom.stockroom/ (macOS)     │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     inventory.txt in the working directory                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [storage]
//! file = "inventory.txt"
//!
//! [display]
//! clear_screen = true
//! pause_after_action = true
//! rule_width = 100
//! ```
//!
//! Configuration is read-only after startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Narrowest `rule_width` accepted.
///
/// Rules narrower than the product table (79 columns) are allowed; the
/// table rows are not wrapped to fit.
pub const MIN_RULE_WIDTH: usize = 40;

// =============================================================================
// Errors
// =============================================================================

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Storage Settings
// =============================================================================

/// Where the inventory lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Inventory file path. Relative paths resolve against the working
    /// directory.
    #[serde(default = "default_file")]
    pub file: PathBuf,
}

fn default_file() -> PathBuf {
    PathBuf::from("inventory.txt")
}

impl Default for StorageSettings {
    fn default() -> Self {
        StorageSettings {
            file: default_file(),
        }
    }
}

// =============================================================================
// Display Settings
// =============================================================================

/// Console behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Clear the terminal between menu screens.
    #[serde(default = "default_true")]
    pub clear_screen: bool,

    /// Wait for Enter after each action before showing the menu again.
    #[serde(default = "default_true")]
    pub pause_after_action: bool,

    /// Width of the `=====` rules around each screen.
    #[serde(default = "default_rule_width")]
    pub rule_width: usize,
}

fn default_true() -> bool {
    true
}

fn default_rule_width() -> usize {
    100
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            clear_screen: true,
            pause_after_action: true,
            rule_width: default_rule_width(),
        }
    }
}

impl DisplaySettings {
    /// Settings for scripted sessions: no clearing, no pauses.
    pub fn plain() -> Self {
        DisplaySettings {
            clear_screen: false,
            pause_after_action: false,
            rule_width: default_rule_width(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StockroomConfig {
    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub display: DisplaySettings,
}

impl StockroomConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (config.toml), if it exists
    /// 3. Environment variables
    ///
    /// An explicitly given path that does not exist is an error; a missing
    /// default path is not.
    pub fn load(config_path: Option<&Path>) -> ConfigResult<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML config file.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.storage.file.as_os_str().is_empty() {
            return Err(ConfigError::Invalid(
                "storage.file must not be empty".into(),
            ));
        }

        if self.display.rule_width < MIN_RULE_WIDTH {
            return Err(ConfigError::Invalid(format!(
                "display.rule_width must be at least {}, got {}",
                MIN_RULE_WIDTH, self.display.rule_width
            )));
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup (the environment in production).
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(file) = lookup("STOCKROOM_FILE") {
            debug!(file = %file, "Overriding inventory file from environment");
            self.storage.file = PathBuf::from(file);
        }

        if let Some(value) = lookup("STOCKROOM_CLEAR_SCREEN") {
            match parse_flag(&value) {
                Some(flag) => self.display.clear_screen = flag,
                None => warn!(value = %value, "Ignoring STOCKROOM_CLEAR_SCREEN"),
            }
        }

        if let Some(value) = lookup("STOCKROOM_PAUSE") {
            match parse_flag(&value) {
                Some(flag) => self.display.pause_after_action = flag,
                None => warn!(value = %value, "Ignoring STOCKROOM_PAUSE"),
            }
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "stockroom", "stockroom")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = StockroomConfig::default();
        assert_eq!(config.storage.file, PathBuf::from("inventory.txt"));
        assert!(config.display.clear_screen);
        assert!(config.display.pause_after_action);
        assert_eq!(config.display.rule_width, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: StockroomConfig = toml::from_str(
            r#"
            [display]
            clear_screen = false
            "#,
        )
        .unwrap();

        assert!(!config.display.clear_screen);
        assert!(config.display.pause_after_action);
        assert_eq!(config.storage.file, PathBuf::from("inventory.txt"));
    }

    #[test]
    fn test_config_validation() {
        let mut config = StockroomConfig::default();

        config.display.rule_width = 10;
        assert!(config.validate().is_err());

        config.display.rule_width = MIN_RULE_WIDTH;
        config.storage.file = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_min_rule_width_is_narrower_than_table() {
        let table = stockroom_core::Product::table_header().chars().count();
        assert_eq!(table, 79);
        assert!(MIN_RULE_WIDTH < table);
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("STOCKROOM_FILE", "/srv/shop.txt"),
            ("STOCKROOM_CLEAR_SCREEN", "off"),
            ("STOCKROOM_PAUSE", "maybe"),
        ]
        .into_iter()
        .collect();

        let mut config = StockroomConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.storage.file, PathBuf::from("/srv/shop.txt"));
        assert!(!config.display.clear_screen);
        // Unparsable values are ignored
        assert!(config.display.pause_after_action);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[storage]\nfile = \"data/stock.txt\"\n").unwrap();

        let config = StockroomConfig::from_file(&path).unwrap();
        assert_eq!(config.storage.file, PathBuf::from("data/stock.txt"));
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("missing.toml");
        assert!(matches!(
            StockroomConfig::from_file(&missing),
            Err(ConfigError::Io { .. })
        ));

        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "[storage\nfile = 3").unwrap();
        assert!(matches!(
            StockroomConfig::from_file(&broken),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&StockroomConfig::default()).unwrap();
        assert!(toml_str.contains("[storage]"));
        assert!(toml_str.contains("[display]"));
    }
}
