//! Configuration module for the matt CLI.
//!
//! This module handles loading, saving, and locating `matt.toml`.

use dirs::{config_dir, home_dir};
use mat_lex::LexOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::commands::common::OutputFormat;
use crate::error::{MattError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "matt.toml";

/// Application configuration structure.
///
/// # Example
///
/// ```toml
/// verbose = false
///
/// [lexer]
/// notation = "latex"
/// show_warnings = true
/// strict_reporting = true
/// skip_whitespace = false
///
/// [output]
/// format = "text"
/// show_offsets = false
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Lexer options.
    #[serde(default)]
    pub lexer: LexOptions,

    /// Token dump options.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Token dump configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Default dump format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Print each token's byte offset.
    #[serde(default)]
    pub show_offsets: bool,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/matt/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(MattError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| MattError::Config(format!("Failed to parse configuration: {}", e)))?;

        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| MattError::Config(format!("Failed to serialize configuration: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("matt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("matt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
