//! CLI configuration loaded from a JSON file

use crate::error::{Result, SightError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File name looked up inside the configuration directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Directory name under the OS configuration directory
pub const CONFIG_DIR_NAME: &str = "hash-sight";

/// Presentation settings for the `hash-sight` CLI
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SightConfig {
    /// Style confidence badges with ANSI escapes
    #[serde(default = "default_color")]
    pub color: bool,
    /// Emit JSON instead of the text card
    #[serde(default)]
    pub json: bool,
    /// Echo the raw input under the result
    #[serde(default = "default_show_input")]
    pub show_input: bool,
}

fn default_color() -> bool {
    true
}

fn default_show_input() -> bool {
    true
}

impl Default for SightConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            json: false,
            show_input: default_show_input(),
        }
    }
}

impl SightConfig {
    /// Default location: `$XDG_CONFIG_HOME/hash-sight/config.json`
    ///
    /// Returns `None` when the OS reports no configuration directory.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        match dirs::config_dir() {
            Some(dir) => Some(dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)),
            None => {
                warn!("Could not determine OS config directory, using built-in defaults");
                None
            }
        }
    }

    /// Load from `path`, or from [`Self::default_path`] when `path` is `None`
    ///
    /// A missing file yields the defaults. An explicitly given path that does
    /// not exist is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => {
                    debug!("No configuration file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Parse a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| SightError::config(path, format!("cannot read file: {e}")))?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| SightError::config(path, format!("invalid JSON: {e}")))?;
        debug!(path = %path.display(), ?config, "Loaded configuration");
        Ok(config)
    }
}
