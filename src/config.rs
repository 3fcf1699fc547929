//! Configuration file loading and types.
//!
//! psr has a single setting: the package manager override. It lives in a
//! user-level TOML file at `~/.config/psr/config.toml`:
//!
//! ```toml
//! # "auto" (default), "pnpm", "bun", or "npm"
//! package_manager = "auto"
//! ```
//!
//! A missing config file yields defaults. The `--pm` CLI flag takes
//! precedence over the file.

use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::error::PsrError;
use crate::package::PmSetting;
use crate::utils::user_config_file;

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Package manager override. `auto` runs lock-file detection.
    #[serde(default)]
    pub package_manager: PmSetting,
}

impl Config {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Load configuration from the specified path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| PsrError::InvalidConfig {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let config: Config = toml::from_str(&content).map_err(|e| PsrError::InvalidConfig {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(config)
}

/// Load the user configuration.
///
/// A missing config file is not an error; defaults are used. An existing
/// but unreadable or malformed file prints a warning and falls back to
/// defaults, so a broken config never blocks running a script.
pub fn load_config() -> Config {
    let Some(path) = user_config_file() else {
        return Config::default();
    };

    if !path.exists() {
        return Config::default();
    }

    match load_config_from_path(&path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: {e}");
            Config::default()
        }
    }
}

/// Load configuration from an explicit path.
///
/// Unlike [`load_config`], a missing or malformed file here is a hard
/// error: the user named the file, so silently ignoring it would be wrong.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_config_file(path: &Path) -> Result<Config> {
    load_config_from_path(path)
}
