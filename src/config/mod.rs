// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! Components are enabled by the presence of their configuration: the
//! anniversary counter only runs when `anchor_date` is set, and the photo wall
//! only renders when `pictures_dir` points at a directory. A missing or
//! unreadable file falls back to defaults with a warning key instead of
//! failing startup.

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Keepsake";

/// Notification key shown when an existing config file cannot be parsed.
pub const CONFIG_LOAD_WARNING_KEY: &str = "notification-config-load-error";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// ISO-8601 local date-time the elapsed counter measures from.
    pub anchor_date: Option<String>,
    /// Directory scanned for the gallery's image catalog.
    pub pictures_dir: Option<PathBuf>,
    /// Locale override in BCP-47 form (e.g. `en-US`, `th`).
    pub language: Option<String>,
    #[serde(default)]
    pub theme_mode: Option<ThemeMode>,
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the platform config directory.
///
/// Returns the loaded (or default) config plus an optional warning key when
/// an existing file could not be read or parsed.
#[must_use]
pub fn load() -> (Config, Option<&'static str>) {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return match load_from_path(&path) {
                Ok(config) => (config, None),
                Err(_) => (Config::default(), Some(CONFIG_LOAD_WARNING_KEY)),
            };
        }
    }
    (Config::default(), None)
}

/// Loads a configuration from an explicit path (used by tests).
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Saves a configuration to an explicit path, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization or any filesystem operation fails.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
