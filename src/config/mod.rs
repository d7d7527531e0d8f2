// SPDX-License-Identifier: MPL-2.0
//! This module handles the toaster's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use story_toaster::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Slow down auto-removal
//! config.auto_remove_interval_ms = Some(15_000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.auto_remove_interval_ms, Some(15_000));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

mod defaults;

pub use defaults::*;

use crate::domain::toasts::ExpiryInterval;
use crate::error::Result;
use crate::notifications::QueueConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "StoryToaster";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub auto_remove: Option<bool>,
    #[serde(default)]
    pub auto_remove_interval_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auto_remove: Some(DEFAULT_AUTO_REMOVE),
            auto_remove_interval_ms: Some(AUTO_REMOVE_TOAST_TIME_INTERVAL),
        }
    }
}

impl Config {
    /// Builds the queue configuration described by these settings.
    ///
    /// Missing fields fall back to the defaults; the interval is clamped
    /// by [`ExpiryInterval`].
    #[must_use]
    pub fn queue_config(&self) -> QueueConfig {
        if !self.auto_remove.unwrap_or(DEFAULT_AUTO_REMOVE) {
            return QueueConfig::alerts();
        }
        let interval = self
            .auto_remove_interval_ms
            .map(ExpiryInterval::from_millis)
            .unwrap_or_default();
        QueueConfig::toasts(interval)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable settings file");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
