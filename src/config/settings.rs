//! User settings for My Pocket
//!
//! Theme, language, app-lock PIN and the premium flag. Each slice used to be
//! an independent storage key; they are kept together in one config file but
//! every field still tolerates being absent.

use serde::{Deserialize, Serialize};

use super::paths::PocketPaths;
use crate::error::PocketError;

/// Color theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Interface language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Arabic (the original audience)
    #[default]
    Ar,
    /// English
    En,
}

/// User settings for My Pocket
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Color theme
    #[serde(default)]
    pub theme: Theme,

    /// Interface language
    #[serde(default)]
    pub language: Language,

    /// App-lock PIN, stored as entered. `None` disables the lock.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pin: Option<String>,

    /// Premium entitlement flag
    #[serde(default)]
    pub premium: bool,

    /// API key for the assistant service; the `MY_POCKET_API_KEY`
    /// environment variable takes precedence when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    /// or cannot be parsed. Corrupt settings are never fatal.
    pub fn load_or_create(paths: &PocketPaths) -> Self {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Self::default();
        }

        std::fs::read_to_string(&settings_path)
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_default()
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PocketPaths) -> Result<(), PocketError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PocketError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| PocketError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Resolve the assistant API key: env var first, then the settings file
    pub fn resolved_api_key(&self) -> Option<String> {
        std::env::var("MY_POCKET_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .or_else(|| self.api_key.clone())
    }
}
