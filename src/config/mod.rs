// SPDX-License-Identifier: MPL-2.0
//! This module handles the player's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! The settings file also backs the persisted key-value preferences (see
//! [`SettingsStore`]), so the `"language"` key survives restarts.
//!
//! # Examples
//!
//! ```no_run
//! use insync_player::config::{self, Config};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

mod defaults;

pub use defaults::*;

use crate::application::port::PreferenceStore;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "InSync";

/// What unmute restores after a mute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MuteRestore {
    /// Unmute jumps back to full volume.
    #[default]
    Full,
    /// Unmute restores the last non-zero level.
    Previous,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub seek_step_secs: Option<f64>,
    #[serde(default)]
    pub controls_hide_delay_ms: Option<u64>,
    #[serde(default)]
    pub max_subtitle_bytes: Option<u64>,
    #[serde(default)]
    pub max_video_bytes: Option<u64>,
    #[serde(default)]
    pub mute_restore: Option<MuteRestore>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            seek_step_secs: Some(DEFAULT_SEEK_STEP_SECS),
            controls_hide_delay_ms: Some(DEFAULT_CONTROLS_HIDE_DELAY_MS),
            max_subtitle_bytes: DEFAULT_MAX_SUBTITLE_BYTES,
            max_video_bytes: Some(DEFAULT_MAX_VIDEO_BYTES),
            mute_restore: Some(MuteRestore::Full),
        }
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

/// Preference store persisted in the settings file.
///
/// Only the keys the core knows about are mapped onto [`Config`] fields;
/// unknown keys read as absent and are rejected on write.
#[derive(Debug)]
pub struct SettingsStore {
    path: Option<PathBuf>,
    config: Config,
}

impl SettingsStore {
    /// Opens the store at the default platform location.
    pub fn open_default() -> Result<Self> {
        let path = get_default_config_path();
        let config = load()?;
        Ok(Self { path, config })
    }

    /// Opens the store at an explicit path, starting from defaults if the file is missing.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let config = if path.exists() {
            load_from_path(&path)?
        } else {
            Config::default()
        };
        Ok(Self {
            path: Some(path),
            config,
        })
    }

    /// Wraps `config` without a backing file; writes stay in memory.
    #[must_use]
    pub fn detached(config: Config) -> Self {
        Self { path: None, config }
    }

    /// Returns the configuration backing this store.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl PreferenceStore for SettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        match key {
            LANGUAGE_PREFERENCE_KEY => self.config.language.clone(),
            _ => None,
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut updated = self.config.clone();
        match key {
            LANGUAGE_PREFERENCE_KEY => updated.language = Some(value.to_string()),
            other => {
                return Err(crate::error::Error::Config(format!(
                    "unknown preference key: {other}"
                )))
            }
        }
        // The in-memory copy only changes once the file write succeeded.
        if let Some(path) = &self.path {
            save_to_path(&updated, path)?;
        }
        self.config = updated;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_language() {
        let config = Config {
            language: Some("fr".to_string()),
            seek_step_secs: Some(5.0),
            controls_hide_delay_ms: Some(1500),
            max_subtitle_bytes: Some(1024),
            max_video_bytes: None,
            mute_restore: Some(MuteRestore::Previous),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.language.is_none());
    }

    #[test]
    fn missing_fields_fall_back_to_none() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "language = \"de\"\n").expect("failed to write toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.language.as_deref(), Some("de"));
        assert!(loaded.seek_step_secs.is_none());
        assert!(loaded.mute_restore.is_none());
    }

    #[test]
    fn mute_restore_serializes_lowercase() {
        let config = Config {
            mute_restore: Some(MuteRestore::Previous),
            ..Config::default()
        };
        let text = toml::to_string_pretty(&config).expect("serialize");
        assert!(text.contains("mute_restore = \"previous\""));
    }

    #[test]
    fn default_config_uses_default_constants() {
        let config = Config::default();
        assert_eq!(config.seek_step_secs, Some(DEFAULT_SEEK_STEP_SECS));
        assert_eq!(
            config.controls_hide_delay_ms,
            Some(DEFAULT_CONTROLS_HIDE_DELAY_MS)
        );
        assert_eq!(config.max_video_bytes, Some(DEFAULT_MAX_VIDEO_BYTES));
        assert_eq!(config.mute_restore, Some(MuteRestore::Full));
    }

    #[test]
    fn settings_store_persists_language_key() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("settings.toml");

        let mut store = SettingsStore::open(&path).expect("open store");
        assert_eq!(store.get(LANGUAGE_PREFERENCE_KEY), None);
        store
            .set(LANGUAGE_PREFERENCE_KEY, "ar")
            .expect("write language");

        let reopened = SettingsStore::open(&path).expect("reopen store");
        assert_eq!(reopened.get(LANGUAGE_PREFERENCE_KEY).as_deref(), Some("ar"));
    }

    #[test]
    fn settings_store_rejects_unknown_keys() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut store = SettingsStore::open(temp_dir.path().join("s.toml")).expect("open store");
        assert!(store.set("theme", "dark").is_err());
        assert_eq!(store.get("theme"), None);
    }

    #[test]
    fn failed_write_leaves_settings_store_unchanged() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let blocker = temp_dir.path().join("not_a_dir");
        fs::write(&blocker, "").expect("failed to create blocking file");

        let mut store = SettingsStore::open(blocker.join("settings.toml")).expect("open store");
        assert!(store.set(LANGUAGE_PREFERENCE_KEY, "fr").is_err());
        assert_eq!(store.get(LANGUAGE_PREFERENCE_KEY), None);
        assert_eq!(store.config(), &Config::default());
    }
}
