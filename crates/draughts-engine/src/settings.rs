//! Rule settings persistence.
//!
//! The engine only ever consumes a [`RuleConfig`] value. Where that value
//! lives is up to a [`SettingsStore`]: an in-memory key-value map shaped like
//! browser local storage, or a TOML file on disk. Either way the record is
//! kept under the fixed key [`SETTINGS_KEY`], and a missing record means
//! every rule is enabled.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rules::RuleConfig;

/// Key the rule record is stored under.
pub const SETTINGS_KEY: &str = "checkersSettings";

/// Errors that can occur when loading or saving rule settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Failed to read or write the settings file.
    #[error("failed to access settings file: {0}")]
    Io(#[from] std::io::Error),
    /// The stored record is not valid JSON.
    #[error("failed to parse settings record: {0}")]
    Json(#[from] serde_json::Error),
    /// The settings file is not valid TOML.
    #[error("failed to parse settings file: {0}")]
    TomlDecode(#[from] toml::de::Error),
    #[error("failed to encode settings file: {0}")]
    TomlEncode(#[from] toml::ser::Error),
}

/// Backing storage for the persisted rule record.
pub trait SettingsStore {
    /// Loads the stored record, or `None` if nothing has been saved.
    fn load(&self) -> Result<Option<RuleConfig>, SettingsError>;

    /// Replaces the stored record.
    fn save(&mut self, config: &RuleConfig) -> Result<(), SettingsError>;
}

/// String key-value store holding the record as JSON.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Stores a raw value under `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<Option<RuleConfig>, SettingsError> {
        self.get(SETTINGS_KEY)
            .map(serde_json::from_str)
            .transpose()
            .map_err(SettingsError::from)
    }

    fn save(&mut self, config: &RuleConfig) -> Result<(), SettingsError> {
        let json = serde_json::to_string(config)?;
        self.insert(SETTINGS_KEY, json);
        Ok(())
    }
}

/// Layout of the settings file: one `[checkersSettings]` table.
#[derive(Debug, Default, Serialize, Deserialize)]
struct SettingsFile {
    #[serde(
        rename = "checkersSettings",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    checkers_settings: Option<RuleConfig>,
}

/// Settings stored in a TOML file.
///
/// ```toml
/// [checkersSettings]
/// flyingKings = true
/// backwardsCapture = true
/// multipleCapture = true
/// forceCapture = false
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    /// Returns the path of the settings file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for FileStore {
    fn load(&self) -> Result<Option<RuleConfig>, SettingsError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        let file: SettingsFile = toml::from_str(&content)?;
        Ok(file.checkers_settings)
    }

    fn save(&mut self, config: &RuleConfig) -> Result<(), SettingsError> {
        let file = SettingsFile {
            checkers_settings: Some(*config),
        };
        std::fs::write(&self.path, toml::to_string(&file)?)?;
        tracing::debug!(path = %self.path.display(), "rule settings saved");
        Ok(())
    }
}

/// The current rule configuration backed by a store.
///
/// Changing the configuration saves it immediately. A running
/// [`Game`](crate::Game) keeps its own copy, so the change only applies from
/// its next reset.
#[derive(Debug)]
pub struct RuleSettings<S> {
    store: S,
    current: RuleConfig,
}

impl<S: SettingsStore> RuleSettings<S> {
    /// Loads the configuration from `store`, falling back to all rules
    /// enabled when nothing has been saved.
    pub fn open(store: S) -> Result<Self, SettingsError> {
        let current = store.load()?.unwrap_or_default();
        Ok(RuleSettings { store, current })
    }

    /// Returns the current configuration.
    pub fn get(&self) -> RuleConfig {
        self.current
    }

    /// Replaces and persists the configuration.
    pub fn set(&mut self, config: RuleConfig) -> Result<(), SettingsError> {
        self.store.save(&config)?;
        self.current = config;
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RulePreset;

    #[test]
    fn memory_store_defaults_to_all_enabled() {
        let settings = RuleSettings::open(MemoryStore::new()).unwrap();
        assert_eq!(settings.get(), RuleConfig::ALL_ENABLED);
    }

    #[test]
    fn memory_store_uses_camel_case_json() {
        let mut settings = RuleSettings::open(MemoryStore::new()).unwrap();
        settings.set(RulePreset::English.config()).unwrap();

        let raw = settings.store().get(SETTINGS_KEY).unwrap();
        let value: serde_json::Value = serde_json::from_str(raw).unwrap();
        assert_eq!(value["flyingKings"], false);
        assert_eq!(value["backwardsCapture"], false);
        assert_eq!(value["multipleCapture"], true);
        assert_eq!(value["forceCapture"], true);

        let reopened = RuleSettings::open(settings.into_store()).unwrap();
        assert_eq!(reopened.get(), RulePreset::English.config());
    }

    #[test]
    fn memory_store_fills_missing_fields() {
        let mut store = MemoryStore::new();
        store.insert(SETTINGS_KEY, r#"{"forceCapture":false}"#);
        let settings = RuleSettings::open(store).unwrap();
        assert_eq!(
            settings.get(),
            RuleConfig {
                force_capture: false,
                ..RuleConfig::ALL_ENABLED
            }
        );
    }

    #[test]
    fn memory_store_rejects_garbage() {
        let mut store = MemoryStore::new();
        store.insert(SETTINGS_KEY, "not json");
        assert!(matches!(
            RuleSettings::open(store),
            Err(SettingsError::Json(_))
        ));
    }

    #[test]
    fn file_store_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("settings.toml"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");

        let mut settings = RuleSettings::open(FileStore::new(&path)).unwrap();
        settings.set(RuleConfig::ALL_DISABLED).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("[checkersSettings]"));
        assert!(content.contains("flyingKings = false"));

        let reopened = RuleSettings::open(FileStore::new(&path)).unwrap();
        assert_eq!(reopened.get(), RuleConfig::ALL_DISABLED);
    }

    #[test]
    fn file_store_without_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "").unwrap();
        let settings = RuleSettings::open(FileStore::new(&path)).unwrap();
        assert_eq!(settings.get(), RuleConfig::default());
    }

    #[test]
    fn file_store_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[checkersSettings\nflyingKings = ").unwrap();
        assert!(matches!(
            FileStore::new(&path).load(),
            Err(SettingsError::TomlDecode(_))
        ));
    }
}
