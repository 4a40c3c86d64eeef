//! Settings persistence

use super::settings::{Settings, SettingsUpdate, StoredSettings};
use crate::error::{ExcerptError, Result};
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::{debug, info};

/// Key/value persistence for [`Settings`]
pub trait SettingsStore: Send + Sync {
    /// Whatever was saved last; absent fields are `None`
    fn load(&self) -> Result<StoredSettings>;

    /// Persist the full settings value
    fn save(&self, settings: &Settings) -> Result<()>;
}

/// Settings stored as a YAML document on disk
pub struct YamlSettingsStore {
    path: PathBuf,
}

impl YamlSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the settings path: explicit path, then
    /// `WIKI_EXCERPT_SETTINGS_PATH`, then the user config directory
    pub fn locate(explicit: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = explicit {
            return Ok(Self::new(path));
        }
        if let Ok(path) = std::env::var("WIKI_EXCERPT_SETTINGS_PATH") {
            return Ok(Self::new(path));
        }
        dirs::config_dir()
            .map(|dir| Self::new(dir.join("wiki-excerpt").join("settings.yml")))
            .ok_or_else(|| ExcerptError::settings("no configuration directory available"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for YamlSettingsStore {
    fn load(&self) -> Result<StoredSettings> {
        if !self.path.exists() {
            debug!("No settings file at {}, using defaults", self.path.display());
            return Ok(StoredSettings::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(StoredSettings::default());
        }
        serde_yaml::from_str(&content).map_err(|e| {
            ExcerptError::settings(format!("{}: {}", self.path.display(), e))
        })
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_yaml::to_string(settings)
            .map_err(|e| ExcerptError::settings(e.to_string()))?;
        std::fs::write(&self.path, content)?;
        debug!("Saved settings to {}", self.path.display());
        Ok(())
    }
}

/// Settings kept in memory only
#[derive(Default)]
pub struct MemorySettingsStore {
    stored: RwLock<StoredSettings>,
}

impl MemorySettingsStore {
    pub fn new(stored: StoredSettings) -> Self {
        Self {
            stored: RwLock::new(stored),
        }
    }

    pub fn snapshot(&self) -> StoredSettings {
        self.stored.read().map(|s| s.clone()).unwrap_or_default()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Result<StoredSettings> {
        Ok(self.snapshot())
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        let mut stored = self
            .stored
            .write()
            .map_err(|_| ExcerptError::settings("settings lock poisoned"))?;
        *stored = StoredSettings::from(settings);
        Ok(())
    }
}

/// Owns the current settings and writes every change through to its store
pub struct SettingsManager {
    store: Box<dyn SettingsStore>,
    settings: Settings,
}

impl SettingsManager {
    /// Load once from the store, merged over defaults
    pub fn load(store: Box<dyn SettingsStore>) -> Result<Self> {
        let settings = Settings::merged(store.load()?);
        info!("Loaded settings (language: {})", settings.language);
        Ok(Self { store, settings })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Apply one field change and persist the result
    pub fn update(&mut self, update: SettingsUpdate) -> Result<&Settings> {
        debug!("Applying settings update: {:?}", update);
        self.settings.apply(update);
        self.store.save(&self.settings)?;
        Ok(&self.settings)
    }

    /// Restore and persist the defaults
    pub fn reset(&mut self) -> Result<&Settings> {
        self.settings = Settings::default();
        self.store.save(&self.settings)?;
        Ok(&self.settings)
    }
}
