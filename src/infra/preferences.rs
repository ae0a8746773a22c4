//! Persisted key/value preferences (the theme slot lives here).

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::PreferencesError;

const PREFERENCES_FILENAME: &str = "preferences.json";

pub trait ThemeStore {
    fn load(&self, key: &str) -> Result<Option<String>, PreferencesError>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), PreferencesError>;
}

/// A flat JSON object on disk, read on every load and rewritten on every save.
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Preferences file inside the application data directory.
    pub fn in_data_dir() -> Self {
        Self::new(super::app_config::app_data_dir().join(PREFERENCES_FILENAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, PreferencesError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let json = fs::read_to_string(&self.path)?;
        if json.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&json)?)
    }
}

impl ThemeStore for FilePreferences {
    fn load(&self, key: &str) -> Result<Option<String>, PreferencesError> {
        Ok(self.read_all()?.remove(key))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), PreferencesError> {
        // A corrupt file is replaced rather than blocking every later save.
        let mut values = self.read_all().unwrap_or_else(|err| {
            log::warn!("Discarding unreadable preferences {}: {}", self.path.display(), err);
            BTreeMap::new()
        });
        values.insert(key.to_string(), value.to_string());

        let parent = self.path.parent().ok_or(PreferencesError::NoDataDir)?;
        fs::create_dir_all(parent)?;
        fs::write(&self.path, serde_json::to_string_pretty(&values)?)?;
        Ok(())
    }
}
