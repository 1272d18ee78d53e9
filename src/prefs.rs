// SPDX-FileCopyrightText: The pedalio authors
// SPDX-License-Identifier: MPL-2.0

use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("failed to access preference storage")]
    Io(#[from] io::Error),
    #[error("preference storage is malformed")]
    Malformed(#[from] serde_json::Error),
}

/// Best-effort key-value storage for editor preferences.
///
/// Implementations must not panic on backend failures. Callers are free
/// to ignore the returned errors, preferences degrade to defaults.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError>;
    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError>;
}

/// Preferences persisted as a single JSON object file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<HashMap<String, String>, PrefsError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(err) => Err(err.into()),
        }
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_owned(), value.to_owned());
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
        Ok(())
    }
}

/// In-memory storage for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
        let entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(None, store.get("target_device").unwrap());
        store.set("target_device", "Valeton GP-5").unwrap();
        assert_eq!(
            Some("Valeton GP-5".to_owned()),
            store.get("target_device").unwrap()
        );
    }

    #[test]
    fn file_store_round_trip() {
        let path = std::env::temp_dir()
            .join("pedalio-prefs-test")
            .join(format!("prefs-{}.json", std::process::id()));
        let _ = fs::remove_file(&path);

        let store = JsonFileStore::new(&path);
        assert_eq!(None, store.get("target_device").unwrap());
        store.set("target_device", "Valeton GP-5").unwrap();
        store.set("theme", "dark").unwrap();

        // A fresh store instance sees the persisted entries.
        let reopened = JsonFileStore::new(&path);
        assert_eq!(
            Some("Valeton GP-5".to_owned()),
            reopened.get("target_device").unwrap()
        );
        assert_eq!(Some("dark".to_owned()), reopened.get("theme").unwrap());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn malformed_file_is_reported_not_panicking() {
        let path = std::env::temp_dir()
            .join("pedalio-prefs-test")
            .join(format!("broken-{}.json", std::process::id()));
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(
            store.get("target_device"),
            Err(PrefsError::Malformed(_))
        ));

        let _ = fs::remove_file(&path);
    }
}
