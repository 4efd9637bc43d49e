//! File-backed preference store
//!
//! Persists preferences as a flat TOML table of strings. Writes go through
//! a sibling temp file followed by a rename so a crash mid-write leaves the
//! previous document intact.

use crate::{PreferenceStore, StoreError};
use rustc_hash::FxHashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Preference store persisting to a single TOML file
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    /// Create a store backed by the given file path.
    ///
    /// The file (and its parent directory) is created lazily on the first
    /// `set`; a missing file reads as an empty document.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<FxHashMap<String, String>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(FxHashMap::default());
            }
            Err(err) => return Err(err.into()),
        };

        toml::from_str(&text).map_err(|err| StoreError::Corrupt(err.to_string()))
    }

    fn write_map(&self, map: &FxHashMap<String, String>) -> Result<(), StoreError> {
        let text = toml::to_string(map).map_err(|err| StoreError::Corrupt(err.to_string()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp = self.path.with_extension("toml.tmp");
        fs::write(&tmp, text)?;
        fs::rename(&tmp, &self.path)?;

        tracing::trace!(path = %self.path.display(), "preferences written");
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_map()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePreferenceStore::new(dir.path().join("prefs.toml"));

        assert!(store.get("dark_mode").unwrap().is_none());
    }

    #[test]
    fn set_then_get_round_trips_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");

        let store = FilePreferenceStore::new(&path);
        store.set("dark_mode", "true").unwrap();
        assert_eq!(store.get("dark_mode").unwrap().as_deref(), Some("true"));

        // A second store over the same path sees the persisted value.
        let reopened = FilePreferenceStore::new(&path);
        assert_eq!(reopened.get("dark_mode").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn set_replaces_previous_value_and_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePreferenceStore::new(dir.path().join("prefs.toml"));

        store.set("dark_mode", "true").unwrap();
        store.set("locale", "en").unwrap();
        store.set("dark_mode", "false").unwrap();

        assert_eq!(store.get("dark_mode").unwrap().as_deref(), Some("false"));
        assert_eq!(store.get("locale").unwrap().as_deref(), Some("en"));
    }

    #[test]
    fn corrupt_document_surfaces_corrupt_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        fs::write(&path, "not = [ valid toml").unwrap();

        let store = FilePreferenceStore::new(&path);
        assert!(matches!(store.get("dark_mode"), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn creates_missing_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePreferenceStore::new(dir.path().join("nested/config/prefs.toml"));

        store.set("dark_mode", "true").unwrap();
        assert_eq!(store.get("dark_mode").unwrap().as_deref(), Some("true"));
    }
}
