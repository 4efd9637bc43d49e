//! In-memory preference store
//!
//! Session-only storage. Used when no durable medium is configured and as
//! the default store in tests; values vanish when the process exits.

use crate::{PreferenceStore, StoreError};
use rustc_hash::FxHashMap;
use std::sync::Mutex;

/// Preference store keeping values in a process-local map
#[derive(Default)]
pub struct MemoryPreferenceStore {
    values: Mutex<FxHashMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
