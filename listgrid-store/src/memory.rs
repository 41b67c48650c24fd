//! In-memory settings backend.

use std::collections::HashMap;
use std::sync::Mutex;

use super::{SettingsBackend, SettingsError};

/// In-memory settings storage.
///
/// Nothing is persisted across process restarts. Useful for tests and for
/// hosts that do not want settings written to disk.
#[derive(Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    /// Create a new empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }

    fn with_entries<R>(
        &self,
        f: impl FnOnce(&mut HashMap<String, String>) -> R,
    ) -> Result<R, SettingsError> {
        let mut entries = self.entries.lock().map_err(|_| SettingsError::Poisoned)?;
        Ok(f(&mut entries))
    }
}

impl SettingsBackend for MemoryBackend {
    fn get_raw(&self, key: &str) -> Result<Option<String>, SettingsError> {
        self.with_entries(|entries| entries.get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.with_entries(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn delete(&self, key: &str) -> Result<(), SettingsError> {
        self.with_entries(|entries| {
            entries.remove(key);
        })
    }

    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, SettingsError> {
        self.with_entries(|entries| {
            let mut keys: Vec<String> = entries
                .keys()
                .filter(|key| key.starts_with(prefix))
                .cloned()
                .collect();
            keys.sort();
            keys
        })
    }
}
