//! Durable settings storage for list components.
//!
//! A small typed key-value layer: a [`SettingsBackend`] trait for raw string
//! storage, a SQLite implementation with a read-through cache, an in-memory
//! implementation for tests and hosts without disk access, and a
//! [`SettingsProvider`] that adds typed (de)serialization on top.

mod backend;
mod memory;
mod sqlite;

pub mod paths;

pub use backend::SettingsBackend;
pub use memory::MemoryBackend;
pub use sqlite::SqliteBackend;

use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Settings error type.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("serialization error: {0}")]
    Serialization(serde_json::Error),
    #[error("deserialization error: {0}")]
    Deserialization(serde_json::Error),
    #[error("storage lock poisoned")]
    Poisoned,
}

/// Typed settings provider.
///
/// Wraps a `SettingsBackend` with typed serialization. Values are stored as
/// JSON text, so a persisted integer is readable as a plain decimal string
/// by any other consumer of the store.
#[derive(Clone)]
pub struct SettingsProvider {
    backend: Arc<dyn SettingsBackend>,
}

impl SettingsProvider {
    /// Create a new settings provider with the given backend.
    pub fn new(backend: impl SettingsBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Create a provider over a shared backend handle.
    pub fn from_arc(backend: Arc<dyn SettingsBackend>) -> Self {
        Self { backend }
    }

    /// Get a typed value for a key.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, SettingsError> {
        match self.backend.get_raw(key)? {
            Some(text) => Ok(Some(
                serde_json::from_str(&text).map_err(SettingsError::Deserialization)?,
            )),
            None => Ok(None),
        }
    }

    /// Get a typed value for a key, returning a default if not found.
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T, SettingsError> {
        Ok(self.get(key)?.unwrap_or(default))
    }

    /// Set a typed value for a key.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), SettingsError> {
        let text = serde_json::to_string(value).map_err(SettingsError::Serialization)?;
        self.backend.set_raw(key, &text)
    }

    /// Delete a key.
    pub fn delete(&self, key: &str) -> Result<(), SettingsError> {
        self.backend.delete(key)
    }

    /// Get all keys matching a prefix.
    pub fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, SettingsError> {
        self.backend.keys_with_prefix(prefix)
    }
}
