//! SQLite settings backend with in-memory cache.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use super::{SettingsBackend, SettingsError};

/// SQLite-backed settings storage with a read-through cache.
pub struct SqliteBackend {
    conn: Mutex<Connection>,
    cache: Mutex<HashMap<String, String>>,
}

impl SqliteBackend {
    /// Create a new SQLite backend at the given path.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        Self::from_connection(Connection::open(path)?)
    }

    /// Create a new SQLite backend in memory (no file on disk).
    pub fn in_memory() -> Result<Self, SettingsError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, SettingsError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS settings (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;

        Ok(Self {
            conn: Mutex::new(conn),
            cache: Mutex::new(HashMap::new()),
        })
    }

    fn with_cache<R>(
        &self,
        f: impl FnOnce(&mut HashMap<String, String>) -> R,
    ) -> Result<R, SettingsError> {
        let mut cache = self.cache.lock().map_err(|_| SettingsError::Poisoned)?;
        Ok(f(&mut cache))
    }
}

impl SettingsBackend for SqliteBackend {
    fn get_raw(&self, key: &str) -> Result<Option<String>, SettingsError> {
        // Check cache first
        if let Some(value) = self.with_cache(|cache| cache.get(key).cloned())? {
            return Ok(Some(value));
        }

        // Cache miss - query DB
        let conn = self.conn.lock().map_err(|_| SettingsError::Poisoned)?;
        let mut stmt = conn.prepare("SELECT value FROM settings WHERE key = ?")?;
        let mut rows = stmt.query([key])?;
        let result = match rows.next()? {
            Some(row) => Some(row.get::<_, String>(0)?),
            None => None,
        };
        drop(rows);
        drop(stmt);
        drop(conn);

        // Populate cache
        if let Some(ref value) = result {
            self.with_cache(|cache| cache.insert(key.to_string(), value.clone()))?;
        }

        Ok(result)
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        let conn = self.conn.lock().map_err(|_| SettingsError::Poisoned)?;
        conn.execute(
            "INSERT INTO settings (key, value) VALUES (?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            rusqlite::params![key, value],
        )?;
        drop(conn);

        // Update cache
        self.with_cache(|cache| cache.insert(key.to_string(), value.to_string()))?;

        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), SettingsError> {
        let conn = self.conn.lock().map_err(|_| SettingsError::Poisoned)?;
        conn.execute("DELETE FROM settings WHERE key = ?", [key])?;
        drop(conn);

        // Remove from cache
        self.with_cache(|cache| cache.remove(key))?;

        Ok(())
    }

    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, SettingsError> {
        let pattern = format!("{}%", prefix);
        let conn = self.conn.lock().map_err(|_| SettingsError::Poisoned)?;
        let mut stmt = conn.prepare("SELECT key FROM settings WHERE key LIKE ?")?;
        let rows = stmt.query_map([&pattern], |row| row.get(0))?;
        let keys = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(keys)
    }
}
