//! Row items.

use serde_json::Value;

use crate::fields::resolve_path;

/// A single row: an opaque domain object plus list-level flags.
///
/// Identity is positional (index within the current set) unless the caller
/// tracks a stable id inside the value itself.
#[derive(Debug, Clone, PartialEq)]
pub struct RowItem {
    /// The raw domain object (arbitrary shape).
    pub value: Value,
    /// Locked rows surface a lock-indicator cell in the rendered matrix.
    pub locked: bool,
    /// Free-form tags, surfaced to trailing template cells.
    pub tags: Vec<String>,
}

impl RowItem {
    /// Create a row from a raw value.
    pub fn new(value: Value) -> Self {
        Self {
            value,
            locked: false,
            tags: Vec::new(),
        }
    }

    /// Mark the row as locked.
    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    /// Attach tags to the row.
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Resolve a field path against the row value.
    pub fn field(&self, path: &str) -> &Value {
        resolve_path(&self.value, path)
    }
}

impl From<Value> for RowItem {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}
