//! Field path resolution over raw row values.

use serde_json::Value;

/// Prefix marking a column key as a custom property.
///
/// The marker is stripped before traversal; the remainder is the real path.
pub const CUSTOM_PROPERTY_MARKER: &str = "$.";

static NULL: Value = Value::Null;

/// Resolve a dotted field path against a row value.
///
/// Returns `Null` when any path segment is absent; never panics. Numeric
/// segments index into arrays.
pub fn resolve_path<'a>(value: &'a Value, path: &str) -> &'a Value {
    let path = path.strip_prefix(CUSTOM_PROPERTY_MARKER).unwrap_or(path);

    let mut current = value;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment).unwrap_or(&NULL),
            Value::Array(items) => segment
                .parse::<usize>()
                .ok()
                .and_then(|index| items.get(index))
                .unwrap_or(&NULL),
            _ => &NULL,
        };
    }
    current
}
