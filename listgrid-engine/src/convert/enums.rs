//! Enum cell converter.

use serde_json::Value;

use crate::column::ColumnConfig;

use super::{CellConverter, ConvertContext, raw_display};

/// Maps raw values through the column's `enum` labels.
///
/// An array is indexed by the raw integral value; an object is keyed by the
/// raw value's string form. Unmatched values fall through to the raw value.
pub struct EnumConverter;

impl CellConverter for EnumConverter {
    fn view_type(&self) -> &'static str {
        "enum"
    }

    fn convert(&self, raw: &Value, column: &ColumnConfig, _cx: &ConvertContext<'_>) -> String {
        match column.labels.as_ref() {
            Some(Value::Array(items)) => index_of(raw)
                .and_then(|index| items.get(index))
                .map(label_text)
                .unwrap_or_else(|| raw_display(raw)),
            Some(Value::Object(map)) => map
                .get(&key_of(raw))
                .map(label_text)
                .unwrap_or_else(|| raw_display(raw)),
            _ => raw_display(raw),
        }
    }
}

fn index_of(raw: &Value) -> Option<usize> {
    match raw {
        Value::Number(number) => number.as_u64().map(|n| n as usize),
        Value::String(text) => text.parse().ok(),
        _ => None,
    }
}

fn key_of(raw: &Value) -> String {
    match raw {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn label_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
