//! Related-files cell converter.

use serde_json::Value;

use crate::column::ColumnConfig;

use super::{CellConverter, ConvertContext, EMPTY_CELL, raw_display};

/// Renders a collection of file references as a comma-separated name list.
///
/// Accepts plain strings or objects carrying a `name`/`fileName` member.
pub struct RelatedFilesConverter;

impl CellConverter for RelatedFilesConverter {
    fn view_type(&self) -> &'static str {
        "related-files"
    }

    fn convert(&self, raw: &Value, _column: &ColumnConfig, _cx: &ConvertContext<'_>) -> String {
        let Value::Array(items) = raw else {
            return raw_display(raw);
        };
        if items.is_empty() {
            return EMPTY_CELL.to_string();
        }
        items
            .iter()
            .map(file_name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn file_name(item: &Value) -> String {
    match item {
        Value::String(name) => name.clone(),
        Value::Object(map) => map
            .get("name")
            .or_else(|| map.get("fileName"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| item.to_string()),
        other => other.to_string(),
    }
}
