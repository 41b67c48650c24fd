//! Boolean cell converter.

use serde_json::Value;

use crate::column::ColumnConfig;
use crate::locale::keys;

use super::{CellConverter, ConvertContext, EMPTY_CELL};

/// Renders truthy/falsy values with configurable labels.
///
/// Label resolution order: an `enum` array of length > 1 (index 0 truthy,
/// index 1 falsy), the first two entries of an `enum` object, then the
/// translated Yes/No pair.
pub struct BooleanConverter;

impl CellConverter for BooleanConverter {
    fn view_type(&self) -> &'static str {
        "boolean"
    }

    fn convert(&self, raw: &Value, column: &ColumnConfig, cx: &ConvertContext<'_>) -> String {
        if raw.is_null() {
            return EMPTY_CELL.to_string();
        }
        let truthy = is_truthy(raw);

        if let Some((yes, no)) = configured_labels(column) {
            return if truthy { yes } else { no };
        }

        if truthy {
            cx.translate(keys::YES, "Yes")
        } else {
            cx.translate(keys::NO, "No")
        }
    }
}

fn is_truthy(raw: &Value) -> bool {
    match raw {
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => text == "true" || text == "1",
        _ => false,
    }
}

fn configured_labels(column: &ColumnConfig) -> Option<(String, String)> {
    match column.labels.as_ref()? {
        Value::Array(items) if items.len() > 1 => {
            Some((label_text(&items[0]), label_text(&items[1])))
        }
        Value::Object(map) if map.len() > 1 => {
            let mut values = map.values();
            let yes = label_text(values.next()?);
            let no = label_text(values.next()?);
            Some((yes, no))
        }
        _ => None,
    }
}

fn label_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
