//! Plain-text converters.

use serde_json::Value;

use crate::column::ColumnConfig;

use super::{CellConverter, ConvertContext, raw_display};

/// Identity passthrough; absent values render as `-`.
///
/// Also the registry fallback for unknown view types.
pub struct TextConverter;

impl CellConverter for TextConverter {
    fn view_type(&self) -> &'static str {
        "text"
    }

    fn convert(&self, raw: &Value, _column: &ColumnConfig, _cx: &ConvertContext<'_>) -> String {
        raw_display(raw)
    }
}

/// Passthrough that replaces underscores with spaces.
///
/// Used for machine-keyed values (`"in_progress"` -> `"in progress"`).
pub struct UnderscoreToSpaceConverter;

impl CellConverter for UnderscoreToSpaceConverter {
    fn view_type(&self) -> &'static str {
        "underscore-to-space"
    }

    fn convert(&self, raw: &Value, _column: &ColumnConfig, _cx: &ConvertContext<'_>) -> String {
        raw_display(raw).replace('_', " ")
    }
}
