//! Column configuration.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Column configuration.
///
/// Columns define the structure of the list: which field each column reads,
/// the header label, the view type selecting a cell converter, and the
/// converter parameters. Configs are owned by the list's caller and treated
/// as immutable during a render pass.
///
/// # Examples
///
/// ```ignore
/// let columns = vec![
///     ColumnConfig::new("reference", "Reference").sortable(),
///     ColumnConfig::new("createdOn", "Created").view_type("datetime").sortable(),
///     ColumnConfig::new("budget", "Budget").view_type("currency").currency("EUR"),
/// ];
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnConfig {
    /// Field path into the row value. Supports dotted nesting and the
    /// `$.` custom-property marker.
    pub key: String,
    /// Column header label.
    pub label: String,
    /// Converter tag, optionally suffixed with a format (`"date:YYYY"`).
    #[serde(default = "default_view_type")]
    pub view_type: String,
    /// Explicit display format (converter-specific).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Value labels for boolean/enum cells: a JSON array or object.
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Value>,
    /// ISO currency code for currency cells.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    /// Digit spec for numeric cells: `minInt.minFrac-maxFrac`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digits_info: Option<String>,
    /// Currency display mode: `"symbol"` (default) or `"code"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    /// Whether header activation cycles the sort state.
    #[serde(default)]
    pub sortable: bool,
    /// Opaque render-override slot name. When set, the cell renders as a
    /// structural template cell instead of converted text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

fn default_view_type() -> String {
    "text".to_string()
}

impl ColumnConfig {
    /// Create a new text column.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            view_type: default_view_type(),
            format: None,
            labels: None,
            currency_code: None,
            digits_info: None,
            display: None,
            sortable: false,
            template: None,
        }
    }

    /// Set the converter tag.
    pub fn view_type(mut self, tag: impl Into<String>) -> Self {
        self.view_type = tag.into();
        self
    }

    /// Set an explicit display format.
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Set value labels for boolean/enum cells.
    pub fn labels(mut self, labels: Value) -> Self {
        self.labels = Some(labels);
        self
    }

    /// Set the currency code (and switch nothing else; combine with
    /// `.view_type("currency")`).
    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.currency_code = Some(code.into());
        self
    }

    /// Set the digit spec (`minInt.minFrac-maxFrac`).
    pub fn digits_info(mut self, digits: impl Into<String>) -> Self {
        self.digits_info = Some(digits.into());
        self
    }

    /// Set the currency display mode (`"symbol"` or `"code"`).
    pub fn display(mut self, display: impl Into<String>) -> Self {
        self.display = Some(display.into());
        self
    }

    /// Make the column sortable.
    ///
    /// Sortable columns respond to header activation by cycling the
    /// sort state machine.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Render this column through an opaque template slot.
    pub fn template(mut self, slot: impl Into<String>) -> Self {
        self.template = Some(slot.into());
        self
    }
}
