//! Cell converters.
//!
//! A converter turns a raw cell value plus its column configuration into a
//! display string. Converters are strategy objects keyed by the column's
//! view-type tag; unknown tags fall back to the plain-text converter.

mod boolean;
mod date;
mod enums;
mod files;
mod number;
mod text;

pub use boolean::BooleanConverter;
pub use date::{DEFAULT_DATE_TIME_PATTERN, DateConverter, DateTimeConverter};
pub use enums::EnumConverter;
pub use files::RelatedFilesConverter;
pub use number::{CurrencyConverter, NumberConverter, PercentConverter};
pub use text::{TextConverter, UnderscoreToSpaceConverter};

use std::borrow::Cow;

use serde_json::Value;

use crate::column::ColumnConfig;
use crate::locale::{Locale, Translator};

/// Placeholder shown for absent values.
pub const EMPTY_CELL: &str = "-";

/// Per-render context shared by all converters.
pub struct ConvertContext<'a> {
    /// Active locale (drives numeric separators).
    pub locale: &'a Locale,
    /// Injected translation service.
    pub translator: &'a dyn Translator,
}

impl ConvertContext<'_> {
    /// Resolve a translation key, falling back to the given default.
    pub fn translate(&self, key: &str, fallback: &str) -> String {
        self.translator
            .resolve(key)
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// Converts a raw cell value into its display string.
pub trait CellConverter: Send + Sync {
    /// The view-type tag this converter advertises.
    fn view_type(&self) -> &'static str;

    /// Convert a raw value for the given column.
    ///
    /// Must not panic on malformed input; converters degrade to the empty
    /// placeholder or an error label instead.
    fn convert(&self, raw: &Value, column: &ColumnConfig, cx: &ConvertContext<'_>) -> String;
}

/// Registry of cell converters, resolved by view-type tag.
pub struct ConverterRegistry {
    converters: Vec<Box<dyn CellConverter>>,
    fallback: TextConverter,
}

impl ConverterRegistry {
    /// Create a registry with no converters beyond the text fallback.
    pub fn empty() -> Self {
        Self {
            converters: Vec::new(),
            fallback: TextConverter,
        }
    }

    /// Register an additional converter.
    ///
    /// A converter registered later wins over an earlier one with the same
    /// tag.
    pub fn register(&mut self, converter: Box<dyn CellConverter>) {
        self.converters.push(converter);
    }

    /// Resolve the converter for a column.
    ///
    /// The view type may carry a `:`-separated format suffix
    /// (`"date:YYYY"`); the suffix is split off here and becomes the
    /// `format` of a derived, transient copy of the column config. The
    /// shared config is never mutated.
    pub fn resolve<'a>(
        &'a self,
        column: &'a ColumnConfig,
    ) -> (&'a dyn CellConverter, Cow<'a, ColumnConfig>) {
        let (tag, suffix) = match column.view_type.split_once(':') {
            Some((tag, suffix)) if !suffix.is_empty() => (tag, Some(suffix)),
            Some((tag, _)) => (tag, None),
            None => (column.view_type.as_str(), None),
        };

        let converter: &dyn CellConverter = self
            .converters
            .iter()
            .rev()
            .find(|c| c.view_type() == tag)
            .map(|c| c.as_ref())
            .unwrap_or(&self.fallback);

        let effective = match suffix {
            Some(format) => {
                let mut copy = column.clone();
                copy.format = Some(format.to_string());
                Cow::Owned(copy)
            }
            None => Cow::Borrowed(column),
        };

        (converter, effective)
    }

    /// Resolve and convert in one step.
    pub fn convert(&self, raw: &Value, column: &ColumnConfig, cx: &ConvertContext<'_>) -> String {
        let (converter, effective) = self.resolve(column);
        converter.convert(raw, &effective, cx)
    }
}

impl Default for ConverterRegistry {
    /// Registry with the full built-in converter set.
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(TextConverter));
        registry.register(Box::new(UnderscoreToSpaceConverter));
        registry.register(Box::new(BooleanConverter));
        registry.register(Box::new(DateConverter));
        registry.register(Box::new(DateTimeConverter));
        registry.register(Box::new(NumberConverter));
        registry.register(Box::new(PercentConverter));
        registry.register(Box::new(CurrencyConverter));
        registry.register(Box::new(EnumConverter));
        registry.register(Box::new(RelatedFilesConverter));
        registry
    }
}

/// Display form of a JSON value used wherever a raw value "falls through".
pub(crate) fn raw_display(value: &Value) -> String {
    match value {
        Value::Null => EMPTY_CELL.to_string(),
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        other => other.to_string(),
    }
}
