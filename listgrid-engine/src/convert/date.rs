//! Date and datetime cell converters.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::column::ColumnConfig;

use super::{CellConverter, ConvertContext, EMPTY_CELL, raw_display};

/// Pattern used both as parse fallback and as the display default.
pub const DEFAULT_DATE_TIME_PATTERN: &str = "DD-MM-YYYY, hh:mm:ss";

/// Renders date-only cells.
pub struct DateConverter;

impl CellConverter for DateConverter {
    fn view_type(&self) -> &'static str {
        "date"
    }

    fn convert(&self, raw: &Value, column: &ColumnConfig, _cx: &ConvertContext<'_>) -> String {
        convert_temporal(raw, column)
    }
}

/// Renders date + time cells.
pub struct DateTimeConverter;

impl CellConverter for DateTimeConverter {
    fn view_type(&self) -> &'static str {
        "datetime"
    }

    fn convert(&self, raw: &Value, column: &ColumnConfig, _cx: &ConvertContext<'_>) -> String {
        convert_temporal(raw, column)
    }
}

fn convert_temporal(raw: &Value, column: &ColumnConfig) -> String {
    if is_falsy(raw) {
        return EMPTY_CELL.to_string();
    }

    let Some(parsed) = parse_value(raw) else {
        // Keep the raw text visible rather than rendering a hole.
        return raw_display(raw);
    };

    let pattern = column.format.as_deref().unwrap_or(DEFAULT_DATE_TIME_PATTERN);
    parsed.format(&to_chrono_pattern(pattern)).to_string()
}

fn is_falsy(raw: &Value) -> bool {
    match raw {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::Bool(flag) => !flag,
        _ => false,
    }
}

fn parse_value(raw: &Value) -> Option<NaiveDateTime> {
    match raw {
        Value::String(text) => parse_text(text),
        // Numeric timestamps arrive as epoch milliseconds.
        Value::Number(number) => number
            .as_i64()
            .and_then(DateTime::from_timestamp_millis)
            .map(|dt| dt.naive_utc()),
        _ => None,
    }
}

fn parse_text(text: &str) -> Option<NaiveDateTime> {
    // Offset-aware forms keep their wall-clock time as written.
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_local());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    // Last resort: the legacy fallback pattern.
    NaiveDateTime::parse_from_str(text, &to_chrono_pattern(DEFAULT_DATE_TIME_PATTERN)).ok()
}

/// Legacy display tokens, longest first so `YYYY` wins over `YY`.
const TOKENS: &[(&str, &str)] = &[
    ("YYYY", "%Y"),
    ("MMMM", "%B"),
    ("MMM", "%b"),
    ("YY", "%y"),
    ("MM", "%m"),
    ("DD", "%d"),
    ("HH", "%H"),
    ("hh", "%H"),
    ("mm", "%M"),
    ("ss", "%S"),
    ("M", "%-m"),
    ("D", "%-d"),
    ("A", "%p"),
    ("a", "%P"),
];

/// Translate a legacy display pattern into chrono's strftime syntax.
///
/// Unknown characters pass through literally; `%` is escaped so the result
/// is always a valid chrono pattern.
fn to_chrono_pattern(legacy: &str) -> String {
    let mut out = String::with_capacity(legacy.len() * 2);
    let mut rest = legacy;

    'outer: while !rest.is_empty() {
        for (token, replacement) in TOKENS {
            if let Some(tail) = rest.strip_prefix(token) {
                out.push_str(replacement);
                rest = tail;
                continue 'outer;
            }
        }
        let ch = rest.chars().next().unwrap_or_default();
        if ch == '%' {
            out.push_str("%%");
        } else {
            out.push(ch);
        }
        rest = &rest[ch.len_utf8()..];
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_the_default_pattern() {
        assert_eq!(
            to_chrono_pattern(DEFAULT_DATE_TIME_PATTERN),
            "%d-%m-%Y, %H:%M:%S"
        );
    }

    #[test]
    fn translates_year_only() {
        assert_eq!(to_chrono_pattern("YYYY"), "%Y");
        assert_eq!(to_chrono_pattern("MM/YY"), "%m/%y");
    }

    #[test]
    fn escapes_percent_literals() {
        assert_eq!(to_chrono_pattern("YYYY %"), "%Y %%");
    }

    #[test]
    fn parses_legacy_fallback_text() {
        let parsed = parse_text("05-03-2024, 14:30:00").unwrap();
        assert_eq!(parsed.format("%Y-%m-%d %H:%M").to_string(), "2024-03-05 14:30");
    }
}
