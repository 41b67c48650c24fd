//! Numeric cell converters: number, percent, currency.

use std::str::FromStr;

use log::warn;
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;

use crate::column::ColumnConfig;
use crate::locale::{Locale, keys};

use super::{CellConverter, ConvertContext, EMPTY_CELL, raw_display};

/// Parsed digit spec: `minInt.minFrac-maxFrac` (e.g. `"1.2-2"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DigitsInfo {
    min_integer: usize,
    min_fraction: usize,
    max_fraction: usize,
}

impl DigitsInfo {
    const fn new(min_integer: usize, min_fraction: usize, max_fraction: usize) -> Self {
        Self {
            min_integer,
            min_fraction,
            max_fraction,
        }
    }

    /// Parse a digit spec. Returns `None` for anything malformed.
    pub(crate) fn parse(spec: &str) -> Option<Self> {
        let (integer, fraction) = spec.split_once('.')?;
        let (min_fraction, max_fraction) = fraction.split_once('-')?;
        let parsed = Self {
            min_integer: integer.parse().ok()?,
            min_fraction: min_fraction.parse().ok()?,
            max_fraction: max_fraction.parse().ok()?,
        };
        (parsed.min_fraction <= parsed.max_fraction).then_some(parsed)
    }
}

fn parse_decimal(raw: &Value) -> Option<Decimal> {
    let text = match raw {
        Value::Number(number) => number.to_string(),
        Value::String(text) if !text.trim().is_empty() => text.trim().to_string(),
        _ => return None,
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}

/// Render a decimal with digit padding and locale separators.
fn format_decimal(value: Decimal, digits: &DigitsInfo, locale: &Locale) -> String {
    let rounded = value
        .round_dp_with_strategy(digits.max_fraction as u32, RoundingStrategy::MidpointAwayFromZero)
        .normalize();

    let text = rounded.to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer.to_string(), fraction.to_string()),
        None => (unsigned.to_string(), String::new()),
    };

    let mut integer = integer;
    while integer.len() < digits.min_integer {
        integer.insert(0, '0');
    }

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    let offset = integer.len();
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (offset - i) % 3 == 0 {
            grouped.push(locale.group_separator());
        }
        grouped.push(ch);
    }

    let mut fraction = fraction;
    while fraction.len() < digits.min_fraction {
        fraction.push('0');
    }

    if fraction.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}{}{fraction}", locale.decimal_separator())
    }
}

fn column_digits(column: &ColumnConfig, default: DigitsInfo) -> DigitsInfo {
    match column.digits_info.as_deref() {
        Some(spec) => DigitsInfo::parse(spec).unwrap_or_else(|| {
            warn!("column '{}': malformed digitsInfo '{}'", column.key, spec);
            default
        }),
        None => default,
    }
}

/// Locale-aware decimal display.
pub struct NumberConverter;

impl NumberConverter {
    const DEFAULT_DIGITS: DigitsInfo = DigitsInfo::new(1, 0, 3);
}

impl CellConverter for NumberConverter {
    fn view_type(&self) -> &'static str {
        "number"
    }

    fn convert(&self, raw: &Value, column: &ColumnConfig, cx: &ConvertContext<'_>) -> String {
        let Some(value) = parse_decimal(raw) else {
            return raw_display(raw);
        };
        let digits = column_digits(column, Self::DEFAULT_DIGITS);
        format_decimal(value, &digits, cx.locale)
    }
}

/// Percentage display.
///
/// Legacy quirk, preserved: the raw value is divided by 100 only when the
/// column carries a `digitsInfo`; a malformed `digitsInfo` renders the
/// translated numeric-error label instead of failing the render pass.
pub struct PercentConverter;

impl PercentConverter {
    const DEFAULT_DIGITS: DigitsInfo = DigitsInfo::new(1, 0, 0);
}

impl CellConverter for PercentConverter {
    fn view_type(&self) -> &'static str {
        "percent"
    }

    fn convert(&self, raw: &Value, column: &ColumnConfig, cx: &ConvertContext<'_>) -> String {
        if raw.is_null() {
            return EMPTY_CELL.to_string();
        }
        let Some(value) = parse_decimal(raw) else {
            return raw_display(raw);
        };

        let (value, digits) = match column.digits_info.as_deref() {
            Some(spec) => match DigitsInfo::parse(spec) {
                Some(digits) => (value / Decimal::from(100), digits),
                None => return cx.translate(keys::NUMERIC_ERROR, "Invalid number"),
            },
            None => (value, Self::DEFAULT_DIGITS),
        };

        format!("{}%", format_decimal(value, &digits, cx.locale))
    }
}

/// Currency display with symbol or code prefix.
pub struct CurrencyConverter;

impl CurrencyConverter {
    const DEFAULT_DIGITS: DigitsInfo = DigitsInfo::new(1, 2, 2);
    const DEFAULT_CODE: &'static str = "EUR";
}

impl CellConverter for CurrencyConverter {
    fn view_type(&self) -> &'static str {
        "currency"
    }

    fn convert(&self, raw: &Value, column: &ColumnConfig, cx: &ConvertContext<'_>) -> String {
        let Some(value) = parse_decimal(raw) else {
            return raw_display(raw);
        };
        let digits = column_digits(column, Self::DEFAULT_DIGITS);
        let amount = format_decimal(value, &digits, cx.locale);

        let code = column.currency_code.as_deref().unwrap_or(Self::DEFAULT_CODE);
        match column.display.as_deref() {
            Some("code") => format!("{code} {amount}"),
            _ => match currency_symbol(code) {
                Some(symbol) => format!("{symbol}{amount}"),
                None => format!("{code} {amount}"),
            },
        }
    }
}

fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "EUR" => Some("\u{20ac}"),
        "USD" => Some("$"),
        "GBP" => Some("\u{a3}"),
        "JPY" => Some("\u{a5}"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_digit_specs() {
        assert_eq!(DigitsInfo::parse("1.2-2"), Some(DigitsInfo::new(1, 2, 2)));
        assert_eq!(DigitsInfo::parse("3.0-4"), Some(DigitsInfo::new(3, 0, 4)));
        assert_eq!(DigitsInfo::parse("1.4-2"), None);
        assert_eq!(DigitsInfo::parse("bogus"), None);
        assert_eq!(DigitsInfo::parse("1.2"), None);
        assert_eq!(DigitsInfo::parse(""), None);
    }

    #[test]
    fn formats_with_grouping_and_padding() {
        let locale = Locale::default();
        let value = Decimal::from_str("1234.5").unwrap();
        let formatted = format_decimal(value, &DigitsInfo::new(1, 2, 2), &locale);
        assert_eq!(formatted, "1,234.50");
    }

    #[test]
    fn formats_with_dutch_separators() {
        let locale = Locale::new("nl");
        let value = Decimal::from_str("1234.5").unwrap();
        let formatted = format_decimal(value, &DigitsInfo::new(1, 2, 2), &locale);
        assert_eq!(formatted, "1.234,50");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        let locale = Locale::default();
        let value = Decimal::from_str("2.345").unwrap();
        let formatted = format_decimal(value, &DigitsInfo::new(1, 0, 2), &locale);
        assert_eq!(formatted, "2.35");
    }

    #[test]
    fn pads_minimum_integer_digits() {
        let locale = Locale::default();
        let value = Decimal::from_str("7").unwrap();
        let formatted = format_decimal(value, &DigitsInfo::new(3, 0, 0), &locale);
        assert_eq!(formatted, "007");
    }
}
