use serde_json::{Value, json};

use listgrid_engine::column::ColumnConfig;
use listgrid_engine::convert::{ConvertContext, ConverterRegistry, EMPTY_CELL};
use listgrid_engine::locale::{DefaultTranslator, Locale};

fn convert_with_locale(column: &ColumnConfig, raw: Value, locale: Locale) -> String {
    let registry = ConverterRegistry::default();
    let translator = DefaultTranslator;
    let cx = ConvertContext {
        locale: &locale,
        translator: &translator,
    };
    registry.convert(&raw, column, &cx)
}

fn convert(column: &ColumnConfig, raw: Value) -> String {
    convert_with_locale(column, raw, Locale::default())
}

// -----------------------------------------------------------------------------
// Text
// -----------------------------------------------------------------------------

#[test]
fn test_text_passthrough() {
    let column = ColumnConfig::new("name", "Name");
    assert_eq!(convert(&column, json!("Ada")), "Ada");
}

#[test]
fn test_text_null_is_placeholder() {
    let column = ColumnConfig::new("name", "Name");
    assert_eq!(convert(&column, Value::Null), EMPTY_CELL);
}

#[test]
fn test_unknown_view_type_falls_back_to_text() {
    let column = ColumnConfig::new("name", "Name").view_type("holographic");
    assert_eq!(convert(&column, json!("Ada")), "Ada");
}

#[test]
fn test_underscore_to_space() {
    let column = ColumnConfig::new("status", "Status").view_type("underscore-to-space");
    assert_eq!(convert(&column, json!("in_progress")), "in progress");
}

// -----------------------------------------------------------------------------
// Boolean
// -----------------------------------------------------------------------------

#[test]
fn test_boolean_with_label_array() {
    let column = ColumnConfig::new("active", "Active")
        .view_type("boolean")
        .labels(json!(["Ja", "Nee"]));
    assert_eq!(convert(&column, json!(true)), "Ja");
    assert_eq!(convert(&column, json!(false)), "Nee");
}

#[test]
fn test_boolean_with_label_map() {
    let column = ColumnConfig::new("active", "Active")
        .view_type("boolean")
        .labels(json!({"on": "Aan", "off": "Uit"}));
    assert_eq!(convert(&column, json!(true)), "Aan");
    assert_eq!(convert(&column, json!(false)), "Uit");
}

#[test]
fn test_boolean_defaults_to_translated_yes_no() {
    let column = ColumnConfig::new("active", "Active").view_type("boolean");
    assert_eq!(convert(&column, json!(true)), "Yes");
    assert_eq!(convert(&column, json!(false)), "No");
}

#[test]
fn test_boolean_single_label_falls_back() {
    // One label is not enough for a yes/no pair.
    let column = ColumnConfig::new("active", "Active")
        .view_type("boolean")
        .labels(json!(["Ja"]));
    assert_eq!(convert(&column, json!(true)), "Yes");
}

// -----------------------------------------------------------------------------
// Date / datetime
// -----------------------------------------------------------------------------

#[test]
fn test_date_default_pattern() {
    let column = ColumnConfig::new("created", "Created").view_type("date");
    assert_eq!(
        convert(&column, json!("2024-03-05T14:30:00Z")),
        "05-03-2024, 14:30:00"
    );
}

#[test]
fn test_datetime_explicit_format() {
    let column = ColumnConfig::new("created", "Created")
        .view_type("datetime")
        .format("YYYY-MM-DD");
    assert_eq!(convert(&column, json!("2024-03-05T14:30:00Z")), "2024-03-05");
}

#[test]
fn test_date_view_type_suffix_becomes_format() {
    let column = ColumnConfig::new("created", "Created").view_type("date:YYYY");
    assert_eq!(convert(&column, json!("2024-03-05T14:30:00Z")), "2024");
}

#[test]
fn test_view_type_suffix_does_not_mutate_shared_config() {
    let column = ColumnConfig::new("created", "Created").view_type("date:YYYY");
    let _ = convert(&column, json!("2024-03-05T14:30:00Z"));
    // The shared config is untouched; the suffix lives in a transient copy.
    assert_eq!(column.view_type, "date:YYYY");
    assert_eq!(column.format, None);
}

#[test]
fn test_date_falsy_is_placeholder() {
    let column = ColumnConfig::new("created", "Created").view_type("date");
    assert_eq!(convert(&column, Value::Null), EMPTY_CELL);
    assert_eq!(convert(&column, json!("")), EMPTY_CELL);
}

#[test]
fn test_date_legacy_fallback_parse() {
    let column = ColumnConfig::new("created", "Created")
        .view_type("date")
        .format("YYYY");
    assert_eq!(convert(&column, json!("05-03-2024, 14:30:00")), "2024");
}

#[test]
fn test_date_only_string() {
    let column = ColumnConfig::new("created", "Created").view_type("date");
    assert_eq!(convert(&column, json!("2024-03-05")), "05-03-2024, 00:00:00");
}

// -----------------------------------------------------------------------------
// Number / percent / currency
// -----------------------------------------------------------------------------

#[test]
fn test_number_with_digits_info() {
    let column = ColumnConfig::new("total", "Total")
        .view_type("number")
        .digits_info("1.2-2");
    assert_eq!(convert(&column, json!(1234.5)), "1,234.50");
}

#[test]
fn test_number_locale_separators() {
    let column = ColumnConfig::new("total", "Total")
        .view_type("number")
        .digits_info("1.2-2");
    assert_eq!(
        convert_with_locale(&column, json!(1234.5), Locale::new("nl")),
        "1.234,50"
    );
}

#[test]
fn test_percent_without_digits_info_keeps_value() {
    let column = ColumnConfig::new("rate", "Rate").view_type("percent");
    assert_eq!(convert(&column, json!(50)), "50%");
}

#[test]
fn test_percent_with_digits_info_divides_by_hundred() {
    // Legacy quirk: the rescale is coupled to digitsInfo being present.
    let column = ColumnConfig::new("rate", "Rate")
        .view_type("percent")
        .digits_info("1.0-2");
    assert_eq!(convert(&column, json!(50)), "0.5%");
}

#[test]
fn test_percent_malformed_digits_info_is_error_label() {
    let column = ColumnConfig::new("rate", "Rate")
        .view_type("percent")
        .digits_info("bogus");
    assert_eq!(convert(&column, json!(50)), "Invalid number");
}

#[test]
fn test_currency_symbol_display() {
    let column = ColumnConfig::new("budget", "Budget")
        .view_type("currency")
        .currency("EUR");
    assert_eq!(convert(&column, json!(1234.5)), "\u{20ac}1,234.50");
}

#[test]
fn test_currency_code_display() {
    let column = ColumnConfig::new("budget", "Budget")
        .view_type("currency")
        .currency("EUR")
        .display("code");
    assert_eq!(convert(&column, json!(1234.5)), "EUR 1,234.50");
}

#[test]
fn test_currency_unknown_code_falls_back_to_code() {
    let column = ColumnConfig::new("budget", "Budget")
        .view_type("currency")
        .currency("SEK");
    assert_eq!(convert(&column, json!(10)), "SEK 10.00");
}

// -----------------------------------------------------------------------------
// Enum
// -----------------------------------------------------------------------------

#[test]
fn test_enum_array_indexed_by_value() {
    let column = ColumnConfig::new("state", "State")
        .view_type("enum")
        .labels(json!(["Open", "Closed"]));
    assert_eq!(convert(&column, json!(1)), "Closed");
}

#[test]
fn test_enum_map_keyed_by_value() {
    let column = ColumnConfig::new("state", "State")
        .view_type("enum")
        .labels(json!({"open": "Open", "closed": "Closed"}));
    assert_eq!(convert(&column, json!("closed")), "Closed");
}

#[test]
fn test_enum_unmatched_falls_through_to_raw() {
    let column = ColumnConfig::new("state", "State")
        .view_type("enum")
        .labels(json!(["Open", "Closed"]));
    assert_eq!(convert(&column, json!(7)), "7");
    assert_eq!(convert(&column, json!("pending")), "pending");
}

// -----------------------------------------------------------------------------
// Related files
// -----------------------------------------------------------------------------

#[test]
fn test_related_files_joins_names() {
    let column = ColumnConfig::new("attachments", "Attachments").view_type("related-files");
    let raw = json!([{"name": "report.pdf"}, {"fileName": "notes.docx"}, "photo.png"]);
    assert_eq!(convert(&column, raw), "report.pdf, notes.docx, photo.png");
}

#[test]
fn test_related_files_empty_is_placeholder() {
    let column = ColumnConfig::new("attachments", "Attachments").view_type("related-files");
    assert_eq!(convert(&column, json!([])), EMPTY_CELL);
}
