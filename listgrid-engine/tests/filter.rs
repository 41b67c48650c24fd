use std::borrow::Cow;

use serde_json::json;

use listgrid_engine::column::ColumnConfig;
use listgrid_engine::filter::filter_rows;
use listgrid_engine::render::{ColumnRenderer, ListOptions, RenderedRow};
use listgrid_engine::row::RowItem;

fn matrix() -> Vec<RenderedRow> {
    let rows = vec![
        RowItem::new(json!({"reference": "C-001", "owner": "Ada Lovelace"})),
        RowItem::new(json!({"reference": "C-002", "owner": "Grace Hopper"})),
        RowItem::new(json!({"reference": "C-003", "owner": "Adele Goldberg"})),
    ];
    let columns = vec![
        ColumnConfig::new("reference", "Reference"),
        ColumnConfig::new("owner", "Owner"),
    ];
    ColumnRenderer::new().render(&rows, &columns, &ListOptions::default())
}

#[test]
fn test_empty_needle_is_identity() {
    let rows = matrix();
    let filtered = filter_rows(&rows, "");
    assert!(matches!(&filtered, Cow::Borrowed(_)));
    assert_eq!(filtered.as_ref(), rows.as_slice());
}

#[test]
fn test_case_insensitive_substring() {
    let rows = matrix();
    let filtered = filter_rows(&rows, "ADA");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].source_index, 0);
}

#[test]
fn test_matches_any_cell() {
    let rows = matrix();
    let filtered = filter_rows(&rows, "c-00");
    assert_eq!(filtered.len(), 3);

    let filtered = filter_rows(&rows, "hopper");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].source_index, 1);
}

#[test]
fn test_no_match_yields_empty() {
    let rows = matrix();
    let filtered = filter_rows(&rows, "zzz");
    assert!(filtered.is_empty());
}

#[test]
fn test_idempotent() {
    let rows = matrix();
    let once = filter_rows(&rows, "ade");
    let twice = filter_rows(&once, "ade");
    assert_eq!(once.as_ref(), twice.as_ref());
}

#[test]
fn test_structural_cells_never_match() {
    let rows = vec![RowItem::new(json!({"reference": "C-001"}))];
    let columns = vec![ColumnConfig::new("reference", "Reference")];
    let options = ListOptions {
        actions: true,
        movable_rows: true,
        ..Default::default()
    };
    let matrix = ColumnRenderer::new().render(&rows, &columns, &options);

    // "Actions" is a structural kind, not display text.
    let filtered = filter_rows(&matrix, "actions");
    assert!(filtered.is_empty());
}
