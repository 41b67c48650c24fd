//! Case list example - drives the full engine without a view layer.
//!
//! Builds a small business-process case list, then walks through the things
//! a view would normally trigger: rendering pages, cycling a column sort,
//! filtering, and changing the page size (persisted in-memory here; swap in
//! `SqliteBackend` for a durable store).

use std::fs::File;

use log::LevelFilter;
use serde_json::json;
use simplelog::{Config, WriteLogger};

use listgrid_engine::prelude::*;

// =============================================================================
// Data
// =============================================================================

fn case_rows() -> Vec<RowItem> {
    let owners = ["Ada", "Grace", "Adele", "Margaret"];
    (0..12)
        .map(|i| {
            RowItem::new(json!({
                "reference": format!("C-{:03}", i),
                "owner": {"name": owners[i % owners.len()]},
                "active": i % 3 != 0,
                "budget": 1000.0 + i as f64 * 137.5,
                "createdOn": format!("2024-03-{:02}T09:15:00Z", i + 1),
            }))
        })
        .collect()
}

fn case_columns() -> Vec<ColumnConfig> {
    vec![
        ColumnConfig::new("reference", "Reference").sortable(),
        ColumnConfig::new("owner.name", "Owner").sortable(),
        ColumnConfig::new("active", "Active")
            .view_type("boolean")
            .labels(json!(["Ja", "Nee"])),
        ColumnConfig::new("budget", "Budget")
            .view_type("currency")
            .currency("EUR")
            .digits_info("1.2-2"),
        ColumnConfig::new("createdOn", "Created").view_type("date:DD-MM-YYYY"),
    ]
}

// =============================================================================
// Output
// =============================================================================

fn print_state(state: &ListViewState) {
    let labels: Vec<&str> = state.header.iter().map(|h| h.label.as_str()).collect();
    println!("{}", labels.join(" | "));
    for row in &state.rows {
        let cells: Vec<&str> = row
            .cells
            .iter()
            .map(|cell| cell.text().unwrap_or("<slot>"))
            .collect();
        println!("{}", cells.join(" | "));
    }
    println!(
        "page {} of {} ({} items, filter {:?})\n",
        state.pagination.page,
        state
            .pagination
            .collection_size
            .div_ceil(state.pagination.size.max(1))
            .max(1),
        state.pagination.collection_size,
        state.filter,
    );
}

// =============================================================================
// Main
// =============================================================================

fn main() {
    // Initialize file logging
    if let Ok(log_file) = File::create("cases.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let settings = SettingsProvider::new(MemoryBackend::new());
    let mut list = ListController::new("cases", Some(settings)).with_columns(case_columns());
    list.set_rows(case_rows());

    println!("== first page ==");
    print_state(&list.view_state());

    println!("== page size 5, second page ==");
    list.set_page_size(5);
    list.set_page(2);
    print_state(&list.view_state());
    list.take_events();

    println!("== sort cycle on Reference ==");
    list.activate_column("reference");
    for event in list.take_events() {
        println!("event: {event:?}");
    }
    print_state(&list.view_state());

    println!("== filter 'grace' ==");
    list.set_page(1);
    list.set_filter("grace");
    print_state(&list.view_state());

    println!("== filter cleared ==");
    list.set_filter("");
    print_state(&list.view_state());
}
