//! Row reorder example - simulates a pointer drag over the list.
//!
//! The protocol only sees pointer samples and frame ticks; the "view" here
//! is a printed order array. Rows are 20 units tall, stacked from 0.

use std::fs::File;

use log::LevelFilter;
use simplelog::{Config, WriteLogger};

use listgrid_engine::prelude::*;

const ROW_HEIGHT: f64 = 20.0;

fn main() {
    // Initialize file logging
    if let Ok(log_file) = File::create("reorder.log") {
        let _ = WriteLogger::init(LevelFilter::Trace, Config::default(), log_file);
    }

    let mut items = vec!["alpha", "bravo", "charlie", "delta", "echo"];
    println!("before: {items:?}");

    let mut reorder = RowReorder::new();
    reorder.start_drag(50.0, 2, uniform_bands(items.len(), 0.0, ROW_HEIGHT));

    // Drag "charlie" up to the top, one row per settled swap.
    for y in [30.0, 10.0] {
        reorder.pointer_move(y);
        println!("order: {:?}", reorder.order().unwrap());
        // Two frame boundaries settle the swap before the next one.
        reorder.frame();
        reorder.frame();
    }

    let result = reorder.release().expect("drag was active");
    println!(
        "moved {} -> {} ({})",
        result.from_index,
        result.to_index,
        if result.changed() { "changed" } else { "unchanged" }
    );

    apply_move(&mut items, result.from_index, result.to_index);
    println!("after: {items:?}");
}
