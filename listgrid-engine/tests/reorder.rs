use listgrid_engine::reorder::{RowReorder, apply_move, uniform_bands};

const ROW_HEIGHT: f64 = 20.0;

fn settle(reorder: &mut RowReorder) {
    reorder.frame();
    reorder.frame();
}

#[test]
fn test_drag_up_to_top() {
    let mut reorder = RowReorder::new();
    reorder.start_drag(50.0, 2, uniform_bands(5, 0.0, ROW_HEIGHT));

    // Up past row 1, settle, then up past row 0.
    reorder.pointer_move(30.0);
    assert_eq!(reorder.order(), Some([0, 2, 1, 3, 4].as_slice()));
    settle(&mut reorder);
    reorder.pointer_move(10.0);
    assert_eq!(reorder.order(), Some([2, 0, 1, 3, 4].as_slice()));

    let result = reorder.release().unwrap();
    assert_eq!(result.from_index, 2);
    assert_eq!(result.to_index, 0);
    assert_eq!(result.order, vec![2, 0, 1, 3, 4]);
    assert!(result.changed());

    // Everything is torn down after release.
    assert!(!reorder.is_dragging());
    assert!(reorder.order().is_none());
    assert!(!reorder.swap_in_flight());
}

#[test]
fn test_drag_down() {
    let mut reorder = RowReorder::new();
    reorder.start_drag(5.0, 0, uniform_bands(3, 0.0, ROW_HEIGHT));

    reorder.pointer_move(25.0);
    assert_eq!(reorder.order(), Some([1, 0, 2].as_slice()));

    let result = reorder.release().unwrap();
    assert_eq!(result.from_index, 0);
    assert_eq!(result.to_index, 1);
}

#[test]
fn test_down_onto_last_handle_is_noop() {
    let mut reorder = RowReorder::new();
    reorder.start_drag(5.0, 0, uniform_bands(3, 0.0, ROW_HEIGHT));

    // The hovered handle has no successor: nothing moves, no swap starts.
    reorder.pointer_move(45.0);
    assert_eq!(reorder.order(), Some([0, 1, 2].as_slice()));
    assert!(!reorder.swap_in_flight());
}

#[test]
fn test_swap_while_in_flight_is_dropped() {
    let mut reorder = RowReorder::new();
    reorder.start_drag(50.0, 2, uniform_bands(5, 0.0, ROW_HEIGHT));

    reorder.pointer_move(30.0);
    assert!(reorder.swap_in_flight());

    // Still settling: this sample is dropped, not queued.
    reorder.pointer_move(10.0);
    assert_eq!(reorder.order(), Some([0, 2, 1, 3, 4].as_slice()));

    // One frame is not enough.
    reorder.frame();
    reorder.pointer_move(10.0);
    assert_eq!(reorder.order(), Some([0, 2, 1, 3, 4].as_slice()));

    // After the second frame the next swap is accepted.
    reorder.frame();
    assert!(!reorder.swap_in_flight());
    reorder.pointer_move(10.0);
    assert_eq!(reorder.order(), Some([2, 0, 1, 3, 4].as_slice()));
}

#[test]
fn test_pointer_outside_bands_only_updates_direction() {
    let mut reorder = RowReorder::new();
    reorder.start_drag(50.0, 2, uniform_bands(5, 0.0, ROW_HEIGHT));

    reorder.pointer_move(500.0);
    assert_eq!(reorder.order(), Some([0, 1, 2, 3, 4].as_slice()));
}

#[test]
fn test_start_drag_out_of_range_is_ignored() {
    let mut reorder = RowReorder::new();
    reorder.start_drag(50.0, 9, uniform_bands(3, 0.0, ROW_HEIGHT));
    assert!(!reorder.is_dragging());
}

#[test]
fn test_second_start_drag_is_ignored() {
    let mut reorder = RowReorder::new();
    reorder.start_drag(10.0, 0, uniform_bands(3, 0.0, ROW_HEIGHT));
    reorder.start_drag(30.0, 1, uniform_bands(3, 0.0, ROW_HEIGHT));

    let result = reorder.release().unwrap();
    assert_eq!(result.from_index, 0);
}

#[test]
fn test_release_without_drag() {
    let mut reorder = RowReorder::new();
    assert!(reorder.release().is_none());
}

#[test]
fn test_teardown_releases_session() {
    let mut reorder = RowReorder::new();
    reorder.start_drag(10.0, 0, uniform_bands(3, 0.0, ROW_HEIGHT));
    reorder.teardown();
    assert!(!reorder.is_dragging());
    assert!(reorder.release().is_none());
}

#[test]
fn test_apply_move_is_a_single_splice() {
    let mut items = vec!["a", "b", "c", "d", "e"];
    apply_move(&mut items, 2, 0);
    assert_eq!(items, vec!["c", "a", "b", "d", "e"]);

    let mut items = vec!["a", "b", "c"];
    apply_move(&mut items, 0, 2);
    assert_eq!(items, vec!["b", "c", "a"]);
}

#[test]
fn test_apply_move_ignores_out_of_range() {
    let mut items = vec!["a", "b"];
    apply_move(&mut items, 5, 0);
    apply_move(&mut items, 0, 5);
    apply_move(&mut items, 1, 1);
    assert_eq!(items, vec!["a", "b"]);
}
