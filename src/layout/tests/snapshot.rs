//! Tests for snapshot building and the redundant-persistence guard.

use super::geom;
use crate::layout::engine::LayoutEngine;
use crate::layout::snapshot::{placements, WidgetPlacement};

#[test]
fn placements_are_ordered_by_widget_id() {
    let items = vec![geom(3, 4, 0, 1, 1), geom(1, 0, 0, 2, 1), geom(2, 2, 0, 1, 1)];
    let snap = placements(&items);
    let ids: Vec<u64> = snap.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn placement_serializes_with_pascal_case_contract_keys() {
    let items = vec![geom(1, 0, 0, 2, 1), geom(2, 2, 0, 1, 1)];
    let json = serde_json::to_string(&placements(&items)).expect("snapshot serializes");
    assert_eq!(
        json,
        r#"[{"Id":1,"X":0,"Y":0,"Width":2,"Height":1},{"Id":2,"X":2,"Y":0,"Width":1,"Height":1}]"#
    );
}

#[test]
fn placement_deserializes_from_contract_keys() {
    let json = r#"{"Id":5,"X":1,"Y":2,"Width":3,"Height":4}"#;
    let p: WidgetPlacement = serde_json::from_str(json).expect("placement parses");
    assert_eq!(p.id, 5);
    assert_eq!((p.x, p.y, p.width, p.height), (1, 2, 3, 4));
}

#[test]
fn first_snapshot_is_always_reported() {
    let mut engine = LayoutEngine::new(20);
    let items = vec![geom(1, 0, 0, 2, 2)];
    assert!(engine.snapshot_if_changed(&items).is_some());
}

#[test]
fn unchanged_snapshot_is_suppressed() {
    let mut engine = LayoutEngine::new(20);
    let items = vec![geom(1, 0, 0, 2, 2), geom(2, 2, 0, 2, 2)];
    assert!(engine.snapshot_if_changed(&items).is_some());
    assert!(engine.snapshot_if_changed(&items).is_none());
    assert!(engine.snapshot_if_changed(&items).is_none());
}

#[test]
fn changed_snapshot_advances_the_baseline() {
    let mut engine = LayoutEngine::new(20);
    let mut items = vec![geom(1, 0, 0, 2, 2)];
    assert!(engine.snapshot_if_changed(&items).is_some());

    items[0].rect.set_location(4, 0);
    let snap = engine.snapshot_if_changed(&items).expect("move is a change");
    assert_eq!(snap[0].x, 4);

    // Same positions again: suppressed against the new baseline.
    assert!(engine.snapshot_if_changed(&items).is_none());
    assert_eq!(engine.last_persisted().map(|s| s.len()), Some(1));
}

#[test]
fn item_order_does_not_affect_equality() {
    let mut engine = LayoutEngine::new(20);
    let forward = vec![geom(1, 0, 0, 2, 2), geom(2, 4, 0, 2, 2)];
    let reversed = vec![geom(2, 4, 0, 2, 2), geom(1, 0, 0, 2, 2)];
    assert!(engine.snapshot_if_changed(&forward).is_some());
    assert!(engine.snapshot_if_changed(&reversed).is_none());
}

#[test]
fn resolve_plus_snapshot_reports_resolved_positions() {
    let mut engine = LayoutEngine::new(20);
    let mut items = vec![geom(1, 0, 0, 2, 2), geom(2, 1, 0, 2, 2)];
    engine.resolve(&mut items);
    let snap = engine.snapshot_if_changed(&items).expect("first snapshot");
    assert_eq!(snap[1].x, 2);
    assert_eq!(snap[1].y, 0);
}
