//! Tests for the pass iteration order (`rect_cmp`).

use std::cmp::Ordering;

use super::geom;
use crate::geometry::Rect;
use crate::layout::engine::rect_cmp;
use crate::layout::resolve_overlaps;

#[test]
fn orders_by_x_first() {
    let a = Rect::new(1, 9, 1, 1);
    let b = Rect::new(2, 0, 1, 1);
    assert_eq!(rect_cmp(&a, &b), Ordering::Less);
    assert_eq!(rect_cmp(&b, &a), Ordering::Greater);
}

#[test]
fn orders_by_y_when_x_tied() {
    let a = Rect::new(3, 1, 1, 1);
    let b = Rect::new(3, 2, 1, 1);
    assert_eq!(rect_cmp(&a, &b), Ordering::Less);
}

#[test]
fn updated_wins_full_position_tie() {
    let mut dragged = Rect::new(3, 3, 1, 1);
    dragged.set_location(3, 3);
    let untouched = Rect::new(3, 3, 1, 1);
    assert_eq!(rect_cmp(&dragged, &untouched), Ordering::Less);
    assert_eq!(rect_cmp(&untouched, &dragged), Ordering::Greater);
}

#[test]
fn equal_rects_with_equal_flags_compare_equal() {
    let a = Rect::new(3, 3, 1, 1);
    let b = Rect::new(3, 3, 2, 5);
    // Size is not part of the order.
    assert_eq!(rect_cmp(&a, &b), Ordering::Equal);
}

#[test]
fn dragged_widget_keeps_its_spot_against_identical_rect() {
    // Both widgets sit at (0,0); widget 2 was just dragged there.
    let mut items = vec![geom(1, 0, 0, 2, 2), geom(2, 0, 0, 2, 2)];
    items[1].rect.set_location(0, 0);

    resolve_overlaps(&mut items, 20);

    let dragged = super::by_id(&items, 2);
    let other = super::by_id(&items, 1);
    assert_eq!((dragged.rect.x, dragged.rect.y), (0, 0));
    // The untouched widget yields and is shifted right.
    assert_eq!((other.rect.x, other.rect.y), (2, 0));
}
