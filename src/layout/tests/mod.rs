//! Layout engine test suite, split by concern.

use crate::geometry::Rect;
use crate::layout::engine::WidgetGeometry;

mod ordering;
mod snapshot;

/// Builds a pass item with an unmarked rect.
fn geom(id: u64, x: u32, y: u32, width: u32, height: u32) -> WidgetGeometry {
    WidgetGeometry::new(id, Rect::new(x, y, width, height))
}

/// Returns `true` when no two items in the slice overlap.
fn no_overlaps(items: &[WidgetGeometry]) -> bool {
    for (i, a) in items.iter().enumerate() {
        for b in items.iter().skip(i + 1) {
            if a.rect.overlaps(&b.rect) {
                return false;
            }
        }
    }
    true
}

/// Finds an item by widget id. Panics when absent (test-only).
fn by_id(items: &[WidgetGeometry], id: u64) -> &WidgetGeometry {
    items
        .iter()
        .find(|g| g.id.0 == id)
        .expect("widget present in pass items")
}
