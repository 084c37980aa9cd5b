//! Persisted layout snapshot types.
//!
//! A snapshot is the complete replacement of all widget positions: one
//! `{Id, X, Y, Width, Height}` record per widget, ordered by widget id so
//! deep equality against the previous snapshot is deterministic. The
//! PascalCase keys are the save contract consumed by the reporting backend.

use serde::{Deserialize, Serialize};

use crate::layout::engine::WidgetGeometry;

/// One widget's persisted grid placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WidgetPlacement {
    /// Widget identifier.
    pub id: u64,
    /// Grid column of the left edge.
    pub x: u32,
    /// Grid row of the top edge.
    pub y: u32,
    /// Span in columns.
    pub width: u32,
    /// Span in rows.
    pub height: u32,
}

impl From<&WidgetGeometry> for WidgetPlacement {
    fn from(geometry: &WidgetGeometry) -> Self {
        Self {
            id: geometry.id.0,
            x: geometry.rect.x,
            y: geometry.rect.y,
            width: geometry.rect.width,
            height: geometry.rect.height,
        }
    }
}

/// Builds the id-ordered placement list for a resolved widget set.
pub fn placements(items: &[WidgetGeometry]) -> Vec<WidgetPlacement> {
    let mut all: Vec<WidgetPlacement> = items.iter().map(WidgetPlacement::from).collect();
    all.sort_by_key(|p| p.id);
    all
}
