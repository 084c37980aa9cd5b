//! Grid layout engine: overlap detection, deterministic conflict resolution,
//! and change-detecting snapshot production.
//!
//! A layout pass is a pure function of the current widget rects plus the
//! fixed column count. Overlapping widgets are repositioned by a greedy,
//! single-pass O(n²) sweep that only ever applies forward corrections; it is
//! deliberately not a fixpoint loop (see [`engine::resolve_overlaps`]).

pub mod engine;
pub mod snapshot;

pub use engine::{rect_cmp, resolve_overlaps, LayoutEngine, WidgetGeometry};
pub use snapshot::WidgetPlacement;

#[cfg(test)]
mod tests;
