//! Axis-aligned integer rectangles on the dashboard grid.
//!
//! A [`Rect`] is the positional footprint of a single widget: a grid-cell
//! origin plus a cell span. Coordinates are grid columns/rows, not pixels;
//! pixel conversion lives in [`crate::grid`].
//!
//! The `updated` flag is transient per-layout-pass state: it is set whenever
//! the rect is repositioned through [`Rect::set_location`] and cleared by the
//! layout engine as each widget is taken as the reference rect of a pass.
//! A widget whose rect carries `updated = true` wins position ties against
//! untouched widgets when the next pass sorts the widget set.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle on the grid, measured in cells.
///
/// Width and height are always at least 1: a rect constructed with a zero
/// span is normalized to a 1×1 cell rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    /// Grid column of the left edge.
    pub x: u32,
    /// Grid row of the top edge.
    pub y: u32,
    /// Span in columns (>= 1).
    pub width: u32,
    /// Span in rows (>= 1).
    pub height: u32,
    /// Set when the rect was repositioned; cleared during a layout pass.
    /// Never persisted.
    #[serde(skip)]
    pub updated: bool,
}

impl Rect {
    /// Creates a rect at `(x, y)` spanning `width` × `height` cells.
    ///
    /// A zero width or height is normalized to 1.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width: width.max(1),
            height: height.max(1),
            updated: false,
        }
    }

    /// Column just past the right edge. Saturates at `u32::MAX` so
    /// untrusted coordinates near the type limit cannot overflow.
    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    /// Row just past the bottom edge. Saturates like [`Rect::right`].
    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }

    /// Restores the width/height invariant on a rect built from raw field
    /// values (e.g. deserialized input). Zero spans become 1.
    pub fn normalize(&mut self) {
        if self.width == 0 {
            self.width = 1;
        }
        if self.height == 0 {
            self.height = 1;
        }
    }

    /// Returns `true` iff the two rects intersect with positive area.
    ///
    /// Touching edges do not count as overlap. Pure predicate: symmetric,
    /// and reflexive for any normalized rect.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Moves the rect origin to `(x, y)` and marks it as updated.
    ///
    /// All repositioning (user drags and engine corrections alike) goes
    /// through here so the tie-break flag is maintained in one place.
    pub fn set_location(&mut self, x: u32, y: u32) {
        self.x = x;
        self.y = y;
        self.updated = true;
    }
}
