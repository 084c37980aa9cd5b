//! Widget model for the dashboard grid.
//!
//! A [`Widget`] is a positionable, resizable dashboard cell backed by a
//! [`Rect`]. Widgets are created and destroyed by the surrounding
//! application; the layout engine only reads the live set from the
//! [`WidgetStore`] and writes resolved positions back.

pub mod store;

pub use store::WidgetStore;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// Stable widget identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct WidgetId(pub u64);

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for WidgetId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A dashboard widget: identifier, grid footprint, and display state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Widget {
    /// Stable identifier used in the persisted layout.
    pub id: WidgetId,
    /// Human-readable title, display-only.
    pub title: String,
    /// Current grid footprint.
    pub rect: Rect,
    /// When set, the widget overlays the whole grid instead of occupying
    /// its cell; it is skipped by layout passes and excluded from the
    /// persisted snapshot. The stored rect is its restore position.
    pub fullscreen: bool,
}

impl Widget {
    /// Creates a widget at the given grid footprint.
    pub fn new(id: impl Into<WidgetId>, title: impl Into<String>, rect: Rect) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            rect,
            fullscreen: false,
        }
    }
}
