//! Thread-safe in-memory widget store.
//!
//! Wraps a `HashMap` in `Arc<RwLock>` so the event handlers (drag-end,
//! container resize) and the layout-pass task can share the live widget set.
//! Multiple async tasks can read simultaneously; writes are exclusive.
//!
//! The store owns the widget data; accessors return clones.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::geometry::Rect;
use crate::widgets::{Widget, WidgetId};

/// Thread-safe widget collection for a single dashboard.
///
/// # Example
///
/// ```
/// use dashgrid::geometry::Rect;
/// use dashgrid::widgets::{Widget, WidgetStore};
///
/// #[tokio::main]
/// async fn main() {
///     let store = WidgetStore::new();
///     store.insert(Widget::new(1, "cpu", Rect::new(0, 0, 2, 2))).await;
///     assert_eq!(store.len().await, 1);
/// }
/// ```
#[derive(Clone, Default)]
pub struct WidgetStore {
    widgets: Arc<RwLock<HashMap<WidgetId, Widget>>>,
}

impl std::fmt::Debug for WidgetStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetStore")
            .field("widgets", &self.widgets)
            .finish()
    }
}

impl WidgetStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a widget, overwriting any widget with the same id.
    pub async fn insert(&self, widget: Widget) {
        let mut widgets = self.widgets.write().await;
        widgets.insert(widget.id, widget);
    }

    /// Removes a widget. Idempotent: removing an unknown id returns `None`.
    pub async fn remove(&self, id: WidgetId) -> Option<Widget> {
        let mut widgets = self.widgets.write().await;
        widgets.remove(&id)
    }

    /// Returns a clone of the widget with the given id, if present.
    pub async fn get(&self, id: WidgetId) -> Option<Widget> {
        let widgets = self.widgets.read().await;
        widgets.get(&id).cloned()
    }

    /// Returns clones of all widgets, ordered by id.
    pub async fn list_all(&self) -> Vec<Widget> {
        let widgets = self.widgets.read().await;
        let mut all: Vec<Widget> = widgets.values().cloned().collect();
        all.sort_by_key(|w| w.id);
        all
    }

    /// Returns the widget count.
    pub async fn len(&self) -> usize {
        let widgets = self.widgets.read().await;
        widgets.len()
    }

    /// Returns `true` when the store holds no widgets.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Applies a user drag/resize to a widget's rect.
    ///
    /// The new size is taken as-is (normalized to 1×1 minimum) and the move
    /// goes through [`Rect::set_location`], so the widget carries the
    /// `updated` tie-break flag into the next layout pass.
    ///
    /// Returns `false` if the widget is unknown.
    pub async fn set_rect(&self, id: WidgetId, rect: Rect) -> bool {
        let mut widgets = self.widgets.write().await;
        match widgets.get_mut(&id) {
            Some(widget) => {
                widget.rect.width = rect.width.max(1);
                widget.rect.height = rect.height.max(1);
                widget.rect.set_location(rect.x, rect.y);
                true
            }
            None => {
                tracing::debug!("set_rect for unknown widget {}", id);
                false
            }
        }
    }

    /// Sets or clears a widget's fullscreen flag.
    ///
    /// Returns `false` if the widget is unknown.
    pub async fn set_fullscreen(&self, id: WidgetId, fullscreen: bool) -> bool {
        let mut widgets = self.widgets.write().await;
        match widgets.get_mut(&id) {
            Some(widget) => {
                widget.fullscreen = fullscreen;
                true
            }
            None => false,
        }
    }

    /// Writes resolved rects back after a layout pass.
    ///
    /// Rects are stored verbatim, including the transient `updated` state
    /// left by the pass. Unknown ids (widget removed mid-pass) are skipped.
    pub async fn apply_rects(&self, rects: impl IntoIterator<Item = (WidgetId, Rect)>) {
        let mut widgets = self.widgets.write().await;
        for (id, rect) in rects {
            if let Some(widget) = widgets.get_mut(&id) {
                widget.rect = rect;
            }
        }
    }
}
