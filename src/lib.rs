//! dashgrid — dashboard grid layout engine.
//!
//! This crate provides the core of a dashboard grid layout system: an
//! integer rectangle model with strict overlap testing, a deterministic
//! collision-avoidance layout engine over a fixed-column grid, debounced
//! layout triggering, and change-detecting fire-and-forget persistence of
//! the resulting layout.
//!
//! # Architecture
//!
//! Leaves first: [`geometry::Rect`] is the widget footprint;
//! [`widgets::WidgetStore`] holds the live widget set; the
//! [`layout::LayoutEngine`] resolves overlaps and suppresses redundant
//! snapshots; [`dashboard::Dashboard`] wires everything to a
//! [`debounce::Debouncer`] and a [`persist::PersistLayout`] collaborator.
//!
//! A layout pass is a greedy, single-pass O(n²) sweep — deliberately not a
//! global optimizer and deliberately not a fixpoint loop. See
//! [`layout::engine::resolve_overlaps`] for the resolution policy.

/// Configuration utilities including XDG path resolution.
pub mod config;

/// Dashboard orchestration: store + engine + debouncer + persistence.
pub mod dashboard;

/// Trigger coalescing for layout passes.
pub mod debounce;

/// Integer grid rectangles with overlap testing.
pub mod geometry;

/// Fixed grid dimensions and pixel cell metrics.
pub mod grid;

/// The layout engine: conflict resolution and snapshots.
pub mod layout;

/// Logging initialization.
pub mod logging;

/// Layout persistence collaborators.
pub mod persist;

/// Widget model and the live widget store.
pub mod widgets;

pub use dashboard::Dashboard;
pub use debounce::Debouncer;
pub use geometry::Rect;
pub use grid::{CellMetrics, Grid};
pub use layout::{LayoutEngine, WidgetGeometry, WidgetPlacement};
pub use persist::{NullPersistence, PersistLayout, SocketPersistence};
pub use widgets::{Widget, WidgetId, WidgetStore};
