//! Dashboard orchestration: wires the widget store, the layout engine, the
//! debouncer, and the persistence collaborator together.
//!
//! Control flow: a widget drag-end or container resize notification triggers
//! the debouncer; once the burst quiets down, a single layout pass reads all
//! widget rects, resolves overlaps, writes the final positions back to the
//! store, and fires the snapshot at the persistence collaborator when it
//! differs from the last persisted one.
//!
//! All store mutation happens on the single pass task or in the notification
//! handlers; the store's lock is the only coordination needed.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};

use crate::debounce::Debouncer;
use crate::geometry::Rect;
use crate::grid::{CellMetrics, Grid};
use crate::layout::{LayoutEngine, WidgetGeometry};
use crate::persist::PersistLayout;
use crate::widgets::{WidgetId, WidgetStore};

/// A single dashboard instance.
///
/// Owns its own layout engine (and therefore its own persisted-snapshot
/// baseline), so multiple dashboards can coexist in one process.
pub struct Dashboard {
    store: WidgetStore,
    grid: Grid,
    metrics: Arc<RwLock<CellMetrics>>,
    engine: Arc<Mutex<LayoutEngine>>,
    persistence: Arc<dyn PersistLayout>,
    debouncer: Debouncer,
}

impl Dashboard {
    /// Creates a dashboard and spawns its layout-pass task.
    ///
    /// Must be called from within a tokio runtime. `debounce_delay` is the
    /// quiet window applied to drag-end and resize bursts.
    pub fn new(grid: Grid, debounce_delay: Duration, persistence: Arc<dyn PersistLayout>) -> Self {
        let store = WidgetStore::new();
        let engine = Arc::new(Mutex::new(LayoutEngine::new(grid.columns)));
        let (debouncer, mut pulses) = Debouncer::new(debounce_delay);

        let task_store = store.clone();
        let task_engine = Arc::clone(&engine);
        let task_persistence = Arc::clone(&persistence);
        tokio::spawn(async move {
            while pulses.recv().await.is_some() {
                let mut engine = task_engine.lock().await;
                run_layout_pass(&task_store, &mut engine, task_persistence.as_ref()).await;
            }
        });

        Self {
            store,
            grid,
            metrics: Arc::new(RwLock::new(CellMetrics::default())),
            engine,
            persistence,
            debouncer,
        }
    }

    /// The live widget collection.
    pub fn store(&self) -> &WidgetStore {
        &self.store
    }

    /// The fixed grid dimensions.
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// The most recently derived pixel cell metrics.
    pub async fn cell_metrics(&self) -> CellMetrics {
        *self.metrics.read().await
    }

    /// Handles a completed widget drag or resize.
    ///
    /// Applies the new rect (marking the widget as just-moved for the sort
    /// tie-break) and schedules a debounced layout pass. Unknown widgets are
    /// ignored without scheduling.
    pub async fn notify_drag_end(&self, id: WidgetId, rect: Rect) {
        if self.store.set_rect(id, rect).await {
            tracing::debug!("Widget {} dragged to ({}, {})", id, rect.x, rect.y);
            self.debouncer.trigger();
        }
    }

    /// Handles a container resize.
    ///
    /// Recomputes the pixel cell metrics and schedules a debounced layout
    /// pass; rapid resize events within the window coalesce into one pass.
    pub async fn notify_container_resized(&self, width_px: u32, height_px: u32) {
        let metrics = self.grid.cell_metrics(width_px, height_px);
        *self.metrics.write().await = metrics;
        tracing::debug!(
            "Container resized to {}x{}px (cell {:.1}x{:.1}px)",
            width_px,
            height_px,
            metrics.column_width,
            metrics.row_height
        );
        self.debouncer.trigger();
    }

    /// Runs a layout pass immediately, bypassing the debouncer.
    pub async fn run_layout_pass(&self) {
        let mut engine = self.engine.lock().await;
        run_layout_pass(&self.store, &mut engine, self.persistence.as_ref()).await;
    }
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("grid", &self.grid)
            .field("store", &self.store)
            .finish()
    }
}

/// One resolve-and-persist cycle over the live widget set.
///
/// Fullscreen widgets overlay the grid rather than occupying a cell; they
/// keep their stored rect as a restore position and are excluded from both
/// the pass and the persisted snapshot.
async fn run_layout_pass(
    store: &WidgetStore,
    engine: &mut LayoutEngine,
    persistence: &dyn PersistLayout,
) {
    let widgets = store.list_all().await;
    let mut items: Vec<WidgetGeometry> = widgets
        .iter()
        .filter(|w| !w.fullscreen)
        .map(|w| WidgetGeometry::new(w.id, w.rect))
        .collect();

    engine.resolve(&mut items);
    store
        .apply_rects(items.iter().map(|g| (g.id, g.rect)))
        .await;

    match engine.snapshot_if_changed(&items) {
        Some(snapshot) => {
            tracing::debug!("Layout changed; persisting {} placements", snapshot.len());
            persistence.persist(snapshot);
        }
        None => {
            tracing::trace!("Layout unchanged; skipping persistence");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::WidgetPlacement;
    use crate::widgets::Widget;
    use std::sync::Mutex as StdMutex;
    use tokio::time::timeout;

    /// Records every persisted snapshot for assertions.
    #[derive(Default)]
    struct RecordingPersistence {
        snapshots: StdMutex<Vec<Vec<WidgetPlacement>>>,
    }

    impl RecordingPersistence {
        fn count(&self) -> usize {
            self.snapshots.lock().unwrap().len()
        }

        fn last(&self) -> Option<Vec<WidgetPlacement>> {
            self.snapshots.lock().unwrap().last().cloned()
        }
    }

    impl PersistLayout for RecordingPersistence {
        fn persist(&self, placements: Vec<WidgetPlacement>) {
            self.snapshots.lock().unwrap().push(placements);
        }
    }

    fn dashboard_with_recorder() -> (Dashboard, Arc<RecordingPersistence>) {
        let recorder = Arc::new(RecordingPersistence::default());
        let dashboard = Dashboard::new(
            Grid::new(20, 12),
            Duration::from_millis(100),
            recorder.clone(),
        );
        (dashboard, recorder)
    }

    #[tokio::test]
    async fn pass_resolves_overlap_and_persists() {
        let (dashboard, recorder) = dashboard_with_recorder();
        dashboard
            .store()
            .insert(Widget::new(1, "a", Rect::new(0, 0, 2, 2)))
            .await;
        dashboard
            .store()
            .insert(Widget::new(2, "b", Rect::new(1, 0, 2, 2)))
            .await;

        dashboard.run_layout_pass().await;

        let b = dashboard.store().get(WidgetId(2)).await.unwrap();
        assert_eq!((b.rect.x, b.rect.y), (2, 0));
        assert_eq!(recorder.count(), 1);
        let snapshot = recorder.last().unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[1].x, 2);
    }

    #[tokio::test]
    async fn second_identical_pass_skips_persistence() {
        let (dashboard, recorder) = dashboard_with_recorder();
        dashboard
            .store()
            .insert(Widget::new(1, "a", Rect::new(0, 0, 2, 2)))
            .await;

        dashboard.run_layout_pass().await;
        dashboard.run_layout_pass().await;

        assert_eq!(recorder.count(), 1);
        // Positions are untouched by the redundant pass.
        let w = dashboard.store().get(WidgetId(1)).await.unwrap();
        assert_eq!((w.rect.x, w.rect.y), (0, 0));
    }

    #[tokio::test]
    async fn fullscreen_widget_is_excluded_from_pass_and_snapshot() {
        let (dashboard, recorder) = dashboard_with_recorder();
        dashboard
            .store()
            .insert(Widget::new(1, "a", Rect::new(0, 0, 2, 2)))
            .await;
        dashboard
            .store()
            .insert(Widget::new(2, "b", Rect::new(0, 0, 2, 2)))
            .await;
        dashboard.store().set_fullscreen(WidgetId(2), true).await;

        dashboard.run_layout_pass().await;

        // The fullscreen widget's restore rect is untouched despite sitting
        // on top of widget 1.
        let b = dashboard.store().get(WidgetId(2)).await.unwrap();
        assert_eq!((b.rect.x, b.rect.y), (0, 0));
        let snapshot = recorder.last().unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn drag_burst_coalesces_into_one_pass_and_one_persist() {
        let (dashboard, recorder) = dashboard_with_recorder();
        dashboard
            .store()
            .insert(Widget::new(1, "a", Rect::new(0, 0, 2, 2)))
            .await;

        for x in 1..=5 {
            dashboard
                .notify_drag_end(WidgetId(1), Rect::new(x, 0, 2, 2))
                .await;
        }

        // Wait out the debounce window plus the pass itself.
        timeout(Duration::from_secs(60), async {
            while recorder.count() == 0 {
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await
        .expect("one persistence call after the burst");

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(recorder.count(), 1);
        let snapshot = recorder.last().unwrap();
        assert_eq!(snapshot[0].x, 5);
    }

    #[tokio::test(start_paused = true)]
    async fn resize_burst_coalesces_and_updates_metrics() {
        let (dashboard, recorder) = dashboard_with_recorder();
        dashboard
            .store()
            .insert(Widget::new(1, "a", Rect::new(0, 0, 2, 2)))
            .await;

        for width in [800, 900, 1000] {
            dashboard.notify_container_resized(width, 600).await;
        }

        let metrics = dashboard.cell_metrics().await;
        assert_eq!(metrics.column_width, 50.0);
        assert_eq!(metrics.row_height, 50.0);

        timeout(Duration::from_secs(60), async {
            while recorder.count() == 0 {
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await
        .expect("one persistence call after the burst");

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(recorder.count(), 1);
    }

    #[tokio::test]
    async fn drag_of_unknown_widget_schedules_nothing() {
        let (dashboard, recorder) = dashboard_with_recorder();
        dashboard
            .notify_drag_end(WidgetId(9), Rect::new(0, 0, 1, 1))
            .await;
        tokio::time::sleep(Duration::from_millis(250)).await;
        assert_eq!(recorder.count(), 0);
    }

    #[tokio::test]
    async fn empty_dashboard_pass_persists_empty_snapshot_once() {
        let (dashboard, recorder) = dashboard_with_recorder();
        dashboard.run_layout_pass().await;
        dashboard.run_layout_pass().await;
        assert_eq!(recorder.count(), 1);
        assert!(recorder.last().unwrap().is_empty());
    }
}
