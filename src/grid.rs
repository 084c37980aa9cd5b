//! Fixed grid dimensions and derived pixel cell metrics.
//!
//! The grid's column and row counts are application-wide constants sourced
//! from configuration; they are never negotiated at runtime. Pixel metrics
//! are derived from the container's current size and recomputed on every
//! resize notification, never persisted.

/// Fixed dashboard grid dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    /// Total columns available for widget placement.
    pub columns: u32,
    /// Total rows used for pixel metric derivation.
    pub rows: u32,
}

/// Pixel size of a single grid cell, derived from the container size.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CellMetrics {
    /// Width of one grid column in pixels.
    pub column_width: f64,
    /// Height of one grid row in pixels.
    pub row_height: f64,
}

impl Grid {
    /// Creates a grid, clamping zero dimensions to 1.
    pub fn new(columns: u32, rows: u32) -> Self {
        Self {
            columns: columns.max(1),
            rows: rows.max(1),
        }
    }

    /// Derives per-cell pixel metrics from the container's current pixel size.
    pub fn cell_metrics(&self, container_width: u32, container_height: u32) -> CellMetrics {
        CellMetrics {
            column_width: f64::from(container_width) / f64::from(self.columns),
            row_height: f64::from(container_height) / f64::from(self.rows),
        }
    }
}
