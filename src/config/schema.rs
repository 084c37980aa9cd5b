//! TOML configuration schema types for dashgrid.
//!
//! All structs derive `Deserialize` and `Serialize` with sensible defaults
//! via `#[serde(default)]`. Duration fields use human-readable strings
//! (e.g. `"100ms"`) parsed by the `humantime` crate at the call site.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::grid::Grid;

/// Debounce window applied when the configured value fails to parse.
pub const FALLBACK_DEBOUNCE: Duration = Duration::from_millis(100);

/// Root configuration encompassing all sections.
///
/// Corresponds to the full TOML file structure:
/// ```toml
/// [grid]
/// [layout]
/// [persistence]
/// [log]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Fixed grid dimensions.
    pub grid: GridConfig,
    /// Layout pass behavior.
    pub layout: LayoutConfig,
    /// Layout persistence transport.
    pub persistence: PersistenceConfig,
    /// Logging settings.
    pub log: LogConfig,
}

/// Grid dimensions in cells. Application-wide constants: the layout engine
/// never renegotiates these at runtime.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct GridConfig {
    /// Total columns available for widget placement.
    pub columns: u32,
    /// Total rows, used only for pixel cell metrics.
    pub rows: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: 20,
            rows: 12,
        }
    }
}

impl From<GridConfig> for Grid {
    fn from(config: GridConfig) -> Self {
        Grid::new(config.columns, config.rows)
    }
}

/// Layout pass behavior.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Debounce window for drag-end and resize bursts as a human-readable
    /// duration (e.g. `"100ms"`).
    pub debounce: String,
}

impl LayoutConfig {
    /// Parses the debounce window, falling back to [`FALLBACK_DEBOUNCE`]
    /// (with a warning) when the string is invalid.
    pub fn debounce_duration(&self) -> Duration {
        match humantime::parse_duration(&self.debounce) {
            Ok(duration) => duration,
            Err(e) => {
                tracing::warn!(
                    "Invalid layout.debounce {:?} ({}); using {:?}",
                    self.debounce,
                    e,
                    FALLBACK_DEBOUNCE
                );
                FALLBACK_DEBOUNCE
            }
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            debounce: "100ms".to_string(),
        }
    }
}

/// Layout persistence transport settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct PersistenceConfig {
    /// Whether resolved layouts are persisted at all.
    pub enabled: bool,
    /// Unix socket path of the persistence endpoint.
    pub socket: String,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            socket: "/tmp/dashgrid.sock".to_string(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    /// Logging verbosity; overridden by the `DASHGRID_LOG` env var.
    pub level: LogLevel,
}

/// Log verbosity levels (kebab-case in TOML).
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings.
    Warn,
    /// Informational messages (default).
    #[default]
    Info,
    /// Debug-level detail.
    Debug,
    /// Full trace output.
    Trace,
}

impl LogLevel {
    /// The tracing filter directive for this level.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
