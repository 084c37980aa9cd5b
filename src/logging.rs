//! Logging initialization for dashgrid.
//!
//! Configures the `tracing` subscriber with level filtering via the
//! `DASHGRID_LOG` environment variable. Falls back to the configured level
//! (default `info`) when the variable is unset.
//!
//! # Usage
//!
//! ```bash
//! # Default (info level)
//! dgd resolve widgets.json
//!
//! # Debug level
//! DASHGRID_LOG=debug dgd resolve widgets.json
//!
//! # Module-specific filtering
//! DASHGRID_LOG=dashgrid::layout=trace,info dgd resolve widgets.json
//! ```

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::schema::LogLevel;

/// Initialize the tracing subscriber.
///
/// Reads the `DASHGRID_LOG` environment variable for filter directives,
/// falling back to `fallback` when the variable is unset or invalid.
///
/// Output is written to stderr.
///
/// # Panics
///
/// Panics if a global subscriber has already been set (call once, at
/// startup).
pub fn init(fallback: LogLevel) {
    let filter = EnvFilter::try_from_env("DASHGRID_LOG")
        .unwrap_or_else(|_| EnvFilter::new(fallback.as_directive()));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
