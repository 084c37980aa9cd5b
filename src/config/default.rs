//! Default configuration template and file creation utilities.
//!
//! Provides a commented TOML template that matches `Config::default()` and
//! a helper to write it to the XDG config path.

use std::fs;
use std::path::PathBuf;

use crate::config::error::ConfigError;
use crate::config::xdg;

/// A commented TOML template with all default values.
///
/// Every value here must match `Config::default()` from `schema.rs`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# dashgrid configuration
#
# This file was auto-generated with default values.
# All values shown below are the built-in defaults.
#
# Location: $XDG_CONFIG_HOME/dashgrid/config.toml

[grid]

# Total grid columns available for widget placement.
columns = 20

# Total grid rows; used only to derive pixel cell sizes from the container.
rows = 12

[layout]

# Quiet window applied to drag-end and resize bursts before a layout pass
# runs. Human-readable duration, e.g. "100ms", "250ms".
debounce = "100ms"

[persistence]

# Persist resolved layouts. When false, layout passes still run but nothing
# is sent anywhere.
enabled = true

# Unix socket path of the persistence endpoint.
socket = "/tmp/dashgrid.sock"

[log]

# Logging verbosity: "error", "warn", "info", "debug", "trace".
# The DASHGRID_LOG environment variable overrides this setting.
level = "info"
"#;

/// Writes the default configuration template to the XDG config path.
///
/// Creates the config directory if needed. Refuses to overwrite an existing
/// file unless `force` is set.
///
/// Returns the path of the created file.
pub fn init_config_file(force: bool) -> Result<PathBuf, ConfigError> {
    let path = xdg::config_path();
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists { path });
    }
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|source| ConfigError::WriteError {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    fs::write(&path, DEFAULT_CONFIG_TEMPLATE).map_err(|source| ConfigError::WriteError {
        path: path.clone(),
        source,
    })?;
    tracing::info!("Wrote default configuration to {:?}", path);
    Ok(path)
}
