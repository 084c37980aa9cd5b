//! Platform-aware path resolution for dashgrid.
//!
//! On Linux, follows the XDG Base Directory Specification:
//! `$XDG_CONFIG_HOME/dashgrid` or `~/.config/dashgrid`. On macOS, uses
//! `~/Library/Application Support/dashgrid` unless `$XDG_CONFIG_HOME` is set.

use std::path::PathBuf;

const APP_NAME: &str = "dashgrid";

/// Returns the configuration directory for dashgrid.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/dashgrid` (if env var set, any platform)
/// 2. Platform default:
///    - Linux: `~/.config/dashgrid`
///    - macOS: `~/Library/Application Support/dashgrid`
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join(APP_NAME);
    }
    platform_config_dir().join(APP_NAME)
}

/// Platform-native config base directory (without XDG override).
fn platform_config_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        dirs::config_dir().expect("could not determine config directory")
    }
    #[cfg(not(target_os = "macos"))]
    {
        dirs::home_dir()
            .expect("could not determine home directory")
            .join(".config")
    }
}

/// Returns the path to the main configuration file.
///
/// Resolves to `config_dir()/config.toml`.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}
