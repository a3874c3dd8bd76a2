//! XDG-style path resolution for the user configuration file.

use std::path::PathBuf;

/// Returns the configuration directory for mt, if one can be determined.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/mt` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/mt` otherwise
///
/// Returns `None` when neither `XDG_CONFIG_HOME` nor a home directory is
/// available; callers treat that as "no user config layer".
pub fn config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME").map_or_else(
        |_| dirs::home_dir().map(|home| home.join(".config").join("mt")),
        |xdg| Some(PathBuf::from(xdg).join("mt")),
    )
}
