use std::io;
use std::path::{Path, PathBuf};

use crate::config::SettingsLayer;
use crate::paths;

/// Name of the per-project configuration file, looked up in the current
/// working directory.
pub const PROJECT_CONFIG_FILE: &str = ".mt.toml";

/// The outcome of loading one config file layer.
///
/// Loading never fails: a missing file yields an empty layer, and a file
/// that exists but cannot be used yields an empty layer plus a warning. The
/// warning travels as a value because the logging subscriber is not
/// installed until after settings are resolved.
#[derive(Debug, Default)]
pub struct LayerLoad {
    pub layer: SettingsLayer,
    pub warning: Option<String>,
}

/// Path of the user-wide config file, when a config directory exists.
#[must_use]
pub fn user_config_path() -> Option<PathBuf> {
    paths::config_dir().map(|dir| dir.join("config.toml"))
}

/// Path of the project config file relative to the working directory.
#[must_use]
pub fn project_config_path() -> PathBuf {
    PathBuf::from(PROJECT_CONFIG_FILE)
}

/// Reads one TOML config layer from `path`.
///
/// A missing file is normal (most machines have no project config) and
/// contributes an empty layer. Unreadable or unparsable files are skipped
/// with a warning; a broken config file must never stop a translation run.
#[must_use]
pub fn read_layer(path: &Path) -> LayerLoad {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return LayerLoad::default();
        }
        Err(err) => {
            return LayerLoad {
                layer: SettingsLayer::default(),
                warning: Some(format!(
                    "skipping unreadable config file {}: {err}",
                    path.display()
                )),
            };
        }
    };

    match toml::from_str::<SettingsLayer>(&contents) {
        Ok(layer) => LayerLoad {
            layer,
            warning: None,
        },
        Err(err) => LayerLoad {
            layer: SettingsLayer::default(),
            warning: Some(format!(
                "skipping malformed config file {}: {err}",
                path.display()
            )),
        },
    }
}
