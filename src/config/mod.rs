mod settings;
mod sources;

pub use settings::{
    DEFAULT_LOG_FORMAT, DEFAULT_LOG_LEVEL, DEFAULT_MAX_LENGTH, DEFAULT_PROVIDER,
    DEFAULT_SOURCE_LANG, DEFAULT_TARGET_LANG, Settings, SettingsLayer, resolve_settings,
};
pub use sources::{LayerLoad, PROJECT_CONFIG_FILE, project_config_path, read_layer, user_config_path};
