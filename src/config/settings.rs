use serde::Deserialize;

use crate::errors::{Result, TranslationError};
use crate::logging;

/// Built-in defaults, applied after every other layer.
pub const DEFAULT_SOURCE_LANG: &str = "de";
pub const DEFAULT_TARGET_LANG: &str = "en";
pub const DEFAULT_PROVIDER: &str = "helsinki";
pub const DEFAULT_MAX_LENGTH: usize = 512;
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_FORMAT: &str = "full";

/// One configuration layer: a partial set of values from a single source
/// (a config file or the CLI flags). Unset fields defer to lower layers.
///
/// Config files are flat TOML documents of these keys. Unknown keys are
/// ignored so an older binary keeps working with a newer config file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsLayer {
    pub source_lang: Option<String>,
    pub target_lang: Option<String>,
    pub provider: Option<String>,
    pub model_name: Option<String>,
    pub model_size: Option<String>,
    pub max_length: Option<usize>,
    pub log_level: Option<String>,
    pub log_format: Option<String>,
}

impl SettingsLayer {
    /// Merges `self` over `base`: every field set here wins, unset fields
    /// fall through to `base`.
    #[must_use]
    pub fn over(self, base: Self) -> Self {
        Self {
            source_lang: self.source_lang.or(base.source_lang),
            target_lang: self.target_lang.or(base.target_lang),
            provider: self.provider.or(base.provider),
            model_name: self.model_name.or(base.model_name),
            model_size: self.model_size.or(base.model_size),
            max_length: self.max_length.or(base.max_length),
            log_level: self.log_level.or(base.log_level),
            log_format: self.log_format.or(base.log_format),
        }
    }
}

/// The fully resolved configuration. Built once at startup by
/// [`resolve_settings`] and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Source language code, substituted into pair-based model templates.
    pub source_lang: String,
    /// Target language code.
    pub target_lang: String,
    /// Provider id looked up in the model registry.
    pub provider: String,
    /// Explicit model identifier; set, it bypasses provider resolution.
    pub model_name: Option<String>,
    /// Model size for size-parameterized providers.
    pub model_size: Option<String>,
    /// Maximum sequence length forwarded to the backend per call.
    pub max_length: usize,
    /// Log level for the tracing subscriber.
    pub log_level: String,
    /// Log format for the tracing subscriber.
    pub log_format: String,
}

impl Settings {
    fn validate(&self) -> Result<()> {
        if self.max_length == 0 {
            return Err(TranslationError::Config {
                message: "max_length must be at least 1".to_string(),
            });
        }
        if !logging::is_valid_level(&self.log_level) {
            return Err(TranslationError::Config {
                message: format!(
                    "unknown log level '{}' (expected one of: {})",
                    self.log_level,
                    logging::LOG_LEVELS.join(", ")
                ),
            });
        }
        if !logging::is_valid_format(&self.log_format) {
            return Err(TranslationError::Config {
                message: format!(
                    "unknown log format '{}' (expected one of: {})",
                    self.log_format,
                    logging::LOG_FORMATS.join(", ")
                ),
            });
        }
        Ok(())
    }
}

/// Merges configuration layers into immutable [`Settings`].
///
/// `layers` are ordered lowest precedence first (user config file, then
/// project config file, then CLI flags); for each field the last layer that
/// sets it wins. Fields no layer sets take the built-in defaults.
///
/// # Errors
///
/// Returns [`TranslationError::Config`] when a merged value fails
/// validation (zero `max_length`, unknown log level or format).
pub fn resolve_settings<I>(layers: I) -> Result<Settings>
where
    I: IntoIterator<Item = SettingsLayer>,
{
    let merged = layers
        .into_iter()
        .fold(SettingsLayer::default(), |base, layer| layer.over(base));

    let settings = Settings {
        source_lang: merged
            .source_lang
            .unwrap_or_else(|| DEFAULT_SOURCE_LANG.to_string()),
        target_lang: merged
            .target_lang
            .unwrap_or_else(|| DEFAULT_TARGET_LANG.to_string()),
        provider: merged
            .provider
            .unwrap_or_else(|| DEFAULT_PROVIDER.to_string()),
        model_name: merged.model_name,
        model_size: merged.model_size,
        max_length: merged.max_length.unwrap_or(DEFAULT_MAX_LENGTH),
        log_level: merged
            .log_level
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        log_format: merged
            .log_format
            .unwrap_or_else(|| DEFAULT_LOG_FORMAT.to_string()),
    };

    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_no_layer_sets_anything() {
        let settings = resolve_settings([SettingsLayer::default()]).unwrap();

        assert_eq!(settings.source_lang, "de");
        assert_eq!(settings.target_lang, "en");
        assert_eq!(settings.provider, "helsinki");
        assert_eq!(settings.max_length, 512);
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.log_format, "full");
        assert!(settings.model_name.is_none());
        assert!(settings.model_size.is_none());
    }

    #[test]
    fn test_later_layer_wins_per_field() {
        let file = SettingsLayer {
            target_lang: Some("fr".to_string()),
            max_length: Some(128),
            ..SettingsLayer::default()
        };
        let cli = SettingsLayer {
            target_lang: Some("ja".to_string()),
            ..SettingsLayer::default()
        };

        let settings = resolve_settings([file, cli]).unwrap();

        // CLI wins for target_lang, the file value survives for max_length.
        assert_eq!(settings.target_lang, "ja");
        assert_eq!(settings.max_length, 128);
        assert_eq!(settings.source_lang, "de");
    }

    #[test]
    fn test_unset_fields_fall_through_all_layers() {
        let user = SettingsLayer {
            provider: Some("facebook".to_string()),
            ..SettingsLayer::default()
        };
        let project = SettingsLayer::default();
        let cli = SettingsLayer::default();

        let settings = resolve_settings([user, project, cli]).unwrap();

        assert_eq!(settings.provider, "facebook");
    }

    #[test]
    fn test_zero_max_length_is_rejected() {
        let layer = SettingsLayer {
            max_length: Some(0),
            ..SettingsLayer::default()
        };

        let result = resolve_settings([layer]);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("max_length"));
    }

    #[test]
    fn test_unknown_log_level_is_rejected() {
        let layer = SettingsLayer {
            log_level: Some("loud".to_string()),
            ..SettingsLayer::default()
        };

        let result = resolve_settings([layer]);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("log level"));
    }

    #[test]
    fn test_uppercase_log_level_is_accepted() {
        let layer = SettingsLayer {
            log_level: Some("DEBUG".to_string()),
            ..SettingsLayer::default()
        };

        let settings = resolve_settings([layer]).unwrap();

        assert_eq!(settings.log_level, "DEBUG");
    }

    #[test]
    fn test_unknown_keys_in_toml_are_ignored() {
        let layer: SettingsLayer =
            toml::from_str("target_lang = \"fr\"\nfuture_knob = true\n").unwrap();

        assert_eq!(layer.target_lang, Some("fr".to_string()));
    }
}
