//! Logging initialization.
//!
//! Logs are tracing events written to stderr so that stdout stays a clean
//! data channel for translated text. The level and format come from the
//! resolved settings; a `RUST_LOG` environment filter, when set, wins over
//! the configured level.

use tracing_subscriber::EnvFilter;

/// Log levels accepted by `--log-level` and the config files.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Log formats accepted by `--log-format` and the config files.
pub const LOG_FORMATS: &[&str] = &["full", "compact", "pretty", "json"];

/// Installs the global tracing subscriber.
///
/// Must be called once, after settings resolution and before the first
/// event. `level` and `format` are validated during settings resolution, so
/// an unrecognized format here silently falls back to the default formatter.
pub fn init(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_ascii_lowercase()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        "json" => builder.json().init(),
        "pretty" => builder.pretty().init(),
        "compact" => builder.compact().init(),
        _ => builder.init(),
    }
}

/// Returns true when `level` is one of [`LOG_LEVELS`], ignoring case.
#[must_use]
pub fn is_valid_level(level: &str) -> bool {
    LOG_LEVELS.iter().any(|known| level.eq_ignore_ascii_case(known))
}

/// Returns true when `format` is one of [`LOG_FORMATS`], ignoring case.
#[must_use]
pub fn is_valid_format(format: &str) -> bool {
    LOG_FORMATS.iter().any(|known| format.eq_ignore_ascii_case(known))
}
