#![allow(clippy::unwrap_used)]
//! Config priority contract tests.
//!
//! These tests verify that settings layers merge in the documented order.
//! Priority order (highest to lowest):
//! 1. CLI flags
//! 2. Project config file (`./.mt.toml`)
//! 3. User config file (`~/.config/mt/config.toml`)
//! 4. Built-in defaults

use std::fs;

use mt_cli::config::{SettingsLayer, read_layer, resolve_settings};
use tempfile::TempDir;

fn layer(build: impl FnOnce(&mut SettingsLayer)) -> SettingsLayer {
    let mut layer = SettingsLayer::default();
    build(&mut layer);
    layer
}

#[test]
fn test_cli_layer_overrides_file_layers() {
    let user = layer(|l| {
        l.target_lang = Some("ja".to_string());
        l.max_length = Some(128);
    });
    let project = layer(|l| l.target_lang = Some("fr".to_string()));
    let cli = layer(|l| l.target_lang = Some("en".to_string()));

    let settings = resolve_settings([user, project, cli]).unwrap();

    // CLI wins for the contested field; the user value survives elsewhere.
    assert_eq!(settings.target_lang, "en");
    assert_eq!(settings.max_length, 128);
}

#[test]
fn test_project_layer_overrides_user_layer() {
    let user = layer(|l| l.provider = Some("facebook".to_string()));
    let project = layer(|l| l.provider = Some("nllb".to_string()));
    let cli = SettingsLayer::default();

    let settings = resolve_settings([user, project, cli]).unwrap();

    assert_eq!(settings.provider, "nllb");
}

#[test]
fn test_defaults_fill_unset_fields() {
    let settings = resolve_settings([
        SettingsLayer::default(),
        SettingsLayer::default(),
        SettingsLayer::default(),
    ])
    .unwrap();

    assert_eq!(settings.source_lang, "de");
    assert_eq!(settings.target_lang, "en");
    assert_eq!(settings.provider, "helsinki");
    assert_eq!(settings.max_length, 512);
    assert_eq!(settings.log_level, "info");
    assert!(settings.model_name.is_none());
}

#[test]
fn test_file_layer_feeds_resolution() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "source_lang = \"nl\"\ntarget_lang = \"en\"\nprovider = \"facebook\"\nmax_length = 256\n",
    )
    .unwrap();

    let load = read_layer(&path);
    assert!(load.warning.is_none());

    let settings = resolve_settings([load.layer, SettingsLayer::default()]).unwrap();

    assert_eq!(settings.source_lang, "nl");
    assert_eq!(settings.provider, "facebook");
    assert_eq!(settings.max_length, 256);
}

#[test]
fn test_malformed_file_contributes_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "provider = [broken\n").unwrap();

    let load = read_layer(&path);
    assert!(load.warning.is_some());

    // The broken layer is inert: values below it shine through unchanged.
    let user = layer(|l| l.provider = Some("nllb".to_string()));
    let settings = resolve_settings([user, load.layer]).unwrap();

    assert_eq!(settings.provider, "nllb");
}

#[test]
fn test_unknown_keys_in_config_files_are_ignored() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "provider = \"nllb\"\nfuture_knob = true\n").unwrap();

    let load = read_layer(&path);

    assert!(load.warning.is_none());
    assert_eq!(load.layer.provider, Some("nllb".to_string()));
}

#[test]
fn test_independent_fields_merge_from_different_layers() {
    let user = layer(|l| l.model_size = Some("1.2B".to_string()));
    let cli = layer(|l| l.model_name = Some("org/custom-model".to_string()));

    let settings = resolve_settings([user, cli]).unwrap();

    assert_eq!(settings.model_size, Some("1.2B".to_string()));
    assert_eq!(settings.model_name, Some("org/custom-model".to_string()));
}

#[test]
fn test_merged_settings_are_validated() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "max_length = 0\n").unwrap();

    let load = read_layer(&path);
    assert!(load.warning.is_none());

    let err = resolve_settings([load.layer]).unwrap_err();

    assert!(err.to_string().contains("max_length"));
    assert_eq!(err.exit_code(), exitcode::CONFIG);
}
