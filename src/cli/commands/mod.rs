//! Subcommand implementations.

/// Provider registry listing command handler.
pub mod providers;

/// Translation command handler.
pub mod translate;
