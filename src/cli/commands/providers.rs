//! Provider listing command handler.

use crate::config::DEFAULT_PROVIDER;
use crate::errors::{Result, TranslationError};
use crate::translation::{ModelTemplate, PROVIDERS, known_providers, provider_spec};

/// Prints the provider registry to stdout.
///
/// If `specific_provider` is given, shows detailed information for that
/// provider. Otherwise, lists all providers with their model templates.
///
/// # Errors
///
/// [`TranslationError::UnknownProvider`] when `specific_provider` is not in
/// the registry.
pub fn print_providers(specific_provider: Option<&str>) -> Result<()> {
    if let Some(provider_id) = specific_provider {
        let spec = provider_spec(provider_id).ok_or_else(|| TranslationError::UnknownProvider {
            provider: provider_id.to_string(),
            known: known_providers(),
        })?;

        let is_default = spec.id == DEFAULT_PROVIDER;
        println!(
            "Provider: {}{}",
            spec.id,
            if is_default { " (default)" } else { "" }
        );
        println!("  name   = {}", spec.display_name);
        match spec.template {
            ModelTemplate::LanguagePair(template) => {
                println!("  models = {template}");
            }
            ModelTemplate::Sized { template, sizes } => {
                println!("  models = {template}");
                println!("  sizes:");
                for (position, size) in sizes.iter().enumerate() {
                    println!(
                        "    - {size}{}",
                        if position == 0 { " (default)" } else { "" }
                    );
                }
            }
        }
    } else {
        println!("Known providers:\n");
        for spec in PROVIDERS {
            let is_default = spec.id == DEFAULT_PROVIDER;
            println!(
                "  {}{}",
                spec.id,
                if is_default { " (default)" } else { "" }
            );
            println!("    name: {}", spec.display_name);
            match spec.template {
                ModelTemplate::LanguagePair(template) => {
                    println!("    models: {template}");
                }
                ModelTemplate::Sized { template, sizes } => {
                    println!("    models: {template}");
                    println!("    sizes: {}", sizes.join(", "));
                }
            }
        }
    }

    Ok(())
}
