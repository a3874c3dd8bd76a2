//! Provider registry and model-name resolution.
//!
//! A provider is a family of translation models on the backend hub, named
//! by a template. Resolution is pure string work: no network, no I/O, so an
//! impossible model request fails before any input is read.

use crate::errors::{Result, TranslationError};

/// How a provider derives a concrete model identifier.
#[derive(Debug, Clone, Copy)]
pub enum ModelTemplate {
    /// One model per language pair; `{source}` and `{target}` are replaced
    /// with the configured language codes, verbatim.
    LanguagePair(&'static str),
    /// One multilingual model per size; `{size}` is replaced with one of
    /// the permitted sizes. The first size is the default.
    Sized {
        template: &'static str,
        sizes: &'static [&'static str],
    },
}

/// A known provider of translation models.
#[derive(Debug, Clone, Copy)]
pub struct ProviderSpec {
    /// Registry id used in config files and `--provider`.
    pub id: &'static str,
    /// Human-readable name for the `providers` listing.
    pub display_name: &'static str,
    pub template: ModelTemplate,
}

/// All providers this tool knows how to name models for.
pub const PROVIDERS: &[ProviderSpec] = &[
    ProviderSpec {
        id: "helsinki",
        display_name: "Helsinki-NLP Opus-MT",
        template: ModelTemplate::LanguagePair("Helsinki-NLP/opus-mt-{source}-{target}"),
    },
    ProviderSpec {
        id: "facebook",
        display_name: "Facebook M2M-100",
        template: ModelTemplate::Sized {
            template: "facebook/m2m100_{size}",
            sizes: &["418M", "1.2B"],
        },
    },
    ProviderSpec {
        id: "nllb",
        display_name: "Facebook NLLB-200 (distilled)",
        template: ModelTemplate::Sized {
            template: "facebook/nllb-200-distilled-{size}",
            sizes: &["600M", "1.3B"],
        },
    },
];

/// Looks up a provider by id.
#[must_use]
pub fn provider_spec(id: &str) -> Option<&'static ProviderSpec> {
    PROVIDERS.iter().find(|spec| spec.id == id)
}

/// Comma-separated provider ids, for error messages and listings.
#[must_use]
pub fn known_providers() -> String {
    PROVIDERS
        .iter()
        .map(|spec| spec.id)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Resolves the model identifier sent to the backend.
///
/// An explicit `model_name` wins unconditionally and is returned unchanged,
/// whatever the other arguments say. Otherwise the provider's template is
/// instantiated: pair templates substitute the language codes verbatim (no
/// case-folding, no alias mapping), sized templates substitute the requested
/// size or, when none is given, the provider's default (first) size.
///
/// # Errors
///
/// [`TranslationError::UnknownProvider`] when `provider` is not in the
/// registry, [`TranslationError::InvalidModelSize`] when a requested size is
/// outside the provider's permitted set. Sizes are never clamped to the
/// nearest permitted value.
pub fn resolve_model_name(
    provider: &str,
    source_lang: &str,
    target_lang: &str,
    model_name: Option<&str>,
    model_size: Option<&str>,
) -> Result<String> {
    if let Some(name) = model_name {
        return Ok(name.to_string());
    }

    let spec = provider_spec(provider).ok_or_else(|| TranslationError::UnknownProvider {
        provider: provider.to_string(),
        known: known_providers(),
    })?;

    match spec.template {
        ModelTemplate::LanguagePair(template) => Ok(template
            .replace("{source}", source_lang)
            .replace("{target}", target_lang)),
        ModelTemplate::Sized { template, sizes } => {
            let size = match model_size {
                Some(size) if sizes.contains(&size) => size,
                Some(size) => {
                    return Err(TranslationError::InvalidModelSize {
                        provider: provider.to_string(),
                        size: size.to_string(),
                        permitted: sizes.join(", "),
                    });
                }
                None => sizes[0],
            };
            Ok(template.replace("{size}", size))
        }
    }
}
