use std::io::{self, IsTerminal};

use anyhow::Result;
use tracing::{info, warn};

use crate::config::{self, Settings, SettingsLayer};
use crate::errors::TranslationError;
use crate::input::{ChunkReader, InputReader};
use crate::logging;
use crate::output::{self, OutputSink};
use crate::translation::{
    self, HfInferenceClient, ModelTemplate, TranslationBackend, TranslationJob,
};

pub struct TranslateOptions {
    pub text: Option<String>,
    pub input: Option<String>,
    pub output: Option<String>,
    pub allow_empty: bool,
    /// CLI flags as the highest-precedence settings layer.
    pub overrides: SettingsLayer,
}

/// Runs a translation end to end.
///
/// Order matters here: settings resolve first (so logging can be
/// initialized from them and deferred config warnings emitted), the model
/// name resolves next (an impossible model must fail before any input is
/// read), and only then is input touched. Output sinks are created after
/// input validation, inside the helpers below.
pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let (settings, warnings) = resolve_layers(options.overrides)?;
    logging::init(&settings.log_level, &settings.log_format);
    for warning in &warnings {
        warn!("{warning}");
    }

    if settings.model_name.is_none()
        && settings.model_size.is_some()
        && let Some(spec) = translation::provider_spec(&settings.provider)
        && matches!(spec.template, ModelTemplate::LanguagePair(_))
    {
        warn!(
            provider = %settings.provider,
            "model size is ignored by language-pair providers"
        );
    }

    let model_id = translation::resolve_model_name(
        &settings.provider,
        &settings.source_lang,
        &settings.target_lang,
        settings.model_name.as_deref(),
        settings.model_size.as_deref(),
    )?;
    info!(model = %model_id, "resolved translation model");

    let job = TranslationJob {
        model_id,
        max_length: settings.max_length,
    };
    let backend = HfInferenceClient::from_env();

    if let Some(text) = options.text.as_deref() {
        return translate_inline(
            &backend,
            &job,
            &settings,
            text,
            options.output.as_deref(),
            options.allow_empty,
        )
        .await;
    }

    if let Some(path) = options.input.as_deref() {
        if let Some(output) = options.output.as_deref() {
            return stream_file(&backend, &job, path, output, options.allow_empty).await;
        }
        return file_to_console(&backend, &job, &settings, path, options.allow_empty).await;
    }

    stream_stdin(&backend, &job, options.output.as_deref(), options.allow_empty).await
}

/// Inline `--text` input: one backend call, then either the labeled console
/// block or a bare write to the output file.
async fn translate_inline(
    backend: &impl TranslationBackend,
    job: &TranslationJob,
    settings: &Settings,
    text: &str,
    output: Option<&str>,
    allow_empty: bool,
) -> Result<()> {
    if text.is_empty() {
        return finish_empty(output, allow_empty);
    }

    let translated = translation::translate_single(backend, job, text).await?;

    match output {
        Some(path) => {
            let mut sink = OutputSink::create(Some(path))?;
            sink.write_text(&translated)?;
            sink.finish()?;
        }
        None => {
            output::print_translation_block(
                &settings.source_lang,
                &settings.target_lang,
                text,
                &translated,
            );
        }
    }

    info!("translation complete");
    Ok(())
}

/// File input shown on the console: whole read (capped), one backend call,
/// labeled block.
async fn file_to_console(
    backend: &impl TranslationBackend,
    job: &TranslationJob,
    settings: &Settings,
    path: &str,
    allow_empty: bool,
) -> Result<()> {
    let text = InputReader::read_whole(path)?;
    if text.is_empty() {
        return finish_empty(None, allow_empty);
    }

    let translated = translation::translate_single(backend, job, &text).await?;
    output::print_translation_block(
        &settings.source_lang,
        &settings.target_lang,
        &text,
        &translated,
    );

    info!("translation complete");
    Ok(())
}

/// File input streamed to an output file, chunk by chunk.
async fn stream_file(
    backend: &impl TranslationBackend,
    job: &TranslationJob,
    path: &str,
    output: &str,
    allow_empty: bool,
) -> Result<()> {
    let file = InputReader::open(path)?;
    let chunks = ChunkReader::new(file);

    let summary =
        translation::translate_stream(backend, job, chunks, path, Some(output), allow_empty)
            .await?;

    info!(chunks = summary.chunks, "translation complete");
    Ok(())
}

/// Stdin input, streamed to stdout or to an output file.
async fn stream_stdin(
    backend: &impl TranslationBackend,
    job: &TranslationJob,
    output: Option<&str>,
    allow_empty: bool,
) -> Result<()> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("Enter text to translate (press Ctrl+D to finish):");
    }

    let chunks = ChunkReader::new(stdin.lock());
    let summary = translation::translate_stream(backend, job, chunks, "stdin", output, allow_empty)
        .await?;

    info!(chunks = summary.chunks, "translation complete");
    Ok(())
}

/// Shared empty-input policy for the single-call paths.
fn finish_empty(output: Option<&str>, allow_empty: bool) -> Result<()> {
    if !allow_empty {
        return Err(TranslationError::EmptyInput.into());
    }
    let mut sink = OutputSink::create(output)?;
    sink.finish()?;
    info!("input is empty; nothing to translate");
    Ok(())
}

/// Loads the file layers and stacks the CLI layer on top.
///
/// Warnings from unusable config files are returned for the caller to log
/// once the subscriber exists; a broken config file never stops a run.
fn resolve_layers(
    cli_layer: SettingsLayer,
) -> crate::errors::Result<(Settings, Vec<String>)> {
    let mut layers = Vec::with_capacity(3);
    let mut warnings = Vec::new();

    // Missing files are normal and contribute an empty layer.
    if let Some(path) = config::user_config_path() {
        let load = config::read_layer(&path);
        if let Some(warning) = load.warning {
            warnings.push(warning);
        }
        layers.push(load.layer);
    }

    let project = config::read_layer(&config::project_config_path());
    if let Some(warning) = project.warning {
        warnings.push(warning);
    }
    layers.push(project.layer);

    layers.push(cli_layer);

    let settings = config::resolve_settings(layers)?;
    Ok((settings, warnings))
}
