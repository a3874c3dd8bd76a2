//! Drives chunks through the backend, in order, writing as it goes.

use std::io;

use tracing::debug;

use crate::errors::{Result, TranslationError};
use crate::output::OutputSink;
use crate::translation::TranslationBackend;

/// The per-run constants of a translation: which model, and how much
/// context the backend gets per call.
#[derive(Debug, Clone)]
pub struct TranslationJob {
    pub model_id: String,
    pub max_length: usize,
}

/// What a completed streaming run did.
#[derive(Debug, Clone, Copy)]
pub struct StreamSummary {
    pub chunks: usize,
}

/// Translates one piece of text with a single backend call.
///
/// # Errors
///
/// [`TranslationError::BackendFailure`] with no chunk index.
pub async fn translate_single<B>(backend: &B, job: &TranslationJob, text: &str) -> Result<String>
where
    B: TranslationBackend,
{
    backend
        .translate(text, &job.model_id, job.max_length)
        .await
        .map_err(|source| TranslationError::BackendFailure {
            chunk: None,
            source,
        })
}

/// Streams `chunks` through the backend into a sink.
///
/// Chunks are translated strictly in order, one backend call in flight at a
/// time, and each result is written before the next chunk is read. The
/// first failure of any kind stops the run; output written so far stays.
/// When a source chunk ends with a newline and its translation does not,
/// the newline is restored so the output keeps the source's line structure.
///
/// The first chunk is read *before* the sink is created; for file sinks
/// that ordering guarantees an unreadable input never truncates an existing
/// output file. An empty first chunk means the whole source was empty
/// (the chunker emits an empty chunk only for an empty source): that is
/// fatal unless `allow_empty` is set, in which case the sink is created,
/// left empty, and the run succeeds as a no-op.
///
/// # Errors
///
/// [`TranslationError::InputUnreadable`] for chunk read failures (labeled
/// with `source_label`), [`TranslationError::BackendFailure`] carrying the
/// zero-based index of the failing chunk, and
/// [`TranslationError::OutputWrite`] for sink failures.
pub async fn translate_stream<B, I>(
    backend: &B,
    job: &TranslationJob,
    mut chunks: I,
    source_label: &str,
    output_path: Option<&str>,
    allow_empty: bool,
) -> Result<StreamSummary>
where
    B: TranslationBackend,
    I: Iterator<Item = io::Result<String>>,
{
    let first = match chunks.next() {
        Some(Ok(chunk)) => chunk,
        Some(Err(source)) => return Err(unreadable(source_label, source)),
        None => String::new(),
    };

    if first.is_empty() {
        if !allow_empty {
            return Err(TranslationError::EmptyInput);
        }
        debug!("input is empty; writing nothing");
        let mut sink = OutputSink::create(output_path)?;
        sink.finish()?;
        return Ok(StreamSummary { chunks: 0 });
    }

    let mut sink = OutputSink::create(output_path)?;
    let mut chunk = first;
    let mut index = 0usize;

    loop {
        debug!(chunk = index, chars = chunk.chars().count(), "translating chunk");

        let translated = backend
            .translate(&chunk, &job.model_id, job.max_length)
            .await
            .map_err(|source| TranslationError::BackendFailure {
                chunk: Some(index),
                source,
            })?;

        sink.write_text(&translated)?;
        if chunk.ends_with('\n') && !translated.ends_with('\n') {
            sink.write_text("\n")?;
        }

        index += 1;

        match chunks.next() {
            Some(Ok(next)) => chunk = next,
            Some(Err(source)) => return Err(unreadable(source_label, source)),
            None => break,
        }
    }

    sink.finish()?;
    Ok(StreamSummary { chunks: index })
}

fn unreadable(label: &str, source: io::Error) -> TranslationError {
    TranslationError::InputUnreadable {
        path: label.to_string(),
        source,
    }
}
