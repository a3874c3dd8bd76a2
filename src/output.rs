//! Output sink handling.
//!
//! Translated text goes to exactly one sink per run: a named file or
//! stdout. Logs and status go to stderr (via tracing), so stdout stays
//! pipeable. A sink is created only after input validation has succeeded;
//! callers uphold that ordering so a bad input never leaves a truncated
//! output file behind.

use std::fs;
use std::io::{self, Write};

use crate::errors::{Result, TranslationError};

/// Label used for the stdout sink in error messages.
const STDOUT_LABEL: &str = "standard output";

/// Where translated text is written.
///
/// Writes are incremental; in streaming mode each translated chunk lands in
/// the sink before the next chunk is read. On failure, bytes already
/// written stay put.
#[derive(Debug)]
pub struct OutputSink {
    kind: SinkKind,
    /// Whether the last written text ended with a newline.
    ends_with_newline: bool,
    wrote_anything: bool,
}

#[derive(Debug)]
enum SinkKind {
    File { path: String, file: fs::File },
    Stdout(io::Stdout),
}

impl OutputSink {
    /// Creates the sink: truncates/creates `path`, or wraps stdout when
    /// `path` is `None`.
    ///
    /// # Errors
    ///
    /// [`TranslationError::OutputWrite`] when the file cannot be created.
    pub fn create(path: Option<&str>) -> Result<Self> {
        let kind = match path {
            Some(path) => {
                let file = fs::File::create(path)
                    .map_err(|source| write_error(path, source))?;
                SinkKind::File {
                    path: path.to_string(),
                    file,
                }
            }
            None => SinkKind::Stdout(io::stdout()),
        };
        Ok(Self {
            kind,
            ends_with_newline: false,
            wrote_anything: false,
        })
    }

    #[must_use]
    pub const fn is_stdout(&self) -> bool {
        matches!(self.kind, SinkKind::Stdout(_))
    }

    /// Writes `text` and flushes, so a reader of the sink sees each chunk
    /// as soon as it is translated.
    ///
    /// # Errors
    ///
    /// [`TranslationError::OutputWrite`] on any I/O failure.
    pub fn write_text(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        let result = match &mut self.kind {
            SinkKind::File { file, .. } => {
                file.write_all(text.as_bytes()).and_then(|()| file.flush())
            }
            SinkKind::Stdout(stdout) => {
                let mut lock = stdout.lock();
                lock.write_all(text.as_bytes()).and_then(|()| lock.flush())
            }
        };
        result.map_err(|source| write_error(self.label(), source))?;
        self.wrote_anything = true;
        self.ends_with_newline = text.ends_with('\n');
        Ok(())
    }

    /// Final flush. For the stdout sink this also terminates the output
    /// with a newline when the translated text did not bring its own, so
    /// the shell prompt starts on a fresh line.
    ///
    /// # Errors
    ///
    /// [`TranslationError::OutputWrite`] on any I/O failure.
    pub fn finish(&mut self) -> Result<()> {
        if self.is_stdout() && self.wrote_anything && !self.ends_with_newline {
            self.write_text("\n")?;
        }
        let result = match &mut self.kind {
            SinkKind::File { file, .. } => file.flush(),
            SinkKind::Stdout(stdout) => stdout.lock().flush(),
        };
        result.map_err(|source| write_error(self.label(), source))
    }

    fn label(&self) -> &str {
        match &self.kind {
            SinkKind::File { path, .. } => path,
            SinkKind::Stdout(_) => STDOUT_LABEL,
        }
    }
}

fn write_error(path: &str, source: io::Error) -> TranslationError {
    TranslationError::OutputWrite {
        path: path.to_string(),
        source,
    }
}

/// Prints the labeled before/after block used when a short input is
/// displayed on the console.
pub fn print_translation_block(
    source_lang: &str,
    target_lang: &str,
    input: &str,
    translation: &str,
) {
    println!("\n--- Translation ---");
    println!("{source_lang}: {input}");
    println!("{target_lang}: {translation}");
    println!("-------------------");
}
