//! Error types shared across the crate.
//!
//! Fatal conditions are variants of [`TranslationError`]; configuration layer
//! problems are deliberately *not* here because they are warnings, never
//! errors. Backend-side failures carry a [`BackendError`] describing what the
//! remote service did.

use std::io;

use thiserror::Error;

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, TranslationError>;

/// A failure reported by the translation backend for a single call.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The request never completed (DNS, connect, TLS, body transfer).
    #[error("request to translation backend failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("translation backend returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// The backend answered 2xx but the body does not match the expected
    /// shape (JSON array with a non-empty `translation_text` first element).
    #[error("unexpected backend response: {0}")]
    InvalidResponse(String),
}

/// Fatal errors surfaced to the user.
///
/// Every variant terminates the run; the binary maps each to a `sysexits`
/// status via [`TranslationError::exit_code`].
#[derive(Debug, Error)]
pub enum TranslationError {
    /// The input source could not be opened, read, or decoded as UTF-8.
    #[error("cannot read input from {path}: {source}")]
    InputUnreadable {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The whole-file console path refuses inputs past the display cap.
    #[error(
        "input file '{path}' is {size} bytes, which exceeds the {limit} byte \
         console display limit; pass --output to stream the translation to a file"
    )]
    InputTooLarge { path: String, size: u64, limit: u64 },

    /// The resolved input was empty and `--allow-empty` was not given.
    #[error("input is empty (pass --allow-empty to treat this as a no-op)")]
    EmptyInput,

    /// The configured provider id is not in the registry.
    #[error("unknown provider '{provider}' (known providers: {known})")]
    UnknownProvider { provider: String, known: String },

    /// A model size outside the provider's permitted set.
    #[error("invalid model size '{size}' for provider '{provider}' (permitted sizes: {permitted})")]
    InvalidModelSize {
        provider: String,
        size: String,
        permitted: String,
    },

    /// A resolved setting failed validation after all layers merged.
    #[error("invalid configuration: {message}")]
    Config { message: String },

    /// The backend failed a translation call. `chunk` holds the zero-based
    /// chunk index in streaming mode and `None` for a single call.
    #[error("translation failed{}: {source}", chunk_label(.chunk))]
    BackendFailure {
        chunk: Option<usize>,
        #[source]
        source: BackendError,
    },

    /// Writing to the output sink failed. Bytes already written stay put.
    #[error("cannot write output to {path}: {source}")]
    OutputWrite {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl TranslationError {
    /// Maps the error to a BSD `sysexits` status for the process exit.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InputUnreadable { .. } | Self::EmptyInput => exitcode::NOINPUT,
            Self::InputTooLarge { .. } => exitcode::DATAERR,
            Self::UnknownProvider { .. } | Self::InvalidModelSize { .. } | Self::Config { .. } => {
                exitcode::CONFIG
            }
            Self::BackendFailure { .. } => exitcode::UNAVAILABLE,
            Self::OutputWrite { .. } => exitcode::IOERR,
        }
    }
}

fn chunk_label(chunk: &Option<usize>) -> String {
    chunk.map_or_else(String::new, |index| format!(" on chunk {index}"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_failure_names_the_chunk() {
        let err = TranslationError::BackendFailure {
            chunk: Some(2),
            source: BackendError::InvalidResponse("empty result list".to_string()),
        };
        let message = err.to_string();
        assert!(message.contains("on chunk 2"), "got: {message}");
    }

    #[test]
    fn test_backend_failure_without_chunk_has_no_index() {
        let err = TranslationError::BackendFailure {
            chunk: None,
            source: BackendError::Api {
                status: 503,
                body: "loading".to_string(),
            },
        };
        let message = err.to_string();
        assert!(!message.contains("chunk"), "got: {message}");
        assert!(message.starts_with("translation failed:"), "got: {message}");
    }

    #[test]
    fn test_exit_codes_follow_sysexits() {
        assert_eq!(TranslationError::EmptyInput.exit_code(), exitcode::NOINPUT);
        assert_eq!(
            TranslationError::UnknownProvider {
                provider: "x".to_string(),
                known: String::new(),
            }
            .exit_code(),
            exitcode::CONFIG
        );
        assert_eq!(
            TranslationError::OutputWrite {
                path: "out.txt".to_string(),
                source: io::Error::other("disk full"),
            }
            .exit_code(),
            exitcode::IOERR
        );
    }
}
