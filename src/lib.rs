//! # mt - Streaming Machine Translation CLI
//!
//! `mt` is a command-line tool for translating text through hosted neural
//! translation models. It streams arbitrarily large inputs through a
//! bounded-context model by splitting them into chunks at line boundaries,
//! translating one chunk at a time, and writing each result as soon as it
//! arrives.
//!
//! ## Features
//!
//! - **Streaming**: Inputs of any size are translated chunk by chunk, in
//!   order, with output written incrementally
//! - **Line integrity**: Chunk boundaries prefer newline positions, so lines
//!   are never torn apart mid-sentence unless a single line exceeds the
//!   chunk window
//! - **Provider registry**: Model names resolve from a provider template
//!   (`helsinki`, `facebook`, `nllb`) or an explicit `--model` override
//! - **Layered configuration**: Defaults, user config, project config, and
//!   CLI flags merge with last-writer-wins precedence
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate inline text (German to English by default)
//! mt --text "Guten Morgen"
//!
//! # Translate a file to stdout
//! mt -i notes.txt
//!
//! # Stream a large file into an output file
//! mt -i book.txt -o book.en.txt
//!
//! # Translate from stdin
//! cat report.txt | mt > report.en.txt
//!
//! # Pick a different language pair and provider
//! mt --from fr --to en --provider helsinki --text "Bonjour"
//! ```
//!
//! ## Configuration
//!
//! Settings are read from `~/.config/mt/config.toml`, then `./.mt.toml`,
//! then the CLI flags; later sources win per key:
//!
//! ```toml
//! source_lang = "de"
//! target_lang = "en"
//! provider = "helsinki"
//! max_length = 512
//! log_level = "info"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Layered configuration resolution.
pub mod config;

/// Error types and exit-code mapping.
pub mod errors;

/// Input reading and chunking.
pub mod input;

/// Tracing subscriber setup.
pub mod logging;

/// Output sink handling (file or stdout).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Model-name resolution, the backend client, and the chunk orchestrator.
pub mod translation;
