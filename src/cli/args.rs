use clap::{Parser, Subcommand};

use crate::config::SettingsLayer;

#[derive(Parser, Debug)]
#[command(name = "mt")]
#[command(about = "Machine translation CLI for Hugging Face translation models")]
#[command(version)]
pub struct Args {
    /// Text to translate, given inline (reads stdin if neither this nor --input is set)
    #[arg(long, conflicts_with = "input")]
    pub text: Option<String>,

    /// UTF-8 text file to translate
    #[arg(short = 'i', long)]
    pub input: Option<String>,

    /// Write the translation to this file instead of stdout
    #[arg(short = 'o', long)]
    pub output: Option<String>,

    /// Source language code (e.g., de)
    #[arg(short = 'f', long = "from")]
    pub from: Option<String>,

    /// Target language code (e.g., en)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Model provider (see `mt providers`)
    #[arg(short = 'p', long)]
    pub provider: Option<String>,

    /// Explicit model identifier, bypassing provider resolution
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Model size for size-parameterized providers (e.g., 418M, 1.2B)
    #[arg(long)]
    pub model_size: Option<String>,

    /// Maximum sequence length per backend call
    #[arg(long)]
    pub max_length: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (full, compact, pretty, json)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Treat empty input as a successful no-op instead of an error
    #[arg(long)]
    pub allow_empty: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Args {
    /// The highest-precedence configuration layer: whatever was set on the
    /// command line.
    #[must_use]
    pub fn settings_layer(&self) -> SettingsLayer {
        SettingsLayer {
            source_lang: self.from.clone(),
            target_lang: self.to.clone(),
            provider: self.provider.clone(),
            model_name: self.model.clone(),
            model_size: self.model_size.clone(),
            max_length: self.max_length,
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List known model providers
    Providers {
        /// Show details for one provider
        provider: Option<String>,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_text_and_input_conflict() {
        let result = Args::try_parse_from(["mt", "--text", "hallo", "--input", "a.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_flags_become_the_top_layer() {
        let args = Args::try_parse_from([
            "mt",
            "--from",
            "fr",
            "--to",
            "en",
            "--provider",
            "facebook",
            "--model-size",
            "1.2B",
            "--max-length",
            "256",
        ])
        .unwrap();

        let layer = args.settings_layer();
        assert_eq!(layer.source_lang, Some("fr".to_string()));
        assert_eq!(layer.target_lang, Some("en".to_string()));
        assert_eq!(layer.provider, Some("facebook".to_string()));
        assert_eq!(layer.model_size, Some("1.2B".to_string()));
        assert_eq!(layer.max_length, Some(256));
        assert!(layer.model_name.is_none());
    }

    #[test]
    fn test_no_flags_is_an_empty_layer() {
        let args = Args::try_parse_from(["mt"]).unwrap();
        let layer = args.settings_layer();
        assert!(layer.source_lang.is_none());
        assert!(layer.target_lang.is_none());
        assert!(layer.provider.is_none());
        assert!(layer.max_length.is_none());
    }
}
