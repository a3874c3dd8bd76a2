use std::process;

use anyhow::Result;
use clap::Parser;

use mt_cli::cli::commands::{providers, translate};
use mt_cli::cli::{Args, Command};
use mt_cli::errors::TranslationError;

// Translation is strictly sequential: one backend call in flight at a time.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();

    if let Err(err) = run(args).await {
        eprintln!("error: {err:#}");
        process::exit(exit_code(&err));
    }
}

async fn run(args: Args) -> Result<()> {
    let overrides = args.settings_layer();

    match args.command {
        Some(Command::Providers { provider }) => {
            providers::print_providers(provider.as_deref())?;
        }
        None => {
            let options = translate::TranslateOptions {
                text: args.text,
                input: args.input,
                output: args.output,
                allow_empty: args.allow_empty,
                overrides,
            };
            translate::run_translate(options).await?;
        }
    }

    Ok(())
}

/// Maps known error kinds to `sysexits` statuses; anything unexpected is a
/// plain failure.
fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<TranslationError>()
        .map_or(1, TranslationError::exit_code)
}
