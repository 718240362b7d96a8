//! Storybook CLI binary.
//!
//! - `storybook` / `storybook generate`: build the storybook into the output directory
//! - `storybook probe`: inspect the shape of one image response

use clap::Parser;
use std::process::ExitCode;
use storybook::{Credentials, StorybookConfig, StorybookResult, init_logging};

mod cli;

use cli::{Cli, Commands, run_generate, run_probe};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose, cli.json_logs) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Storybook failed");
            eprintln!("Error: {}", e);
            if e.is_missing_credential() {
                eprintln!("Usage: GEMINI_API_KEY=your_key storybook");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> StorybookResult<()> {
    let config = StorybookConfig::load()?;
    // Resolved before anything touches the network or the output directory.
    let credentials = Credentials::from_env()?;

    match cli.command() {
        Commands::Generate { output_dir } => {
            run_generate(&config, &credentials, output_dir).await?;
        }

        Commands::Probe {
            prompt,
            model,
            save,
        } => {
            run_probe(&config, &credentials, prompt.as_deref(), model.as_deref(), &save).await?;
        }
    }

    Ok(())
}
