//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Storybook - illustrated children's storybook generator
#[derive(Parser, Debug)]
#[command(name = "storybook")]
#[command(about = "Generate an illustrated children's storybook with Gemini", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute (defaults to `generate`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,
}

impl Cli {
    /// The requested command, `generate` when none was given.
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Generate { output_dir: None })
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Generate the story, illustrations and manifest
    Generate {
        /// Write output here instead of the configured directory
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },

    /// Send one image request and describe the response shape
    Probe {
        /// Prompt to send (defaults to the apple tree scene)
        #[arg(long)]
        prompt: Option<String>,

        /// Model to probe (defaults to the configured image model)
        #[arg(long)]
        model: Option<String>,

        /// Where to write the first image in the response
        #[arg(long, default_value = "test_output.png")]
        save: PathBuf,
    },
}
