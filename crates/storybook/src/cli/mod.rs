//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the storybook binary.

mod commands;
mod generate;
mod probe;

pub use commands::{Cli, Commands};
pub use generate::run_generate;
pub use probe::run_probe;
