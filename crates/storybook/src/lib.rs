//! Storybook - illustrated children's storybooks from the Gemini API
//!
//! Generates a short story about Isaac Newton discovering gravity, illustrates every
//! sentence, and writes the images plus a `storybook.json` manifest for a front end to
//! render.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use storybook::{
//!     AssemblerSettings, Credentials, FileSystemStorage, GeminiClient, StorybookAssembler,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = Credentials::from_env()?;
//!     let client = GeminiClient::new(credentials.api_key())?;
//!     let storage = FileSystemStorage::new("nextjs-app/public/storybook")?;
//!
//!     StorybookAssembler::new(client, storage, AssemblerSettings::default())
//!         .run()
//!         .await?;
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `storybook-error` - Error types
//! - `storybook-core` - Requests, responses, pages and the manifest
//! - `storybook-interface` - `StorybookDriver` trait
//! - `storybook-models` - Gemini client on `gemini-rust`
//! - `storybook-storage` - Output directory access
//! - `storybook-generation` - Story, illustration and assembly pipeline
//!
//! This crate re-exports everything and adds configuration and logging for the binary.

mod config;
mod logging;

pub use crate::config::{API_KEY_VAR, Credentials, StorybookConfig};
pub use crate::logging::init_logging;

pub use storybook_core::*;
pub use storybook_error::*;
pub use storybook_generation::*;
pub use storybook_interface::*;
pub use storybook_models::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiClient};
pub use storybook_storage::{AssetReference, AssetStatus, FileSystemStorage};
