//! Error types for the Storybook builder.
//!
//! This crate provides the foundation error types used throughout the Storybook workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use storybook_error::{StorybookResult, StoryError, StoryErrorKind};
//!
//! fn fetch_story() -> StorybookResult<String> {
//!     Err(StoryError::new(StoryErrorKind::StoryParse("not an array".to_string())))?
//! }
//!
//! match fetch_story() {
//!     Ok(text) => println!("Got: {}", text),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod gemini;
mod json;
mod storage;
mod story;

pub use config::ConfigError;
pub use error::{StorybookError, StorybookErrorKind, StorybookResult};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use json::JsonError;
pub use storage::{StorageError, StorageErrorKind};
pub use story::{StoryError, StoryErrorKind};
