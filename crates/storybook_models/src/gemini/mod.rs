//! Google Gemini integration on top of `gemini-rust`.
//!
//! - [`GeminiClient`] sends `generateContent` requests through [`gemini_rust::Gemini`]
//! - `conversion` maps between `gemini-rust` types and `storybook_core` types

mod client;
mod conversion;

pub use client::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiClient, to_model};
pub use conversion::{from_gemini_response, to_generation_config};

/// Result type for Gemini operations.
pub type GeminiResult<T> = Result<T, storybook_error::GeminiError>;
