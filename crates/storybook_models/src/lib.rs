//! Gemini provider integration for the Storybook builder.
//!
//! # Example
//!
//! ```no_run
//! use storybook_core::{GenerateRequest, Modality};
//! use storybook_interface::StorybookDriver;
//! use storybook_models::GeminiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new("my-api-key")?;
//! let request = GenerateRequest::builder()
//!     .prompt("Draw a friendly apple tree")
//!     .model(Some("gemini-2.0-flash-exp".to_string()))
//!     .response_modalities(vec![Modality::Text, Modality::Image])
//!     .build()?;
//! let response = client.generate(&request).await?;
//! println!("{} parts", response.outputs.len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;

pub use gemini::{
    DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiClient, from_gemini_response, to_generation_config,
    to_model,
};
