//! Core data types for the Storybook builder.
//!
//! This crate provides the story, page and manifest records persisted for the web
//! front end, plus the provider-neutral request and response types exchanged with a
//! generation backend.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod manifest;
mod media;
mod modality;
mod output;
mod page;
mod request;
mod story;

pub use manifest::Storybook;
pub use media::MediaSource;
pub use modality::Modality;
pub use output::Output;
pub use page::{Page, extract_words, scene_filename};
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
pub use story::{EXPECTED_SENTENCES, Story};
