//! Story, illustration and manifest generation pipeline.
//!
//! The pipeline is strictly sequential:
//!
//! 1. [`StoryGenerator`] asks the model for a short story as a JSON array of sentences
//! 2. [`ImageGenerator`] requests one illustration per sentence and saves it
//! 3. [`StorybookAssembler`] drives both, builds the [`Storybook`] manifest, writes it
//!    and prints a [`VerificationReport`]
//!
//! [`ResponseProbe`] is a standalone diagnostic that reports the shape of a single
//! image response.
//!
//! [`Storybook`]: storybook_core::Storybook

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assembler;
mod extraction;
mod image;
mod probe;
mod prompts;
mod report;
mod story;

pub use assembler::{
    AssemblerSettings, AssemblerSettingsBuilder, DEFAULT_DESCRIPTION, DEFAULT_IMAGE_MODEL,
    DEFAULT_PAGE_DELAY, DEFAULT_STORY_MODEL, DEFAULT_TITLE, MANIFEST_FILE, StorybookAssembler,
};
pub use extraction::{parse_story, strip_code_fence};
pub use image::ImageGenerator;
pub use probe::{PartReport, PayloadEncoding, PayloadReport, ProbeReport, ResponseProbe};
pub use prompts::{PROBE_PROMPT, STORY_PROMPT, illustration_prompt};
pub use report::{PageReport, VerificationReport};
pub use story::StoryGenerator;
