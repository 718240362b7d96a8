//! Per-sentence illustration generation.

use crate::illustration_prompt;
use storybook_core::{GenerateRequest, Modality, scene_filename};
use storybook_error::{StoryError, StoryErrorKind, StorybookResult};
use storybook_interface::StorybookDriver;
use storybook_storage::FileSystemStorage;
use tracing::{info, instrument};

/// Characters of the sentence shown in progress logs.
const PREVIEW_CHARS: usize = 50;

/// Requests one illustration and saves the first inline image in the response.
#[derive(Debug, Clone)]
pub struct ImageGenerator<D> {
    driver: D,
    storage: FileSystemStorage,
    model: String,
}

impl<D: StorybookDriver> ImageGenerator<D> {
    /// Create a generator that writes into `storage` using `model`.
    pub fn new(driver: D, storage: FileSystemStorage, model: impl Into<String>) -> Self {
        Self {
            driver,
            storage,
            model: model.into(),
        }
    }

    /// Generate and save the illustration for the sentence at 0-based `index`.
    ///
    /// Text parts in the response are ignored; the first non-empty inline payload is
    /// decoded if it arrived as base64 and written to `scene_<index + 1>.png`.
    ///
    /// # Returns
    ///
    /// The bare filename of the saved image.
    ///
    /// # Errors
    ///
    /// `EmptySentence` for a blank sentence, `ImageNotGenerated` when no part carries
    /// image data, plus provider, decode and storage errors.
    #[instrument(
        name = "generate_image",
        skip(self, sentence),
        fields(page = index + 1, model = %self.model)
    )]
    pub async fn generate(&self, sentence: &str, index: usize) -> StorybookResult<String> {
        let page = index + 1;
        if sentence.trim().is_empty() {
            return Err(StoryError::new(StoryErrorKind::EmptySentence { page }).into());
        }

        let preview: String = sentence.chars().take(PREVIEW_CHARS).collect();
        info!(page, sentence = %preview, "Generating image");

        let request = GenerateRequest::text(illustration_prompt(sentence), self.model.as_str())
            .with_modalities([Modality::Text, Modality::Image]);

        let response = self.driver.generate(&request).await?;

        let (mime, source) = response
            .first_image()
            .ok_or_else(|| StoryError::new(StoryErrorKind::ImageNotGenerated { page }))?;

        let data = source.to_bytes()?;
        if data.is_empty() {
            return Err(StoryError::new(StoryErrorKind::ImageNotGenerated { page }).into());
        }
        let filename = scene_filename(index);
        let asset = self.storage.write_image(&filename, &data).await?;

        info!(
            path = %asset.path.display(),
            size = asset.size_bytes,
            mime = mime.unwrap_or("unknown"),
            "Saved illustration"
        );

        Ok(filename)
    }
}
