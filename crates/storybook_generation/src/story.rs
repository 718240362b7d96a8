//! Story text generation.

use crate::{STORY_PROMPT, parse_story};
use storybook_core::{GenerateRequest, Story};
use storybook_error::StorybookResult;
use storybook_interface::StorybookDriver;
use tracing::{info, instrument};

/// Requests the story once and parses it into sentences.
#[derive(Debug, Clone)]
pub struct StoryGenerator<D> {
    driver: D,
    model: String,
}

impl<D: StorybookDriver> StoryGenerator<D> {
    /// Create a generator that uses `model` for the story call.
    pub fn new(driver: D, model: impl Into<String>) -> Self {
        Self {
            driver,
            model: model.into(),
        }
    }

    /// Generate the story.
    ///
    /// Prints each sentence with its word count for human review. The word count is
    /// informational only.
    ///
    /// # Errors
    ///
    /// Propagates provider errors and `StoryParse` when the response is not a JSON
    /// array of strings.
    #[instrument(name = "generate_story", skip(self), fields(model = %self.model))]
    pub async fn generate(&self) -> StorybookResult<Story> {
        info!("Generating story text");

        let request = GenerateRequest::text(STORY_PROMPT, self.model.as_str());
        let response = self.driver.generate(&request).await?;
        let story = parse_story(&response.text())?;

        println!("Generated {} sentences:", story.len());
        for (i, sentence) in story.iter().enumerate() {
            let word_count = sentence.split_whitespace().count();
            println!("  {}. ({} words) {}", i + 1, word_count, sentence);
        }

        Ok(story)
    }
}
