//! End-to-end storybook assembly.

use crate::{ImageGenerator, StoryGenerator, VerificationReport};
use derive_getters::Getters;
use std::time::Duration;
use storybook_core::{EXPECTED_SENTENCES, Page, Storybook};
use storybook_error::{StoryError, StoryErrorKind, StorybookResult};
use storybook_interface::StorybookDriver;
use storybook_storage::FileSystemStorage;
use tracing::{info, instrument, warn};

/// Manifest title.
pub const DEFAULT_TITLE: &str = "Newton and the Apple";
/// Manifest description.
pub const DEFAULT_DESCRIPTION: &str = "Learn how Isaac Newton discovered gravity!";
/// Model for the story text call.
pub const DEFAULT_STORY_MODEL: &str = "gemini-2.5-flash";
/// Model for illustration calls.
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.0-flash-exp";
/// Pause after each page.
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_secs(2);
/// Manifest filename inside the output directory.
pub const MANIFEST_FILE: &str = "storybook.json";

/// Fixed parameters of one assembly run.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use storybook_generation::AssemblerSettings;
///
/// let settings = AssemblerSettings::builder()
///     .page_delay(Duration::ZERO)
///     .build()
///     .unwrap();
///
/// assert_eq!(settings.title(), "Newton and the Apple");
/// assert_eq!(settings.page_delay(), &Duration::ZERO);
/// assert!(!*settings.strict_sentence_count());
/// ```
#[derive(Debug, Clone, PartialEq, Getters, derive_builder::Builder)]
#[builder(default, setter(into))]
pub struct AssemblerSettings {
    /// Manifest title
    title: String,
    /// Manifest description
    description: String,
    /// Model for the story call
    story_model: String,
    /// Model for illustration calls
    image_model: String,
    /// Pause after each page, regardless of how long the page took
    page_delay: Duration,
    /// Fail instead of warning when the story is not 5-6 sentences
    strict_sentence_count: bool,
    /// Manifest filename inside the output directory
    manifest_file: String,
}

impl AssemblerSettings {
    /// Creates a new settings builder.
    pub fn builder() -> AssemblerSettingsBuilder {
        AssemblerSettingsBuilder::default()
    }
}

impl Default for AssemblerSettings {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            story_model: DEFAULT_STORY_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            page_delay: DEFAULT_PAGE_DELAY,
            strict_sentence_count: false,
            manifest_file: MANIFEST_FILE.to_string(),
        }
    }
}

/// Drives story generation, per-page illustration and manifest output.
///
/// Pages are processed one at a time in story order. An illustration failure is logged
/// and recorded as a page without an image; it never stops the run. A story parse
/// failure or a manifest write failure is fatal.
///
/// # Example
///
/// ```no_run
/// use storybook_generation::{AssemblerSettings, StorybookAssembler};
/// use storybook_models::GeminiClient;
/// use storybook_storage::FileSystemStorage;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GeminiClient::new("my-api-key")?;
/// let storage = FileSystemStorage::new("nextjs-app/public/storybook")?;
/// let assembler = StorybookAssembler::new(client, storage, AssemblerSettings::default());
///
/// let storybook = assembler.run().await?;
/// println!("{} pages", storybook.pages.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct StorybookAssembler<D> {
    driver: D,
    storage: FileSystemStorage,
    settings: AssemblerSettings,
}

impl<D: StorybookDriver> StorybookAssembler<D> {
    /// Create an assembler over an already opened output directory.
    pub fn new(driver: D, storage: FileSystemStorage, settings: AssemblerSettings) -> Self {
        Self {
            driver,
            storage,
            settings,
        }
    }

    /// The output directory.
    pub fn storage(&self) -> &FileSystemStorage {
        &self.storage
    }

    /// Settings for this run.
    pub fn settings(&self) -> &AssemblerSettings {
        &self.settings
    }

    /// Generate everything, write the manifest and print the verification report.
    ///
    /// Returns the manifest that was written.
    #[instrument(
        name = "storybook_run",
        skip(self),
        fields(output = %self.storage.base_path().display())
    )]
    pub async fn run(&self) -> StorybookResult<Storybook> {
        let storybook = self.assemble().await?;
        self.verify(&storybook).await?;
        Ok(storybook)
    }

    /// Print the verification report for `storybook` and warn about missing images.
    pub async fn verify(&self, storybook: &Storybook) -> StorybookResult<VerificationReport> {
        let report = VerificationReport::build(&self.storage, storybook).await?;
        println!("{}", report);

        let missing = report.missing_images();
        if missing > 0 {
            warn!(missing, "Manifest references images that are missing or empty");
        }

        Ok(report)
    }

    /// Generate the story and illustrations, then write the manifest.
    pub async fn assemble(&self) -> StorybookResult<Storybook> {
        let story = StoryGenerator::new(&self.driver, self.settings.story_model())
            .generate()
            .await?;

        if !story.has_expected_length() {
            if *self.settings.strict_sentence_count() {
                let count = story.len();
                return Err(StoryError::new(StoryErrorKind::SentenceCount { count }).into());
            }
            warn!(
                count = story.len(),
                expected_min = EXPECTED_SENTENCES.start(),
                expected_max = EXPECTED_SENTENCES.end(),
                "Story has an unexpected number of sentences, continuing"
            );
        }

        let images = ImageGenerator::new(
            &self.driver,
            self.storage.clone(),
            self.settings.image_model(),
        );

        let total = story.len();
        let mut pages = Vec::with_capacity(total);

        for (index, sentence) in story.iter().enumerate() {
            info!(page = index + 1, total, "Processing page");

            let image = match images.generate(sentence, index).await {
                Ok(filename) => Some(filename),
                Err(e) => {
                    warn!(page = index + 1, error = %e, "Could not generate image");
                    None
                }
            };

            pages.push(Page::new(index, sentence.as_str(), image));

            tokio::time::sleep(*self.settings.page_delay()).await;
        }

        let storybook = Storybook::new(
            self.settings.title().as_str(),
            self.settings.description().as_str(),
            pages,
        );

        let manifest = self
            .storage
            .write_manifest(self.settings.manifest_file(), &storybook)
            .await?;
        info!(path = %manifest.path.display(), "Storybook data saved");

        Ok(storybook)
    }
}
