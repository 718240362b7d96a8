//! Post-run verification of the manifest against the output directory.

use std::fmt;
use storybook_core::{Page, Storybook};
use storybook_error::StorybookResult;
use storybook_storage::{AssetStatus, FileSystemStorage};

const RULE_WIDTH: usize = 50;

/// One page of the verification report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageReport {
    /// The page as written to the manifest
    pub page: Page,
    /// On-disk status of the page image, `None` when the page has no image
    pub asset: Option<AssetStatus>,
}

/// Human-readable check that every referenced image exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationReport {
    /// Manifest title
    pub title: String,
    /// Per-page results in page order
    pub pages: Vec<PageReport>,
}

impl VerificationReport {
    /// Inspect every image referenced by `storybook` in `storage`.
    pub async fn build(
        storage: &FileSystemStorage,
        storybook: &Storybook,
    ) -> StorybookResult<Self> {
        let mut pages = Vec::with_capacity(storybook.pages.len());

        for page in &storybook.pages {
            let asset = match &page.image {
                Some(filename) => Some(storage.inspect(filename).await?),
                None => None,
            };
            pages.push(PageReport {
                page: page.clone(),
                asset,
            });
        }

        Ok(Self {
            title: storybook.title.clone(),
            pages,
        })
    }

    /// Number of images referenced by the manifest but missing or empty on disk.
    pub fn missing_images(&self) -> usize {
        self.pages
            .iter()
            .filter(|report| matches!(report.asset, Some(status) if !status.is_usable()))
            .count()
    }
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(f, "{rule}")?;
        writeln!(f, "STORYBOOK VERIFICATION")?;
        writeln!(f, "{rule}")?;
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Total pages: {}", self.pages.len())?;

        for PageReport { page, asset } in &self.pages {
            writeln!(f)?;
            writeln!(f, "Page {}:", page.page_number)?;
            writeln!(f, "  Sentence: {}", page.sentence)?;
            writeln!(f, "  Words: {:?}", page.words)?;
            writeln!(f, "  Image: {}", page.image.as_deref().unwrap_or("None"))?;
            if let Some(status) = asset {
                writeln!(f, "  Image exists: {}", status)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "{rule}")?;
        writeln!(f, "Storybook generation complete!")?;
        write!(f, "{rule}")
    }
}
