//! The storybook manifest read by the web front end.

use crate::Page;
use serde::{Deserialize, Serialize};
use storybook_error::{JsonError, StorybookResult};

/// Title, description and ordered pages of one generated storybook.
///
/// Serialized as `storybook.json`:
///
/// ```json
/// {
///   "title": "Newton and the Apple",
///   "description": "Learn how Isaac Newton discovered gravity!",
///   "pages": [
///     { "page_number": 1, "sentence": "...", "words": ["..."], "image": "scene_1.png" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Storybook {
    /// Storybook title
    pub title: String,
    /// Short description shown by the front end
    pub description: String,
    /// Pages in reading order
    pub pages: Vec<Page>,
}

impl Storybook {
    /// Create a manifest from its parts.
    pub fn new(title: impl Into<String>, description: impl Into<String>, pages: Vec<Page>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            pages,
        }
    }

    /// Pages that ended up with an illustration.
    pub fn illustrated_pages(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter().filter(|page| page.image.is_some())
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json_pretty(&self) -> StorybookResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| JsonError::new(format!("Failed to serialize storybook: {}", e)).into())
    }

    /// Parse a manifest previously written by [`Storybook::to_json_pretty`].
    pub fn from_json(json: &str) -> StorybookResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| JsonError::new(format!("Failed to parse storybook: {}", e)).into())
    }
}
