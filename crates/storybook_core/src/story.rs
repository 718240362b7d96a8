//! Ordered story sentences.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Sentence counts the story prompt asks for.
///
/// Anything outside this range only triggers a warning unless strict mode is enabled.
pub const EXPECTED_SENTENCES: RangeInclusive<usize> = 5..=6;

/// A story as the ordered list of sentences returned by the model.
///
/// # Examples
///
/// ```
/// use storybook_core::Story;
///
/// let story = Story::from(vec![
///     "Newton sat under a tree.".to_string(),
///     "An apple fell on his head.".to_string(),
/// ]);
///
/// assert_eq!(story.len(), 2);
/// assert!(!story.has_expected_length());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, derive_more::From)]
#[serde(transparent)]
pub struct Story(Vec<String>);

impl Story {
    /// Sentences in story order.
    pub fn sentences(&self) -> &[String] {
        &self.0
    }

    /// Number of sentences.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the model returned no sentences.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when the sentence count falls within [`EXPECTED_SENTENCES`].
    pub fn has_expected_length(&self) -> bool {
        EXPECTED_SENTENCES.contains(&self.0.len())
    }

    /// Iterate sentences in order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Story {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
