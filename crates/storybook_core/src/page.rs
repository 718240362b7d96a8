//! Storybook pages.

use serde::{Deserialize, Serialize};

/// Punctuation removed before splitting a sentence into words.
const STRIPPED_PUNCTUATION: [char; 4] = ['.', ',', '!', '?'];

/// One page of the storybook: a sentence, its words and an optional illustration.
///
/// # Examples
///
/// ```
/// use storybook_core::Page;
///
/// let page = Page::new(0, "Newton saw an apple fall.", Some("scene_1.png".to_string()));
///
/// assert_eq!(page.page_number, 1);
/// assert_eq!(page.words, vec!["Newton", "saw", "an", "apple", "fall"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// 1-based page number
    pub page_number: usize,
    /// Sentence text as returned by the model
    pub sentence: String,
    /// Sentence split into words with punctuation removed
    pub words: Vec<String>,
    /// Image filename relative to the output directory, `None` if generation failed
    pub image: Option<String>,
}

impl Page {
    /// Build the page for the sentence at 0-based `index`.
    pub fn new(index: usize, sentence: impl Into<String>, image: Option<String>) -> Self {
        let sentence = sentence.into();
        Self {
            page_number: index + 1,
            words: extract_words(&sentence),
            sentence,
            image,
        }
    }
}

/// Split a sentence into words for the reading activities.
///
/// Strips `.`, `,`, `!` and `?` and splits on whitespace. Other punctuation such as
/// apostrophes is kept.
///
/// # Examples
///
/// ```
/// use storybook_core::extract_words;
///
/// assert_eq!(extract_words("Wow, look up!"), vec!["Wow", "look", "up"]);
/// ```
pub fn extract_words(sentence: &str) -> Vec<String> {
    sentence
        .replace(STRIPPED_PUNCTUATION, "")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Image filename for the page at 0-based `index`.
///
/// # Examples
///
/// ```
/// use storybook_core::scene_filename;
///
/// assert_eq!(scene_filename(0), "scene_1.png");
/// ```
pub fn scene_filename(index: usize) -> String {
    format!("scene_{}.png", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_period_removed() {
        let words = extract_words("Newton saw an apple fall.");
        assert_eq!(words, vec!["Newton", "saw", "an", "apple", "fall"]);
        assert_eq!(words.len(), 5);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let once = extract_words("Why, did it fall? Yes!");
        let twice = extract_words(&once.join(" "));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_apostrophes_and_extra_whitespace() {
        assert_eq!(
            extract_words("  Isaac's   apple   dropped.  "),
            vec!["Isaac's", "apple", "dropped"]
        );
    }

    #[test]
    fn test_punctuation_only_sentence_has_no_words() {
        assert!(extract_words("?!.,").is_empty());
    }

    #[test]
    fn test_page_without_image() {
        let page = Page::new(2, "It went down.", None);
        assert_eq!(page.page_number, 3);
        assert_eq!(page.image, None);
    }
}
