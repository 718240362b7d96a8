//! Story and illustration generation errors.

/// Specific generation error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum StoryErrorKind {
    /// Story text was not a JSON array of strings after fence stripping
    #[display("Failed to parse story as a JSON array of sentences: {}", _0)]
    StoryParse(String),

    /// No part of the image response carried inline image data
    #[display("No image generated for sentence {}", page)]
    ImageNotGenerated {
        /// 1-based page number
        page: usize,
    },

    /// Sentence was blank, so no illustration prompt could be built
    #[display("Sentence {} is empty", page)]
    EmptySentence {
        /// 1-based page number
        page: usize,
    },

    /// Inline image payload could not be decoded
    #[display("Failed to decode image payload: {}", _0)]
    PayloadDecode(String),

    /// Story length outside the accepted range (strict mode only)
    #[display("Story has {} sentences, expected 5-6", count)]
    SentenceCount {
        /// Number of sentences returned
        count: usize,
    },
}

/// Generation error with location tracking.
///
/// # Examples
///
/// ```
/// use storybook_error::{StoryError, StoryErrorKind};
///
/// let err = StoryError::new(StoryErrorKind::ImageNotGenerated { page: 3 });
/// assert!(format!("{}", err).contains("sentence 3"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Story Error: {} at line {} in {}", kind, line, file)]
pub struct StoryError {
    kind: StoryErrorKind,
    line: u32,
    file: &'static str,
}

impl StoryError {
    /// Create a new story error with caller location tracking.
    #[track_caller]
    pub fn new(kind: StoryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StoryErrorKind {
        &self.kind
    }
}
