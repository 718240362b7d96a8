//! Top-level error wrapper types.

use crate::{ConfigError, GeminiError, GeminiErrorKind, JsonError, StorageError, StoryError};

/// Every error condition the Storybook builder can surface.
///
/// # Examples
///
/// ```
/// use storybook_error::{StorybookError, StorybookErrorKind, JsonError};
///
/// let err: StorybookError = JsonError::new("Unexpected end of input").into();
/// assert!(matches!(err.kind(), StorybookErrorKind::Json(_)));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StorybookErrorKind {
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Output directory or file error
    #[from(StorageError)]
    Storage(StorageError),
    /// Gemini provider error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Story or illustration generation error
    #[from(StoryError)]
    Story(StoryError),
}

/// Storybook error with kind discrimination.
///
/// # Examples
///
/// ```
/// use storybook_error::{StorybookResult, ConfigError};
///
/// fn might_fail() -> StorybookResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Storybook Error: {}", _0)]
pub struct StorybookError(Box<StorybookErrorKind>);

impl StorybookError {
    /// Create a new error from a kind.
    pub fn new(kind: StorybookErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StorybookErrorKind {
        &self.0
    }

    /// True when the error is the missing API credential.
    ///
    /// The CLI uses this to print a usage hint instead of a bare error.
    pub fn is_missing_credential(&self) -> bool {
        matches!(
            self.kind(),
            StorybookErrorKind::Gemini(GeminiError {
                kind: GeminiErrorKind::MissingApiKey,
                ..
            })
        )
    }
}

// Generic From implementation for any type that converts to StorybookErrorKind
impl<T> From<T> for StorybookError
where
    T: Into<StorybookErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Storybook operations.
pub type StorybookResult<T> = std::result::Result<T, StorybookError>;
