//! Inline media payloads.

use base64::Engine;
use serde::{Deserialize, Serialize};
use storybook_error::{StorybookResult, StoryError, StoryErrorKind};

/// How an inline media payload arrived from the provider.
///
/// Providers may hand back raw bytes or base64 text; only the textual form is decoded.
///
/// # Examples
///
/// ```
/// use storybook_core::MediaSource;
///
/// let raw = MediaSource::Binary(vec![0x89, 0x50, 0x4E, 0x47]);
/// assert_eq!(raw.to_bytes().unwrap(), vec![0x89, 0x50, 0x4E, 0x47]);
///
/// let text = MediaSource::Base64("iVBORw==".to_string());
/// assert_eq!(text.to_bytes().unwrap(), vec![0x89, 0x50, 0x4E, 0x47]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaSource {
    /// Base64-encoded content
    Base64(String),
    /// Raw binary data
    Binary(Vec<u8>),
}

impl MediaSource {
    /// True when the payload is base64 text rather than raw bytes.
    pub fn is_textual(&self) -> bool {
        matches!(self, MediaSource::Base64(_))
    }

    /// True when the payload carries no data (blank base64 text counts as empty).
    pub fn is_empty(&self) -> bool {
        match self {
            MediaSource::Base64(text) => text.trim().is_empty(),
            MediaSource::Binary(bytes) => bytes.is_empty(),
        }
    }

    /// Length of the payload as received (characters for base64, bytes for binary).
    pub fn encoded_len(&self) -> usize {
        match self {
            MediaSource::Base64(text) => text.len(),
            MediaSource::Binary(bytes) => bytes.len(),
        }
    }

    /// Produce the bytes to write to disk, decoding base64 text when necessary.
    pub fn to_bytes(&self) -> StorybookResult<Vec<u8>> {
        match self {
            MediaSource::Binary(bytes) => Ok(bytes.clone()),
            MediaSource::Base64(text) => base64::engine::general_purpose::STANDARD
                .decode(text.trim())
                .map_err(|e| StoryError::new(StoryErrorKind::PayloadDecode(e.to_string())).into()),
        }
    }
}
