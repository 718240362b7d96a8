//! Output parts returned by a generation backend.

use crate::MediaSource;
use serde::{Deserialize, Serialize};

/// One part of a model response, classified once at the API boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Output {
    /// Plain text output.
    Text(String),

    /// Inline image output.
    Image {
        /// MIME type of the image
        mime: Option<String>,
        /// Raw or base64 payload
        source: MediaSource,
    },
}

impl Output {
    /// Text content, if this is a text part.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Output::Text(text) => Some(text),
            Output::Image { .. } => None,
        }
    }

    /// Inline payload, if this is an image part.
    pub fn as_image(&self) -> Option<&MediaSource> {
        match self {
            Output::Image { source, .. } => Some(source),
            Output::Text(_) => None,
        }
    }
}
