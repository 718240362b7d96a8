//! Request and response types for generation.

use crate::{MediaSource, Modality, Output};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A single-turn generation request.
///
/// # Examples
///
/// ```
/// use storybook_core::{GenerateRequest, Modality};
///
/// let request = GenerateRequest::builder()
///     .prompt("Draw an apple tree")
///     .model(Some("gemini-2.0-flash-exp".to_string()))
///     .response_modalities(vec![Modality::Text, Modality::Image])
///     .build()
///     .unwrap();
///
/// assert_eq!(request.prompt(), "Draw an apple tree");
/// assert_eq!(request.response_modalities().len(), 2);
/// ```
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, Default, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct GenerateRequest {
    /// The user prompt
    prompt: String,
    /// Model identifier to use (client default when `None`)
    #[builder(default)]
    model: Option<String>,
    /// Modalities the response may contain (provider default when empty)
    #[builder(default)]
    response_modalities: Vec<Modality>,
}

impl GenerateRequest {
    /// Creates a new request builder.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }

    /// Plain text request against a specific model.
    pub fn text(prompt: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: Some(model.into()),
            ..Default::default()
        }
    }

    /// Replace the requested response modalities.
    pub fn with_modalities(mut self, modalities: impl Into<Vec<Modality>>) -> Self {
        self.response_modalities = modalities.into();
        self
    }
}

/// The unified response object.
///
/// # Examples
///
/// ```
/// use storybook_core::{GenerateResponse, Output};
///
/// let response = GenerateResponse {
///     outputs: vec![Output::Text("[\"One.\"]".to_string())],
///     candidate_count: 1,
/// };
///
/// assert_eq!(response.text(), "[\"One.\"]");
/// assert!(response.first_image().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Parts of the first candidate, in order
    pub outputs: Vec<Output>,
    /// Number of candidates the provider returned
    pub candidate_count: usize,
}

impl GenerateResponse {
    /// Concatenation of every text part.
    pub fn text(&self) -> String {
        self.outputs.iter().filter_map(Output::as_text).collect()
    }

    /// First part carrying inline image data, with its MIME type.
    ///
    /// Parts with an empty payload are skipped.
    pub fn first_image(&self) -> Option<(Option<&str>, &MediaSource)> {
        self.outputs.iter().find_map(|output| match output {
            Output::Image { mime, source } if !source.is_empty() => {
                Some((mime.as_deref(), source))
            }
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_image_skips_text_parts() {
        let response = GenerateResponse {
            outputs: vec![
                Output::Text("Here is your picture".to_string()),
                Output::Image {
                    mime: Some("image/png".to_string()),
                    source: MediaSource::Binary(vec![1, 2, 3]),
                },
                Output::Image {
                    mime: Some("image/jpeg".to_string()),
                    source: MediaSource::Binary(vec![4, 5, 6]),
                },
            ],
            candidate_count: 1,
        };

        let (mime, source) = response.first_image().unwrap();
        assert_eq!(mime, Some("image/png"));
        assert_eq!(source, &MediaSource::Binary(vec![1, 2, 3]));
    }

    #[test]
    fn test_first_image_skips_empty_payloads() {
        let response = GenerateResponse {
            outputs: vec![
                Output::Image {
                    mime: Some("image/png".to_string()),
                    source: MediaSource::Base64(String::new()),
                },
                Output::Image {
                    mime: None,
                    source: MediaSource::Binary(Vec::new()),
                },
            ],
            candidate_count: 1,
        };
        assert!(response.first_image().is_none());

        let mut with_real = response.clone();
        with_real.outputs.push(Output::Image {
            mime: Some("image/png".to_string()),
            source: MediaSource::Base64("iVBORw==".to_string()),
        });
        let (_, source) = with_real.first_image().unwrap();
        assert_eq!(source, &MediaSource::Base64("iVBORw==".to_string()));
    }

    #[test]
    fn test_text_joins_parts_in_order() {
        let response = GenerateResponse {
            outputs: vec![
                Output::Text("[\"A.\",".to_string()),
                Output::Text(" \"B.\"]".to_string()),
            ],
            candidate_count: 1,
        };
        assert_eq!(response.text(), "[\"A.\", \"B.\"]");
    }
}
