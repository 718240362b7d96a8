//! Scripted driver for pipeline tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use storybook_core::{GenerateRequest, GenerateResponse, MediaSource, Output};
use storybook_error::{GeminiError, GeminiErrorKind, StorybookResult};
use storybook_interface::StorybookDriver;

/// PNG signature, enough for the storage layer to treat the file as usable.
pub const PNG_BYTES: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// A single scripted response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Text-only response
    Text(String),
    /// Text caption followed by an inline image
    Image(MediaSource),
    /// Response with no parts at all
    Empty,
    /// Provider failure
    Error(GeminiErrorKind),
}

impl MockResponse {
    /// Story response carrying the given sentences as a JSON array.
    pub fn story(sentences: &[&str]) -> Self {
        MockResponse::Text(serde_json::to_string(sentences).unwrap())
    }

    /// Image delivered as raw bytes.
    pub fn raw_image() -> Self {
        MockResponse::Image(MediaSource::Binary(PNG_BYTES.to_vec()))
    }

    /// Image delivered as base64 text ("iVBORw0KGgo=" decodes to the PNG signature).
    pub fn base64_image() -> Self {
        MockResponse::Image(MediaSource::Base64("iVBORw0KGgo=".to_string()))
    }
}

/// Driver that replays a queue of responses and records every request.
#[derive(Clone)]
pub struct MockDriver {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    requests: Arc<Mutex<Vec<GenerateRequest>>>,
    model_name: String,
}

impl MockDriver {
    /// Create a driver that answers in order with `responses`.
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses.into())),
            requests: Arc::new(Mutex::new(Vec::new())),
            model_name: "mock-gemini".to_string(),
        }
    }

    /// Number of times generate() was called.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Every request received so far, in order.
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl StorybookDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> StorybookResult<GenerateResponse> {
        self.requests.lock().unwrap().push(req.clone());

        let next = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(MockResponse::Error(GeminiErrorKind::EmptyResponse));

        match next {
            MockResponse::Text(text) => Ok(GenerateResponse {
                outputs: vec![Output::Text(text)],
                candidate_count: 1,
            }),
            MockResponse::Image(source) => Ok(GenerateResponse {
                outputs: vec![
                    Output::Text("Here is your illustration.".to_string()),
                    Output::Image {
                        mime: Some("image/png".to_string()),
                        source,
                    },
                ],
                candidate_count: 1,
            }),
            MockResponse::Empty => Ok(GenerateResponse {
                outputs: vec![],
                candidate_count: 1,
            }),
            MockResponse::Error(kind) => Err(GeminiError::new(kind).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
