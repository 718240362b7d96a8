//! Google Gemini client built on `gemini-rust`.
//!
//! [`GeminiClient`] sends single-turn `generateContent` requests. The model is chosen per
//! request (falling back to the client default), so one client serves both the story
//! call and the illustration calls.
//!
//! No retries and no rate limiting happen here; callers space their requests.

use std::error::Error as _;

use async_trait::async_trait;
use gemini_rust::{ClientError, Gemini, Model};
use reqwest::Url;
use tracing::{debug, instrument};

use storybook_core::{GenerateRequest, GenerateResponse};
use storybook_error::{GeminiError, GeminiErrorKind, StorybookResult};
use storybook_interface::StorybookDriver;

use super::GeminiResult;
use super::conversion::{from_gemini_response, to_generation_config};

/// Public Gemini REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/";

/// Model used when a request does not name one.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Map a model name to the `gemini-rust` model enum.
///
/// Known names map to their variants; anything else becomes `Custom` with the
/// `models/` prefix added when missing.
pub fn to_model(name: &str) -> Model {
    match name {
        "gemini-2.5-flash" => Model::Gemini25Flash,
        "gemini-2.5-flash-lite" => Model::Gemini25FlashLite,
        "gemini-2.5-flash-image" => Model::Gemini25FlashImage,
        "gemini-2.5-pro" => Model::Gemini25Pro,
        other if other.starts_with("models/") => Model::Custom(other.to_string()),
        other => Model::Custom(format!("models/{}", other)),
    }
}

/// Parse a base URL, keeping exactly one trailing slash so model paths join under it.
fn parse_base_url(base_url: &str) -> GeminiResult<Url> {
    let normalized = format!("{}/", base_url.trim().trim_end_matches('/'));
    Url::parse(&normalized).map_err(|e| {
        GeminiError::new(GeminiErrorKind::ClientCreation(format!(
            "invalid base URL '{}': {}",
            base_url, e
        )))
    })
}

/// Flatten a client error and its sources into one message.
fn error_chain(err: &ClientError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

fn map_client_error(err: ClientError) -> GeminiError {
    match err {
        ClientError::BadResponse { code, description } => {
            GeminiError::new(GeminiErrorKind::HttpError {
                status_code: code,
                message: description.unwrap_or_default(),
            })
        }
        ClientError::Deserialize { source } => {
            GeminiError::new(GeminiErrorKind::ResponseParse(source.to_string()))
        }
        other => GeminiError::new(GeminiErrorKind::ApiRequest(error_chain(&other))),
    }
}

/// Client for the Google Gemini API.
#[derive(Clone)]
pub struct GeminiClient {
    api_key: String,
    base_url: Url,
    model_name: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url.as_str())
            .field("model_name", &self.model_name)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a new Gemini client with an explicit API key.
    ///
    /// # Errors
    ///
    /// Returns `MissingApiKey` if the key is blank.
    #[instrument(name = "gemini_client_new", skip_all)]
    pub fn new(api_key: impl Into<String>) -> StorybookResult<Self> {
        Self::new_internal(api_key.into()).map_err(Into::into)
    }

    fn new_internal(api_key: String) -> GeminiResult<Self> {
        if api_key.trim().is_empty() {
            return Err(GeminiError::new(GeminiErrorKind::MissingApiKey));
        }

        Ok(Self {
            api_key,
            base_url: parse_base_url(DEFAULT_BASE_URL)?,
            model_name: DEFAULT_MODEL.to_string(),
        })
    }

    /// Override the API base URL.
    ///
    /// # Errors
    ///
    /// Returns `ClientCreation` if the URL does not parse.
    pub fn with_base_url(mut self, base_url: &str) -> StorybookResult<Self> {
        self.base_url = parse_base_url(base_url)?;
        Ok(self)
    }

    /// Override the default model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model_name = model.into();
        self
    }

    /// Base URL requests are sent to, always ending in `/`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Internal generate method that returns Gemini-specific errors.
    async fn generate_internal(&self, req: &GenerateRequest) -> GeminiResult<GenerateResponse> {
        let model = to_model(req.model().as_deref().unwrap_or(&self.model_name));
        debug!(
            model = %model,
            modalities = ?req.response_modalities(),
            "Sending Gemini request"
        );

        let client = Gemini::with_model_and_base_url(&self.api_key, model, self.base_url.clone())
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(error_chain(&e))))?;

        let mut builder = client
            .generate_content()
            .with_user_message(req.prompt().clone());
        if let Some(config) = to_generation_config(req) {
            builder = builder.with_generation_config(config);
        }

        let response = builder.execute().await.map_err(map_client_error)?;

        if response.candidates.is_empty() {
            return Err(GeminiError::new(GeminiErrorKind::EmptyResponse));
        }

        let converted = from_gemini_response(response);
        debug!(
            candidates = converted.candidate_count,
            parts = converted.outputs.len(),
            "Received Gemini response"
        );
        Ok(converted)
    }
}

#[async_trait]
impl StorybookDriver for GeminiClient {
    #[instrument(
        name = "gemini_generate",
        skip(self, req),
        fields(model = req.model().as_deref().unwrap_or(self.model_name.as_str()))
    )]
    async fn generate(&self, req: &GenerateRequest) -> StorybookResult<GenerateResponse> {
        self.generate_internal(req).await.map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
