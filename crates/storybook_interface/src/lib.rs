//! Trait definitions for Storybook generation backends.
//!
//! The builder only talks to a provider through [`StorybookDriver`], which keeps the
//! pipeline testable with scripted drivers and independent of the Gemini wire format.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use async_trait::async_trait;
use storybook_core::{GenerateRequest, GenerateResponse};
use storybook_error::StorybookResult;

/// Core trait every generation backend implements.
#[async_trait]
pub trait StorybookDriver: Send + Sync {
    /// Generate model output for a single-turn request.
    async fn generate(&self, req: &GenerateRequest) -> StorybookResult<GenerateResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model used when the request does not name one.
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<T: StorybookDriver + ?Sized> StorybookDriver for &T {
    async fn generate(&self, req: &GenerateRequest) -> StorybookResult<GenerateResponse> {
        (**self).generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}
