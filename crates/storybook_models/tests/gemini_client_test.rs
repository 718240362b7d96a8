//! Tests for GeminiClient construction and request routing.
//!
//! These never reach the real API: failures are provoked against an unroutable
//! base URL.

use storybook_core::GenerateRequest;
use storybook_error::{GeminiErrorKind, StorybookErrorKind};
use storybook_interface::StorybookDriver;
use gemini_rust::Model;
use storybook_models::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiClient, to_model};

#[test]
fn test_blank_key_is_missing_credential() {
    let err = GeminiClient::new("   ").unwrap_err();
    assert!(err.is_missing_credential());
}

#[test]
fn test_defaults() {
    let client = GeminiClient::new("key").unwrap();
    assert_eq!(client.provider_name(), "gemini");
    assert_eq!(client.model_name(), DEFAULT_MODEL);
    assert_eq!(client.base_url().as_str(), DEFAULT_BASE_URL);
}

#[test]
fn test_base_url_override_is_normalized() {
    let client = GeminiClient::new("key")
        .unwrap()
        .with_base_url("http://localhost:9999/v1beta")
        .unwrap();
    assert_eq!(client.base_url().as_str(), "http://localhost:9999/v1beta/");
}

#[test]
fn test_invalid_base_url_is_rejected() {
    let err = GeminiClient::new("key")
        .unwrap()
        .with_base_url("not a url")
        .unwrap_err();

    match err.kind() {
        StorybookErrorKind::Gemini(e) => {
            assert!(matches!(e.kind, GeminiErrorKind::ClientCreation(_)));
        }
        other => panic!("unexpected error kind: {other}"),
    }
}

#[test]
fn test_model_names_gain_prefix() {
    assert_eq!(to_model("gemini-2.5-flash"), Model::Gemini25Flash);
    assert_eq!(
        to_model("gemini-2.0-flash-exp"),
        Model::Custom("models/gemini-2.0-flash-exp".to_string())
    );
    assert_eq!(
        to_model("models/gemini-2.0-flash-exp"),
        Model::Custom("models/gemini-2.0-flash-exp".to_string())
    );
}

#[test]
fn test_debug_hides_api_key() {
    let client = GeminiClient::new("super-secret").unwrap();
    assert!(!format!("{:?}", client).contains("super-secret"));
}

#[tokio::test]
async fn test_unreachable_host_is_request_error() {
    let client = GeminiClient::new("key")
        .unwrap()
        .with_base_url("http://127.0.0.1:9")
        .unwrap();

    let request = GenerateRequest::text("Hello", "gemini-2.5-flash");
    let err = client.generate(&request).await.unwrap_err();

    match err.kind() {
        StorybookErrorKind::Gemini(e) => {
            assert!(matches!(e.kind, GeminiErrorKind::ApiRequest(_)));
        }
        other => panic!("unexpected error kind: {other}"),
    }
}
