//! Conversions between `storybook_core` types and `gemini-rust` types.

use gemini_rust::{GenerationConfig, GenerationResponse, Part};
use storybook_core::{GenerateRequest, GenerateResponse, MediaSource, Output};
use tracing::debug;

/// Generation config for a request, or `None` when the provider defaults apply.
pub fn to_generation_config(req: &GenerateRequest) -> Option<GenerationConfig> {
    if req.response_modalities().is_empty() {
        return None;
    }

    Some(GenerationConfig {
        response_modalities: Some(
            req.response_modalities()
                .iter()
                .map(ToString::to_string)
                .collect(),
        ),
        ..Default::default()
    })
}

/// Flatten the first candidate's parts into outputs.
///
/// Text and inline-data parts are kept in order. Thought summaries and other part
/// kinds are dropped. Inline data is always base64 text, so it is passed on undecoded.
pub fn from_gemini_response(resp: GenerationResponse) -> GenerateResponse {
    let candidate_count = resp.candidates.len();

    let outputs = resp
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|part| match part {
            Part::Text {
                thought: Some(true),
                ..
            } => None,
            Part::Text { text, .. } => Some(Output::Text(text)),
            Part::InlineData { inline_data, .. } => Some(Output::Image {
                mime: Some(inline_data.mime_type),
                source: MediaSource::Base64(inline_data.data),
            }),
            other => {
                debug!(part = ?other, "Ignoring unsupported response part");
                None
            }
        })
        .collect();

    GenerateResponse {
        outputs,
        candidate_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storybook_core::Modality;

    #[test]
    fn test_text_request_has_no_generation_config() {
        let req = GenerateRequest::text("Tell a story", "gemini-2.5-flash");
        assert!(to_generation_config(&req).is_none());
    }

    #[test]
    fn test_image_request_sets_modalities() {
        let req = GenerateRequest::builder()
            .prompt("Draw an apple")
            .response_modalities(vec![Modality::Text, Modality::Image])
            .build()
            .unwrap();
        let config = to_generation_config(&req).unwrap();
        let wire = serde_json::to_value(&config).unwrap();

        assert_eq!(
            wire["responseModalities"],
            serde_json::json!(["TEXT", "IMAGE"])
        );
    }

    #[test]
    fn test_response_parts_become_tagged_outputs() {
        let body = r#"{
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [
                        {"text": "Thinking it over", "thought": true},
                        {"text": "Here is the scene."},
                        {"inlineData": {"mimeType": "image/png", "data": "iVBORw=="}},
                        {"functionCall": {"name": "noop", "args": {}}}
                    ]
                },
                "finishReason": "STOP"
            }]
        }"#;
        let resp: GenerationResponse = serde_json::from_str(body).unwrap();
        let converted = from_gemini_response(resp);

        assert_eq!(converted.candidate_count, 1);
        assert_eq!(converted.outputs.len(), 2);
        assert_eq!(
            converted.outputs[0],
            Output::Text("Here is the scene.".to_string())
        );
        assert_eq!(
            converted.outputs[1],
            Output::Image {
                mime: Some("image/png".to_string()),
                source: MediaSource::Base64("iVBORw==".to_string()),
            }
        );
    }

    #[test]
    fn test_blocked_candidate_has_no_outputs() {
        let body = r#"{"candidates": [{"finishReason": "SAFETY"}]}"#;
        let resp: GenerationResponse = serde_json::from_str(body).unwrap();
        let converted = from_gemini_response(resp);

        assert_eq!(converted.candidate_count, 1);
        assert!(converted.outputs.is_empty());
    }
}
