//! Parsing the story out of the model's text response.
//!
//! Models often wrap JSON in a markdown code fence. Only that one shape is unwrapped:
//! a response starting with three backticks loses its first line and everything from
//! the last closing fence on. Anything else is parsed as-is and fails loudly if it is
//! not a JSON array of strings.

use storybook_core::Story;
use storybook_error::{StoryError, StoryErrorKind, StorybookResult};

const FENCE: &str = "```";

/// Longest slice of the response echoed back in a parse error.
const ERROR_EXCERPT_CHARS: usize = 200;

/// Remove a surrounding markdown code fence, if present.
///
/// # Examples
///
/// ```
/// use storybook_generation::strip_code_fence;
///
/// assert_eq!(strip_code_fence("```json\n[\"A.\"]\n```").trim(), "[\"A.\"]");
/// assert_eq!(strip_code_fence("  [\"A.\"]  "), "[\"A.\"]");
/// ```
pub fn strip_code_fence(text: &str) -> &str {
    let text = text.trim();
    if !text.starts_with(FENCE) {
        return text;
    }

    // Drop the opening fence line (with its optional language tag)
    let body = text.split_once('\n').map(|(_, rest)| rest).unwrap_or("");

    match body.rfind(FENCE) {
        Some(end) => &body[..end],
        None => body,
    }
}

/// Parse the story response into sentences.
///
/// # Errors
///
/// Returns `StoryParse` if the unwrapped text is not a JSON array of strings.
pub fn parse_story(text: &str) -> StorybookResult<Story> {
    let unwrapped = strip_code_fence(text);

    serde_json::from_str::<Vec<String>>(unwrapped)
        .map(Story::from)
        .map_err(|e| {
            let excerpt: String = unwrapped.chars().take(ERROR_EXCERPT_CHARS).collect();
            tracing::error!(response_length = text.len(), "Story response is not a JSON array");
            StoryError::new(StoryErrorKind::StoryParse(format!("{} (response: {:?})", e, excerpt)))
                .into()
        })
}
