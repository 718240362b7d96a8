//! Fixed prompts sent to the model.

/// Instruction for the story text call.
pub const STORY_PROMPT: &str = "\
Create a children's storybook about Isaac Newton discovering gravity from a falling apple.
The story must have EXACTLY 6 sentences.
Each sentence must have approximately 6 words (5-7 words maximum).
Use simple words that a 5-7 year old can read.
Make it engaging and fun for children.
Return the story as a JSON array of strings, one sentence per element.
Example format: [\"Sentence one here.\", \"Sentence two here.\", ...]
Return ONLY the JSON array, no other text.
";

const IMAGE_PROMPT_TEMPLATE: &str = "\
Create a colorful, child-friendly illustration for a children's book.
The scene depicts: {sentence}
Style: Bright, cheerful watercolor illustration suitable for children ages 5-7.
The image should be simple, clear, and engaging with warm colors.
Show Isaac Newton as a friendly young man with period-appropriate clothing.
No text in the image.
";

/// Default prompt for the response-shape probe.
pub const PROBE_PROMPT: &str =
    "Create a colorful, child-friendly illustration of a boy sitting under an apple tree.";

/// Illustration prompt for one sentence.
///
/// # Examples
///
/// ```
/// use storybook_generation::illustration_prompt;
///
/// let prompt = illustration_prompt("An apple fell down.");
/// assert!(prompt.contains("The scene depicts: An apple fell down.\n"));
/// ```
pub fn illustration_prompt(sentence: &str) -> String {
    IMAGE_PROMPT_TEMPLATE.replace("{sentence}", sentence)
}
