//! Response modalities a generation request may ask for.

use serde::{Deserialize, Serialize};

/// Kind of content the model is allowed to return.
///
/// Serialized in the upper-case form the Gemini API expects.
///
/// # Examples
///
/// ```
/// use storybook_core::Modality;
///
/// assert_eq!(Modality::Image.to_string(), "IMAGE");
/// assert_eq!("TEXT".parse::<Modality>().unwrap(), Modality::Text);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Modality {
    /// Plain text
    Text,
    /// Generated image
    Image,
}
