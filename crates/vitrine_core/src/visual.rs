//! Suggested visual kind for a post.

use serde::{Deserialize, Serialize};

/// Kind of accompanying media suggested (or generated) for a post.
///
/// This is a closed three-way union: every dispatch over it matches
/// exhaustively, so adding a variant surfaces every site that needs a handler.
///
/// Wire values are `"IMAGE"`, `"VIDEO"`, `"SPEECH"`.
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
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VisualType {
    /// Still image
    #[display("image")]
    Image,
    /// Short video clip (long-running generation job)
    #[display("video")]
    Video,
    /// Spoken audio rendition of the post body
    #[display("speech")]
    Speech,
}

impl std::str::FromStr for VisualType {
    type Err = String;

    /// Case-insensitive parse; the gateway's `suggestedVisual` field is free
    /// text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "IMAGE" => Ok(VisualType::Image),
            "VIDEO" => Ok(VisualType::Video),
            "SPEECH" => Ok(VisualType::Speech),
            _ => Err(format!("Unknown visual type: {}", s)),
        }
    }
}
