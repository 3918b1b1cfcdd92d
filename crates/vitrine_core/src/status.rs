//! Post lifecycle status.

use serde::{Deserialize, Serialize};

/// Review status of a planned post.
///
/// Transitions are deliberately unrestricted: any status may be set from any
/// other, idempotently, with no terminal state. The approval workflow is
/// advisory, not enforced.
///
/// # Examples
///
/// ```
/// use vitrine_core::PostStatus;
///
/// assert_eq!(format!("{}", PostStatus::Pending), "pending");
/// assert_eq!(PostStatus::Approved.label_fr(), "Approuvé");
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
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PostStatus {
    /// Awaiting team review
    #[display("pending")]
    Pending,
    /// Approved for publication
    #[display("approved")]
    Approved,
    /// Published to the target network
    #[display("published")]
    Published,
}

impl PostStatus {
    /// French display label shown by the presentation shell.
    pub fn label_fr(&self) -> &'static str {
        match self {
            PostStatus::Pending => "En attente",
            PostStatus::Approved => "Approuvé",
            PostStatus::Published => "Publié",
        }
    }
}

impl std::str::FromStr for PostStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "PENDING" => Ok(PostStatus::Pending),
            "APPROVED" => Ok(PostStatus::Approved),
            "PUBLISHED" => Ok(PostStatus::Published),
            _ => Err(format!("Unknown post status: {}", s)),
        }
    }
}
