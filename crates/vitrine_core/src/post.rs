//! Planned social-media publications.

use crate::{MediaRef, PostStatus, SocialNetwork, VisualType};
use serde::{Deserialize, Serialize};

/// A draft record as returned by the generation gateway.
///
/// Drafts are never persisted; the orchestrator converts each one into a
/// [`Post`] by assigning an identifier and the initial status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    /// Weekday label the gateway placed the draft on (free text)
    pub day: String,
    /// Target network
    pub network: SocialNetwork,
    /// Post body
    pub content: String,
    /// Suggested media kind
    pub suggested_visual: VisualType,
}

/// One planned social-media publication.
///
/// Field names serialize in camelCase to match the persisted document shape.
///
/// # Examples
///
/// ```
/// use vitrine_core::{Post, PostDraft, PostStatus, SocialNetwork, VisualType};
///
/// let draft = PostDraft {
///     day: "Lundi".to_string(),
///     network: SocialNetwork::LinkedIn,
///     content: "Financement des récoltes".to_string(),
///     suggested_visual: VisualType::Image,
/// };
/// let post = Post::from_draft(draft, "1714000000000-0".to_string());
/// assert_eq!(post.status, PostStatus::Pending);
/// assert!(post.visual.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Opaque unique identifier, assigned at creation, immutable
    pub id: String,
    /// Weekday label used for calendar grouping (not a date, not validated)
    pub day: String,
    /// Target network
    pub network: SocialNetwork,
    /// Post body
    pub content: String,
    /// Intended (or last generated) media kind
    pub suggested_visual: VisualType,
    /// Review status
    pub status: PostStatus,
    /// Generated media, absent until a generation call succeeds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual: Option<MediaRef>,
}

impl Post {
    /// Promote a gateway draft into a post with the given identifier.
    ///
    /// New posts always start in [`PostStatus::Pending`].
    pub fn from_draft(draft: PostDraft, id: String) -> Self {
        Self {
            id,
            day: draft.day,
            network: draft.network,
            content: draft.content,
            suggested_visual: draft.suggested_visual,
            status: PostStatus::Pending,
            visual: None,
        }
    }

    /// Set the review status. Pure and permissive: any status from any
    /// status, idempotent when unchanged.
    pub fn set_status(&mut self, status: PostStatus) {
        self.status = status;
    }

    /// Attach generated media, overwriting any prior visual and updating the
    /// suggested kind to what was actually produced (last write wins).
    pub fn with_visual(mut self, media: MediaRef, visual: VisualType) -> Self {
        self.visual = Some(media);
        self.suggested_visual = visual;
        self
    }
}
