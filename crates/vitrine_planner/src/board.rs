//! The post board: collection ownership, status transitions, and the
//! filtered/grouped views behind the calendar.

use tracing::warn;
use vitrine_core::{Post, PostStatus, SocialNetwork};

/// Ordered collection of planned posts.
///
/// Posts are held newest-campaign-first: [`PostBoard::add_posts`] prepends.
/// Updates apply by id-match replacement, never by index, so reordering the
/// collection never corrupts an update.
///
/// None of the board operations can fail: they are in-memory mutations and
/// pure views. Persistence is the session's concern.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostBoard {
    posts: Vec<Post>,
}

impl PostBoard {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board from an existing collection (e.g., a restored slot).
    pub fn from_posts(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    /// The full collection, in order.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Number of posts on the board.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Whether the board is empty.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Prepend a batch of posts (most recent campaign first).
    ///
    /// Relative order within the batch is preserved. No deduplication:
    /// id uniqueness is the id-generation scheme's responsibility.
    pub fn add_posts(&mut self, new_posts: Vec<Post>) {
        let mut merged = new_posts;
        merged.append(&mut self.posts);
        self.posts = merged;
    }

    /// Replace the post whose id matches, in place.
    ///
    /// Returns `true` when a post was replaced. An unknown id leaves the
    /// collection untouched and logs a warning.
    pub fn update_post(&mut self, updated: Post) -> bool {
        match self.posts.iter_mut().find(|p| p.id == updated.id) {
            Some(slot) => {
                *slot = updated;
                true
            }
            None => {
                warn!(id = %updated.id, "Dropping update for unknown post id");
                false
            }
        }
    }

    /// Set the status of the post whose id matches.
    ///
    /// Transitions are unrestricted: any status from any status, idempotent.
    /// Returns `true` when a post was found.
    pub fn set_status(&mut self, id: &str, status: PostStatus) -> bool {
        match self.posts.iter_mut().find(|p| p.id == id) {
            Some(post) => {
                post.set_status(status);
                true
            }
            None => {
                warn!(id = %id, "Dropping status change for unknown post id");
                false
            }
        }
    }

    /// Empty the board. Irreversible; confirmation is the shell's job.
    pub fn clear(&mut self) {
        self.posts.clear();
    }

    /// The ordered subsequence matching both predicates.
    ///
    /// `None` on either axis matches unconditionally. Pure: the board is not
    /// mutated and source order is preserved.
    pub fn filter(
        &self,
        network: Option<SocialNetwork>,
        status: Option<PostStatus>,
    ) -> Vec<Post> {
        self.posts
            .iter()
            .filter(|post| {
                let matches_network = network.is_none_or(|n| post.network == n);
                let matches_status = status.is_none_or(|s| post.status == s);
                matches_network && matches_status
            })
            .cloned()
            .collect()
    }

    /// Count of posts awaiting review.
    pub fn pending_count(&self) -> usize {
        self.posts
            .iter()
            .filter(|p| p.status == PostStatus::Pending)
            .count()
    }
}

/// One calendar column: a requested day label and the posts bucketed under it.
#[derive(Debug, Clone, PartialEq)]
pub struct DayBucket {
    /// The requested day label
    pub day: String,
    /// Posts whose `day` field matched the label
    pub posts: Vec<Post>,
}

/// Whether a post's free-text `day` field belongs under a day label.
///
/// Two-step match: exact equality first, then case-insensitive containment of
/// the label's lowercase 3-letter prefix. The looseness tolerates
/// abbreviation and casing drift in the gateway's `day` field; it also means
/// a post may match more than one label. That is intentional.
///
/// # Examples
///
/// ```
/// use vitrine_planner::matches_day;
///
/// assert!(matches_day("Lundi", "Lundi"));
/// assert!(matches_day("lundi soir", "Lundi"));
/// assert!(!matches_day("Mardi", "Lundi"));
/// ```
pub fn matches_day(post_day: &str, label: &str) -> bool {
    if post_day == label {
        return true;
    }
    let prefix: String = label.to_lowercase().chars().take(3).collect();
    if prefix.is_empty() {
        return false;
    }
    post_day.to_lowercase().contains(&prefix)
}

/// Bucket posts under each requested day label, in label order.
///
/// A post may appear under zero, one, or several buckets (see
/// [`matches_day`]).
pub fn group_by_day(posts: &[Post], days: &[String]) -> Vec<DayBucket> {
    days.iter()
        .map(|day| DayBucket {
            day: day.clone(),
            posts: posts
                .iter()
                .filter(|post| matches_day(&post.day, day))
                .cloned()
                .collect(),
        })
        .collect()
}
