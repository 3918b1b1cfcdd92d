//! The session-state object owned by the hosting process.
//!
//! All mutation of the shared post and intelligence collections funnels
//! through this type; after every successful mutation the affected slot is
//! snapshotted to the persistence adapter. The snapshot is a side effect that
//! runs after the in-memory mutation, never interleaved with it.

use crate::board::{group_by_day, DayBucket, PostBoard};
use std::sync::Arc;
use tracing::{debug, instrument};
use vitrine_core::{IntelligenceRecord, Post, PostStatus, SocialNetwork};
use vitrine_error::{StorageError, StorageErrorKind, VitrineResult};
use vitrine_storage::{SessionStore, Slot};

/// Days pre-selected for a fresh session.
pub const DEFAULT_SELECTED_DAYS: [&str; 3] = ["Lundi", "Mercredi", "Vendredi"];

/// The full week, in planning order.
pub const WEEK_DAYS: [&str; 7] = [
    "Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi", "Samedi", "Dimanche",
];

/// Headline numbers for the dashboard tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardSummary {
    /// Posts awaiting review
    pub pending_posts: usize,
    /// Institutions in the current competitive watch
    pub intelligence_count: usize,
    /// Days currently selected for publication
    pub selected_days: usize,
}

/// Session state: the post board, the intelligence listing, the day
/// selection, and the calendar filters.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use vitrine_planner::SessionState;
/// use vitrine_storage::MemoryStore;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut session = SessionState::load(Arc::new(MemoryStore::new())).await?;
/// assert!(session.needs_intelligence());
/// session.toggle_day("Mardi");
/// assert_eq!(session.summary().selected_days, 4);
/// # Ok(())
/// # }
/// ```
pub struct SessionState {
    board: PostBoard,
    intelligence: Vec<IntelligenceRecord>,
    selected_days: Vec<String>,
    network_filter: Option<SocialNetwork>,
    status_filter: Option<PostStatus>,
    store: Arc<dyn SessionStore>,
}

impl SessionState {
    /// Restore a session from the store's two slots.
    ///
    /// Missing slots restore as empty collections; the day selection and
    /// filters always start from their defaults (they are not persisted).
    #[instrument(skip(store))]
    pub async fn load(store: Arc<dyn SessionStore>) -> VitrineResult<Self> {
        let board = match store.read(Slot::Posts).await? {
            Some(document) => PostBoard::from_posts(deserialize_slot(Slot::Posts, &document)?),
            None => PostBoard::new(),
        };

        let intelligence = match store.read(Slot::Intelligence).await? {
            Some(document) => deserialize_slot(Slot::Intelligence, &document)?,
            None => Vec::new(),
        };

        debug!(
            posts = board.len(),
            intelligence = intelligence.len(),
            "Restored session from store"
        );

        Ok(Self {
            board,
            intelligence,
            selected_days: DEFAULT_SELECTED_DAYS.iter().map(|d| d.to_string()).collect(),
            network_filter: None,
            status_filter: None,
            store,
        })
    }

    /// The post board (read-only; mutate through the session methods).
    pub fn board(&self) -> &PostBoard {
        &self.board
    }

    /// The current intelligence listing.
    pub fn intelligence(&self) -> &[IntelligenceRecord] {
        &self.intelligence
    }

    /// Whether the intelligence slot restored empty; the shell auto-fetches
    /// when this holds at startup.
    pub fn needs_intelligence(&self) -> bool {
        self.intelligence.is_empty()
    }

    /// Days currently selected for publication.
    pub fn selected_days(&self) -> &[String] {
        &self.selected_days
    }

    /// Current network filter (`None` = all).
    pub fn network_filter(&self) -> Option<SocialNetwork> {
        self.network_filter
    }

    /// Current status filter (`None` = all).
    pub fn status_filter(&self) -> Option<PostStatus> {
        self.status_filter
    }

    /// Set the network filter axis.
    pub fn set_network_filter(&mut self, network: Option<SocialNetwork>) {
        self.network_filter = network;
    }

    /// Set the status filter axis.
    pub fn set_status_filter(&mut self, status: Option<PostStatus>) {
        self.status_filter = status;
    }

    /// Toggle a day in the publication selection.
    pub fn toggle_day(&mut self, day: &str) {
        if let Some(index) = self.selected_days.iter().position(|d| d == day) {
            self.selected_days.remove(index);
        } else {
            self.selected_days.push(day.to_string());
        }
    }

    /// Posts passing the current filters, in board order.
    pub fn filtered_posts(&self) -> Vec<Post> {
        self.board.filter(self.network_filter, self.status_filter)
    }

    /// The calendar view: filtered posts bucketed under each selected day.
    pub fn day_columns(&self) -> Vec<DayBucket> {
        group_by_day(&self.filtered_posts(), &self.selected_days)
    }

    /// Headline numbers for the dashboard tab.
    pub fn summary(&self) -> DashboardSummary {
        DashboardSummary {
            pending_posts: self.board.pending_count(),
            intelligence_count: self.intelligence.len(),
            selected_days: self.selected_days.len(),
        }
    }

    /// Prepend a generated batch and snapshot the posts slot.
    #[instrument(skip(self, posts), fields(count = posts.len()))]
    pub async fn add_posts(&mut self, posts: Vec<Post>) -> VitrineResult<()> {
        self.board.add_posts(posts);
        self.snapshot_posts().await
    }

    /// Replace a post by id and snapshot the posts slot.
    ///
    /// Returns `false` (without writing) when no post carries the id.
    #[instrument(skip(self, post), fields(id = %post.id))]
    pub async fn update_post(&mut self, post: Post) -> VitrineResult<bool> {
        if !self.board.update_post(post) {
            return Ok(false);
        }
        self.snapshot_posts().await?;
        Ok(true)
    }

    /// Set a post's status and snapshot the posts slot.
    ///
    /// Returns `false` (without writing) when no post carries the id.
    #[instrument(skip(self), fields(id = %id, status = %status))]
    pub async fn set_status(&mut self, id: &str, status: PostStatus) -> VitrineResult<bool> {
        if !self.board.set_status(id, status) {
            return Ok(false);
        }
        self.snapshot_posts().await?;
        Ok(true)
    }

    /// Empty the board and clear its slot, so a reload cannot resurrect the
    /// cleared posts. Irreversible; the shell confirms first.
    #[instrument(skip(self))]
    pub async fn clear_posts(&mut self) -> VitrineResult<()> {
        self.board.clear();
        self.store.clear(Slot::Posts).await
    }

    /// Wholesale-replace the intelligence listing and snapshot its slot.
    #[instrument(skip(self, records), fields(count = records.len()))]
    pub async fn replace_intelligence(
        &mut self,
        records: Vec<IntelligenceRecord>,
    ) -> VitrineResult<()> {
        self.intelligence = records;
        let document = serialize_slot(Slot::Intelligence, &self.intelligence)?;
        self.store.write(Slot::Intelligence, &document).await
    }

    async fn snapshot_posts(&self) -> VitrineResult<()> {
        let document = serialize_slot(Slot::Posts, &self.board.posts())?;
        self.store.write(Slot::Posts, &document).await
    }
}

fn serialize_slot<T: serde::Serialize>(slot: Slot, value: &T) -> VitrineResult<String> {
    serde_json::to_string(value).map_err(|e| {
        StorageError::new(StorageErrorKind::Serialize(format!("{}: {}", slot, e))).into()
    })
}

fn deserialize_slot<T: serde::de::DeserializeOwned>(
    slot: Slot,
    document: &str,
) -> VitrineResult<T> {
    serde_json::from_str(document).map_err(|e| {
        StorageError::new(StorageErrorKind::Deserialize(format!("{}: {}", slot, e))).into()
    })
}
