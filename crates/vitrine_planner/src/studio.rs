//! The generation orchestrator.
//!
//! Two independent async surfaces: bulk brief-to-calendar drafting, and
//! per-post visual generation with per-post in-flight tracking. Neither owns
//! retries; a failure is reported once and the user may re-invoke.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use tracing::{info, instrument, warn};
use vitrine_core::{IntelligenceRecord, Post, SocialNetwork, VisualType};
use vitrine_error::{ConfigError, PlannerError, PlannerErrorKind, VitrineResult};
use vitrine_interface::{CampaignRequest, VisualGateway};

/// Tracks which posts have a visual generation outstanding.
///
/// Keyed by post id: a slow request for one post never blocks or gets
/// confused with another post's. Entries are released when the guard drops,
/// on success and failure alike.
#[derive(Debug, Default)]
pub struct GenerationTracker {
    in_flight: Mutex<HashSet<String>>,
}

impl GenerationTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a generation is outstanding for the post.
    pub fn is_generating(&self, id: &str) -> bool {
        self.in_flight.lock().unwrap().contains(id)
    }

    /// Mark a post in flight, failing if it already is.
    fn begin(&self, id: &str) -> VitrineResult<InFlightGuard<'_>> {
        let mut in_flight = self.in_flight.lock().unwrap();
        if !in_flight.insert(id.to_string()) {
            return Err(PlannerError::new(PlannerErrorKind::VisualInFlight(id.to_string())).into());
        }
        Ok(InFlightGuard {
            tracker: self,
            id: id.to_string(),
        })
    }

    fn finish(&self, id: &str) {
        self.in_flight.lock().unwrap().remove(id);
    }
}

/// Releases the in-flight entry when dropped.
struct InFlightGuard<'a> {
    tracker: &'a GenerationTracker,
    id: String,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.tracker.finish(&self.id);
    }
}

/// Orchestrates generation requests against a gateway.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use vitrine_core::SocialNetwork;
/// use vitrine_models::GeminiGateway;
/// use vitrine_planner::CampaignStudio;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let studio = CampaignStudio::new(Arc::new(GeminiGateway::new()?));
/// let posts = studio
///     .generate_campaign(
///         &[SocialNetwork::LinkedIn, SocialNetwork::Facebook],
///         &["Lundi".to_string(), "Mardi".to_string()],
///         &[],
///         Some("Campagne de récolte".to_string()),
///     )
///     .await?;
/// assert!(posts.iter().all(|p| p.visual.is_none()));
/// # Ok(())
/// # }
/// ```
pub struct CampaignStudio<G> {
    gateway: Arc<G>,
    tracker: GenerationTracker,
}

impl<G: VisualGateway> CampaignStudio<G> {
    /// Create a studio over the given gateway.
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            tracker: GenerationTracker::new(),
        }
    }

    /// The gateway in use.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Whether a visual generation is outstanding for the post.
    pub fn is_generating(&self, post_id: &str) -> bool {
        self.tracker.is_generating(post_id)
    }

    /// Build the intelligence digest embedded in the campaign prompt:
    /// `"institution: trend, trend. institution: ..."`.
    pub fn intelligence_digest(records: &[IntelligenceRecord]) -> String {
        records
            .iter()
            .map(|r| format!("{}: {}", r.institution, r.trends.join(", ")))
            .collect::<Vec<_>>()
            .join(". ")
    }

    /// Generate one campaign batch: one post per (day, network) pair.
    ///
    /// All-or-nothing: either the full batch is returned or the call fails as
    /// a whole; there is no per-post retry. A malformed gateway payload
    /// surfaces as an empty batch. Each post gets a
    /// `{request-timestamp-millis}-{index}` id, unique within the batch and
    /// across repeated invocations, and starts Pending.
    #[instrument(skip(self, intelligence, brief), fields(days = days.len(), networks = networks.len()))]
    pub async fn generate_campaign(
        &self,
        networks: &[SocialNetwork],
        days: &[String],
        intelligence: &[IntelligenceRecord],
        brief: Option<String>,
    ) -> VitrineResult<Vec<Post>> {
        if days.is_empty() {
            return Err(PlannerError::new(PlannerErrorKind::NoDaysSelected).into());
        }
        if networks.is_empty() {
            return Err(PlannerError::new(PlannerErrorKind::NoNetworksSelected).into());
        }

        let request = CampaignRequest::builder()
            .networks(networks.to_vec())
            .days(days.to_vec())
            .intelligence_digest(Self::intelligence_digest(intelligence))
            .brief(brief)
            .build()
            .map_err(|e| ConfigError::new(format!("Campaign request: {}", e)))?;

        let drafts = self.gateway.campaign_drafts(&request).await?;
        if drafts.is_empty() {
            warn!("Gateway returned no drafts for the campaign");
        }

        let stamp = chrono::Utc::now().timestamp_millis();
        let posts: Vec<Post> = drafts
            .into_iter()
            .enumerate()
            .map(|(index, draft)| Post::from_draft(draft, format!("{}-{}", stamp, index)))
            .collect();

        info!(count = posts.len(), "Campaign batch generated");
        Ok(posts)
    }

    /// Generate one visual for one post.
    ///
    /// Closed three-way dispatch on the requested kind. On success the
    /// returned post carries the new media and its `suggested_visual` is
    /// overwritten to the requested kind (last write wins); merge it back
    /// with the session's `update_post`. A second request for the same post
    /// while one is outstanding is rejected; requests for distinct posts
    /// proceed independently.
    #[instrument(skip(self, post), fields(id = %post.id, visual = %visual))]
    pub async fn generate_visual(&self, post: &Post, visual: VisualType) -> VitrineResult<Post> {
        let _guard = self.tracker.begin(&post.id)?;

        let media = match visual {
            VisualType::Image => self.gateway.generate_image(&post.content).await?,
            VisualType::Video => self.gateway.generate_video(&post.content).await?,
            VisualType::Speech => self.gateway.generate_speech(&post.content).await?,
        };

        info!("Visual generated");
        Ok(post.clone().with_visual(media, visual))
    }
}
