//! Trait definitions for generation gateways and their capabilities.

use crate::CampaignRequest;
use async_trait::async_trait;
use vitrine_core::{IntelligenceRecord, MediaRef, PostDraft};
use vitrine_error::VitrineResult;

/// Core trait that all generation gateways must implement.
///
/// This covers the structured-text surface: competitive intelligence and
/// campaign drafts. Media capabilities are exposed through optional traits.
///
/// Malformed or empty gateway JSON degrades to an empty collection rather
/// than an error; transport and API failures are errors.
#[async_trait]
pub trait ContentGateway: Send + Sync {
    /// Run the competitive watch and return one record per analyzed
    /// institution, each carrying its citation sources.
    async fn competitive_intelligence(&self) -> VitrineResult<Vec<IntelligenceRecord>>;

    /// Draft one post per (day, network) pair for the given campaign.
    async fn campaign_drafts(&self, request: &CampaignRequest) -> VitrineResult<Vec<PostDraft>>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;
}

/// Trait for gateways that can generate still images.
#[async_trait]
pub trait ImageGeneration: ContentGateway {
    /// Generate an image for the given scene description.
    ///
    /// Returns an inline data-URI reference.
    async fn generate_image(&self, prompt: &str) -> VitrineResult<MediaRef>;
}

/// Trait for gateways that can generate video clips.
///
/// Video generation is a long-running job: implementations submit the job,
/// poll for completion on a fixed interval, and fail with a distinct
/// timed-out kind once the configured deadline passes.
#[async_trait]
pub trait VideoGeneration: ContentGateway {
    /// Generate a video clip for the given scene description.
    async fn generate_video(&self, prompt: &str) -> VitrineResult<MediaRef>;
}

/// Trait for gateways that can render text to speech.
#[async_trait]
pub trait SpeechGeneration: ContentGateway {
    /// Render the given text as raw PCM audio.
    ///
    /// Returns a [`MediaRef::RawAudio`] payload; decoding is the caller's
    /// concern (see the planner's playback module).
    async fn generate_speech(&self, text: &str) -> VitrineResult<MediaRef>;
}

/// Alias for gateways carrying all three visual capabilities.
///
/// This is the bound the generation orchestrator requires: the three-way
/// dispatch over image, video, and speech must be satisfiable in one place.
pub trait VisualGateway: ImageGeneration + VideoGeneration + SpeechGeneration {}

impl<T> VisualGateway for T where T: ImageGeneration + VideoGeneration + SpeechGeneration {}
