//! Shared test doubles for planner integration tests.

use std::sync::Arc;
use tokio::sync::Notify;
use vitrine_core::{IntelligenceRecord, MediaRef, PostDraft, VisualType};
use vitrine_error::VitrineResult;
use vitrine_interface::{
    CampaignRequest, ContentGateway, ImageGeneration, SpeechGeneration, VideoGeneration,
};

/// Gateway double: drafts one post per (day, network) pair and returns
/// canned media. An optional gate makes media calls block until notified,
/// for exercising in-flight tracking.
#[derive(Default)]
pub struct MockGateway {
    intelligence: Vec<IntelligenceRecord>,
    gate: Option<Arc<Notify>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_intelligence(mut self, records: Vec<IntelligenceRecord>) -> Self {
        self.intelligence = records;
        self
    }

    pub fn with_gate(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    async fn wait_for_gate(&self) {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
    }
}

#[async_trait::async_trait]
impl ContentGateway for MockGateway {
    async fn competitive_intelligence(&self) -> VitrineResult<Vec<IntelligenceRecord>> {
        Ok(self.intelligence.clone())
    }

    async fn campaign_drafts(&self, request: &CampaignRequest) -> VitrineResult<Vec<PostDraft>> {
        let mut drafts = Vec::new();
        for day in request.days() {
            for network in request.networks() {
                drafts.push(PostDraft {
                    day: day.clone(),
                    network: *network,
                    content: format!("{} : angle {}", day, network),
                    suggested_visual: VisualType::Image,
                });
            }
        }
        Ok(drafts)
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

#[async_trait::async_trait]
impl ImageGeneration for MockGateway {
    async fn generate_image(&self, _prompt: &str) -> VitrineResult<MediaRef> {
        self.wait_for_gate().await;
        Ok(MediaRef::DataUri {
            mime: "image/png".to_string(),
            data: "aW1hZ2U=".to_string(),
        })
    }
}

#[async_trait::async_trait]
impl VideoGeneration for MockGateway {
    async fn generate_video(&self, _prompt: &str) -> VitrineResult<MediaRef> {
        self.wait_for_gate().await;
        Ok(MediaRef::DataUri {
            mime: "video/mp4".to_string(),
            data: "dmlkZW8=".to_string(),
        })
    }
}

#[async_trait::async_trait]
impl SpeechGeneration for MockGateway {
    async fn generate_speech(&self, _text: &str) -> VitrineResult<MediaRef> {
        self.wait_for_gate().await;
        Ok(MediaRef::RawAudio("AAAAQA==".to_string()))
    }
}
