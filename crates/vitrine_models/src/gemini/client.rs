//! Gateway client for the Gemini REST API.
//!
//! One client serves all five gateway operations; the model used for each is
//! taken from [`GatewayConfig`]. Structured-text operations degrade malformed
//! payloads to empty collections; media operations fail with a structured
//! gateway error. Video generation is a long-running job polled on a fixed
//! interval and bounded by a wall-clock deadline.

use crate::extraction::{extract_json, parse_json};
use crate::GatewayConfig;
use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::Client;
use serde::Deserialize;
use std::env;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, error, instrument, warn};

use vitrine_core::{IntelligenceCategory, IntelligenceRecord, MediaRef, PostDraft, SourceRef};
use vitrine_error::{GatewayError, GatewayErrorKind, HttpError, VitrineResult};
use vitrine_interface::{
    CampaignRequest, ContentGateway, ImageGeneration, SpeechGeneration, VideoGeneration,
};

use super::dto::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationSettings, ImageSettings,
    SpeechSettings, Tool, VideoGenerationRequest, VideoInstance, VideoOperation, VideoParameters,
};
use super::prompts;

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// An intelligence record as it appears on the wire, before citation sources
/// are merged in from the grounding metadata.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntelligenceWire {
    institution: String,
    category: IntelligenceCategory,
    trends: Vec<String>,
    last_campaigns: String,
}

/// Client for the Google Gemini API.
///
/// # Example
///
/// ```no_run
/// use vitrine_interface::ContentGateway;
/// use vitrine_models::GeminiGateway;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let gateway = GeminiGateway::new()?;
/// let records = gateway.competitive_intelligence().await?;
/// println!("{} institutions analysées", records.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct GeminiGateway {
    http: Client,
    api_key: String,
    config: GatewayConfig,
}

impl std::fmt::Debug for GeminiGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiGateway")
            .field("models", &self.config.models)
            .finish_non_exhaustive()
    }
}

impl GeminiGateway {
    /// Create a new gateway client.
    ///
    /// Reads the API key from the `GEMINI_API_KEY` environment variable
    /// (`.env` files are honored) and the model/polling configuration from
    /// `vitrine.toml` (bundled defaults plus user overrides).
    #[instrument(name = "gemini_gateway_new")]
    pub fn new() -> VitrineResult<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = GatewayConfig::load().unwrap_or_default();
        Self::with_config(config)
    }

    /// Create a new gateway client with an explicit configuration.
    pub fn with_config(config: GatewayConfig) -> VitrineResult<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| GatewayError::new(GatewayErrorKind::MissingApiKey))?;

        debug!("Creating new Gemini gateway client");
        Ok(Self {
            http: Client::new(),
            api_key,
            config,
        })
    }

    /// Gateway configuration in effect.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// POST a generateContent request for the given model.
    #[instrument(skip(self, request), fields(model = %model))]
    async fn post_generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> VitrineResult<GenerateContentResponse> {
        let url = format!("{}/models/{}:generateContent", GEMINI_API_URL, model);

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Gemini API");
                HttpError::new(format!("Request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Gemini API returned error");
            return Err(GatewayError::new(GatewayErrorKind::HttpStatus {
                status_code: status.as_u16(),
                message: body,
            })
            .into());
        }

        response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Gemini response");
            GatewayError::new(GatewayErrorKind::ApiRequest(format!(
                "Failed to parse response: {}",
                e
            )))
            .into()
        })
    }

    /// Submit a long-running video job.
    #[instrument(skip(self, request))]
    async fn submit_video_job(
        &self,
        request: &VideoGenerationRequest,
    ) -> VitrineResult<VideoOperation> {
        let url = format!(
            "{}/models/{}:predictLongRunning",
            GEMINI_API_URL, self.config.models.video
        );

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| HttpError::new(format!("Video job submission failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::new(GatewayErrorKind::HttpStatus {
                status_code: status.as_u16(),
                message: body,
            })
            .into());
        }

        response.json().await.map_err(|e| {
            GatewayError::new(GatewayErrorKind::ApiRequest(format!(
                "Failed to parse video operation: {}",
                e
            )))
            .into()
        })
    }

    /// Poll a long-running video job by operation name.
    #[instrument(skip(self), fields(operation = %name))]
    async fn poll_video_job(&self, name: &str) -> VitrineResult<VideoOperation> {
        let url = format!("{}/{}", GEMINI_API_URL, name);

        let response = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| HttpError::new(format!("Video job poll failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::new(GatewayErrorKind::HttpStatus {
                status_code: status.as_u16(),
                message: body,
            })
            .into());
        }

        response.json().await.map_err(|e| {
            GatewayError::new(GatewayErrorKind::ApiRequest(format!(
                "Failed to parse video operation: {}",
                e
            )))
            .into()
        })
    }

    /// Download a produced media file.
    #[instrument(skip(self), fields(uri = %uri))]
    async fn download_media(&self, uri: &str) -> VitrineResult<Vec<u8>> {
        let response = self
            .http
            .get(uri)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| {
                GatewayError::new(GatewayErrorKind::MediaDownload(format!("{}: {}", uri, e)))
            })?;

        if !response.status().is_success() {
            return Err(GatewayError::new(GatewayErrorKind::MediaDownload(format!(
                "{}: HTTP {}",
                uri,
                response.status()
            )))
            .into());
        }

        let bytes = response.bytes().await.map_err(|e| {
            GatewayError::new(GatewayErrorKind::MediaDownload(format!("{}: {}", uri, e)))
        })?;

        debug!(size = bytes.len(), "Downloaded generated media");
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl ContentGateway for GeminiGateway {
    #[instrument(skip(self))]
    async fn competitive_intelligence(&self) -> VitrineResult<Vec<IntelligenceRecord>> {
        let request = GenerateContentRequest {
            contents: vec![Content::text(prompts::intelligence_prompt())],
            tools: Some(vec![Tool::google_search()]),
            generation_config: Some(GenerationSettings {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(prompts::intelligence_schema()),
                ..Default::default()
            }),
        };

        let response = self
            .post_generate(&self.config.models.intelligence, &request)
            .await?;

        let Some(text) = response.text() else {
            warn!("Intelligence response carried no text, degrading to empty listing");
            return Ok(Vec::new());
        };

        let records: Vec<IntelligenceWire> =
            match extract_json(&text).and_then(|json| parse_json(&json)) {
                Ok(records) => records,
                Err(e) => {
                    warn!(error = %e, "Malformed intelligence payload, degrading to empty listing");
                    return Ok(Vec::new());
                }
            };

        // The grounding citations arrive per response, not per record; every
        // record carries the same source list.
        let sources: Vec<SourceRef> = response
            .web_sources()
            .into_iter()
            .map(|web| SourceRef {
                title: web.title.clone(),
                uri: web.uri.clone(),
            })
            .collect();

        Ok(records
            .into_iter()
            .map(|wire| IntelligenceRecord {
                institution: wire.institution,
                category: wire.category,
                trends: wire.trends,
                last_campaigns: wire.last_campaigns,
                sources: sources.clone(),
            })
            .collect())
    }

    #[instrument(skip(self, request), fields(days = request.days().len(), networks = request.networks().len()))]
    async fn campaign_drafts(&self, request: &CampaignRequest) -> VitrineResult<Vec<PostDraft>> {
        let body = GenerateContentRequest {
            contents: vec![Content::text(prompts::campaign_prompt(request))],
            tools: None,
            generation_config: Some(GenerationSettings {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(prompts::drafts_schema()),
                ..Default::default()
            }),
        };

        let response = self.post_generate(&self.config.models.drafts, &body).await?;

        let Some(text) = response.text() else {
            warn!("Draft response carried no text, degrading to empty batch");
            return Ok(Vec::new());
        };

        match extract_json(&text).and_then(|json| parse_json(&json)) {
            Ok(drafts) => Ok(drafts),
            Err(e) => {
                warn!(error = %e, "Malformed draft payload, degrading to empty batch");
                Ok(Vec::new())
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}

#[async_trait]
impl ImageGeneration for GeminiGateway {
    #[instrument(skip(self, prompt))]
    async fn generate_image(&self, prompt: &str) -> VitrineResult<MediaRef> {
        let request = GenerateContentRequest {
            contents: vec![Content::text(prompts::image_prompt(prompt))],
            tools: None,
            generation_config: Some(GenerationSettings {
                image_config: Some(ImageSettings {
                    aspect_ratio: self.config.image.aspect_ratio.clone(),
                }),
                ..Default::default()
            }),
        };

        let response = self.post_generate(&self.config.models.image, &request).await?;

        let inline = response.inline_data().ok_or_else(|| {
            GatewayError::new(GatewayErrorKind::EmptyResponse("image".to_string()))
        })?;

        Ok(MediaRef::DataUri {
            mime: inline.mime_type.clone(),
            data: inline.data.clone(),
        })
    }
}

#[async_trait]
impl VideoGeneration for GeminiGateway {
    #[instrument(skip(self, prompt))]
    async fn generate_video(&self, prompt: &str) -> VitrineResult<MediaRef> {
        let request = VideoGenerationRequest {
            instances: vec![VideoInstance {
                prompt: prompts::video_prompt(prompt),
            }],
            parameters: VideoParameters {
                number_of_videos: 1,
                resolution: self.config.video.resolution.clone(),
                aspect_ratio: self.config.video.aspect_ratio.clone(),
            },
        };

        let mut operation = self.submit_video_job(&request).await?;

        let interval = Duration::from_secs(self.config.video.poll_interval_secs);
        let deadline = Duration::from_secs(self.config.video.poll_timeout_secs);
        let started = Instant::now();

        while !operation.done {
            if started.elapsed() >= deadline {
                let elapsed_secs = started.elapsed().as_secs();
                warn!(elapsed_secs, "Video job exceeded polling deadline");
                return Err(GatewayError::new(GatewayErrorKind::VideoJobTimedOut {
                    elapsed_secs,
                })
                .into());
            }

            tokio::time::sleep(interval).await;
            operation = self.poll_video_job(&operation.name).await?;
        }

        if let Some(failure) = operation.error {
            return Err(GatewayError::new(GatewayErrorKind::VideoJobFailed(
                failure.message,
            ))
            .into());
        }

        let uri = operation.video_uri().ok_or_else(|| {
            GatewayError::new(GatewayErrorKind::EmptyResponse("video".to_string()))
        })?;

        let bytes = self.download_media(uri).await?;
        Ok(MediaRef::DataUri {
            mime: "video/mp4".to_string(),
            data: BASE64.encode(&bytes),
        })
    }
}

#[async_trait]
impl SpeechGeneration for GeminiGateway {
    #[instrument(skip(self, text))]
    async fn generate_speech(&self, text: &str) -> VitrineResult<MediaRef> {
        let request = GenerateContentRequest {
            contents: vec![Content::text(prompts::speech_prompt(text))],
            tools: None,
            generation_config: Some(GenerationSettings {
                response_modalities: Some(vec!["AUDIO".to_string()]),
                speech_config: Some(SpeechSettings::prebuilt(&self.config.speech.voice)),
                ..Default::default()
            }),
        };

        let response = self.post_generate(&self.config.models.speech, &request).await?;

        let inline = response.inline_data().ok_or_else(|| {
            GatewayError::new(GatewayErrorKind::EmptyResponse("speech".to_string()))
        })?;

        Ok(MediaRef::RawAudio(inline.data.clone()))
    }
}
