//! Wire types for the Gemini REST API.
//!
//! Request bodies are built from these types and serialized with serde; the
//! same `Content`/`Part` shapes appear in responses, so parts carry both text
//! and inline-data fields as options.

use serde::{Deserialize, Serialize};

/// One content block in a request or response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Content {
    /// Ordered message parts
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// A single-text content block.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part {
                text: Some(text.into()),
                inline_data: None,
            }],
        }
    }
}

/// One part of a content block: text or inline binary data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Text payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Inline binary payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

/// Inline base64 payload with its MIME type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// MIME type of the payload
    pub mime_type: String,
    /// Base64-encoded content
    pub data: String,
}

/// A tool made available to the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Web-search grounding (empty object enables it)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_search: Option<EmptyObject>,
}

impl Tool {
    /// The web-search grounding tool.
    pub fn google_search() -> Self {
        Self {
            google_search: Some(EmptyObject {}),
        }
    }
}

/// Serializes as `{}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EmptyObject {}

/// Voice selection for speech generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SpeechSettings {
    /// Voice configuration
    pub voice_config: VoiceConfig,
}

impl SpeechSettings {
    /// Select a prebuilt voice by name.
    pub fn prebuilt(voice_name: impl Into<String>) -> Self {
        Self {
            voice_config: VoiceConfig {
                prebuilt_voice_config: PrebuiltVoiceConfig {
                    voice_name: voice_name.into(),
                },
            },
        }
    }
}

/// Wrapper around the prebuilt voice selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct VoiceConfig {
    /// Prebuilt voice selection
    pub prebuilt_voice_config: PrebuiltVoiceConfig,
}

/// Named prebuilt voice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PrebuiltVoiceConfig {
    /// Voice name (e.g., "Kore")
    pub voice_name: String,
}

/// Image-specific generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSettings {
    /// Requested aspect ratio
    pub aspect_ratio: String,
}

/// Generation parameters for a generateContent request.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerationSettings {
    /// Response MIME type (e.g., "application/json")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    /// JSON schema constraining the response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<serde_json::Value>,
    /// Requested response modalities (e.g., ["AUDIO"])
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_modalities: Option<Vec<String>>,
    /// Speech settings (TTS models)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speech_config: Option<SpeechSettings>,
    /// Image settings (image models)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_config: Option<ImageSettings>,
}

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation contents
    pub contents: Vec<Content>,
    /// Tools made available to the model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Tool>>,
    /// Generation parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationSettings>,
}

/// Response body for `models/{model}:generateContent`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateContentResponse {
    /// Ranked candidates; the first is used
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate's parts.
    pub fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let text: String = candidate
            .content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        if text.is_empty() { None } else { Some(text) }
    }

    /// First inline payload found across the first candidate's parts.
    pub fn inline_data(&self) -> Option<&InlineData> {
        self.candidates
            .first()?
            .content
            .parts
            .iter()
            .find_map(|part| part.inline_data.as_ref())
    }

    /// Web citations from the first candidate's grounding metadata.
    pub fn web_sources(&self) -> Vec<&WebSource> {
        self.candidates
            .first()
            .and_then(|c| c.grounding_metadata.as_ref())
            .map(|m| {
                m.grounding_chunks
                    .iter()
                    .filter_map(|chunk| chunk.web.as_ref())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// One response candidate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Candidate {
    /// Generated content
    pub content: Content,
    /// Search-grounding metadata, present when the search tool ran
    pub grounding_metadata: Option<GroundingMetadata>,
}

/// Grounding metadata attached to a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct GroundingMetadata {
    /// Source chunks backing the response
    pub grounding_chunks: Vec<GroundingChunk>,
}

/// One grounding chunk.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct GroundingChunk {
    /// Web source, when the chunk is a web citation
    pub web: Option<WebSource>,
}

/// A web citation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct WebSource {
    /// Page title
    pub title: String,
    /// Page URI
    pub uri: String,
}

/// Request body for `models/{model}:predictLongRunning` (video jobs).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoGenerationRequest {
    /// Prompt instances (one per requested video)
    pub instances: Vec<VideoInstance>,
    /// Job parameters
    pub parameters: VideoParameters,
}

/// One video prompt instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoInstance {
    /// Scene prompt
    pub prompt: String,
}

/// Video job parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoParameters {
    /// Number of videos to produce
    pub number_of_videos: u32,
    /// Requested resolution
    pub resolution: String,
    /// Requested aspect ratio
    pub aspect_ratio: String,
}

/// A long-running operation, as submitted and as polled.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoOperation {
    /// Operation resource name, used for polling
    pub name: String,
    /// Whether the job has finished (successfully or not)
    pub done: bool,
    /// Failure detail when the job errored
    pub error: Option<OperationError>,
    /// Result payload when the job succeeded
    pub response: Option<VideoOperationResponse>,
}

impl VideoOperation {
    /// Download URI of the first generated video, when present.
    pub fn video_uri(&self) -> Option<&str> {
        self.response
            .as_ref()?
            .generate_video_response
            .as_ref()?
            .generated_samples
            .first()?
            .video
            .as_ref()
            .map(|v| v.uri.as_str())
    }
}

/// Operation failure detail.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct OperationError {
    /// Numeric status code
    pub code: i64,
    /// Human-readable message
    pub message: String,
}

/// Result payload of a finished video operation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoOperationResponse {
    /// Video generation result
    pub generate_video_response: Option<GenerateVideoResponse>,
}

/// Generated video samples.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateVideoResponse {
    /// Produced samples (one per requested video)
    pub generated_samples: Vec<GeneratedSample>,
}

/// One generated video sample.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct GeneratedSample {
    /// The produced video file
    pub video: Option<VideoFile>,
}

/// Reference to a produced video file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct VideoFile {
    /// Download URI
    pub uri: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_serializes_camel_case() {
        let request = GenerateContentRequest {
            contents: vec![Content::text("Bonjour")],
            tools: Some(vec![Tool::google_search()]),
            generation_config: Some(GenerationSettings {
                response_mime_type: Some("application/json".to_string()),
                ..Default::default()
            }),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "Bonjour");
        assert!(json["tools"][0]["googleSearch"].is_object());
        assert_eq!(
            json["generationConfig"]["responseMimeType"],
            "application/json"
        );
    }

    #[test]
    fn test_response_text_concatenates_parts() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [{
                    "content": {"parts": [{"text": "[{\"day\""}, {"text": ": \"Lundi\"}]"}]}
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(response.text().unwrap(), r#"[{"day": "Lundi"}]"#);
    }

    #[test]
    fn test_response_inline_data() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [{
                    "content": {"parts": [
                        {"inlineData": {"mimeType": "image/png", "data": "aWNp"}}
                    ]}
                }]
            }"#,
        )
        .unwrap();

        let inline = response.inline_data().unwrap();
        assert_eq!(inline.mime_type, "image/png");
        assert_eq!(inline.data, "aWNp");
    }

    #[test]
    fn test_video_operation_uri() {
        let operation: VideoOperation = serde_json::from_str(
            r#"{
                "name": "operations/abc",
                "done": true,
                "response": {
                    "generateVideoResponse": {
                        "generatedSamples": [{"video": {"uri": "https://dl/video.mp4"}}]
                    }
                }
            }"#,
        )
        .unwrap();

        assert!(operation.done);
        assert_eq!(operation.video_uri().unwrap(), "https://dl/video.mp4");
    }

    #[test]
    fn test_pending_operation_has_no_uri() {
        let operation: VideoOperation =
            serde_json::from_str(r#"{"name": "operations/abc"}"#).unwrap();
        assert!(!operation.done);
        assert!(operation.video_uri().is_none());
    }
}
