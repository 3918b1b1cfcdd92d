//! Media reference types for generated visuals.

use serde::{Deserialize, Serialize};

/// Opaque handle to generated media content.
///
/// The planner never inspects the payload; it only stores the reference on the
/// post and hands it back to the presentation shell (or, for raw audio, to the
/// playback decoder).
///
/// # Examples
///
/// ```
/// use vitrine_core::MediaRef;
///
/// let url = MediaRef::Url("https://example.com/clip.mp4".to_string());
/// let image = MediaRef::DataUri {
///     mime: "image/png".to_string(),
///     data: "iVBORw0KGgo".to_string(),
/// };
/// let speech = MediaRef::RawAudio("AAD/fw".to_string());
/// assert!(image.is_inline());
/// assert!(!url.is_inline());
/// assert!(speech.is_inline());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaRef {
    /// URL to fetch the content from
    Url(String),
    /// Inline base64 payload with its MIME type
    DataUri {
        /// MIME type of the payload
        mime: String,
        /// Base64-encoded content
        data: String,
    },
    /// Raw base64-encoded PCM audio, decoded only at playback time
    RawAudio(String),
}

impl MediaRef {
    /// Whether the reference carries its payload inline.
    pub fn is_inline(&self) -> bool {
        !matches!(self, MediaRef::Url(_))
    }

    /// Render as a `data:` URI when inline, or the URL itself.
    ///
    /// Raw audio has no displayable form; it renders with the PCM MIME type
    /// the gateway produces.
    pub fn display_url(&self) -> String {
        match self {
            MediaRef::Url(url) => url.clone(),
            MediaRef::DataUri { mime, data } => format!("data:{};base64,{}", mime, data),
            MediaRef::RawAudio(data) => format!("data:audio/pcm;base64,{}", data),
        }
    }
}
