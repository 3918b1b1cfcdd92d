//! Speech playback error types.

/// Kinds of playback errors raised while decoding a speech payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum PlaybackErrorKind {
    /// The base64 payload could not be decoded
    #[display("Base64 decode error: {}", _0)]
    Base64Decode(String),
    /// The payload decoded to zero bytes
    #[display("Speech payload is empty")]
    EmptyPayload,
    /// The media reference does not carry raw audio
    #[display("Media reference is not a speech payload: {}", _0)]
    NotAudio(String),
}

/// Playback error with location tracking.
///
/// # Examples
///
/// ```
/// use vitrine_error::{PlaybackError, PlaybackErrorKind};
///
/// let err = PlaybackError::new(PlaybackErrorKind::EmptyPayload);
/// assert!(format!("{}", err).contains("empty"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Playback Error: {} at line {} in {}", kind, line, file)]
pub struct PlaybackError {
    /// The kind of error that occurred
    pub kind: PlaybackErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl PlaybackError {
    /// Create a new playback error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PlaybackErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
