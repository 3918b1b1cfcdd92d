//! Generation-gateway error types.

/// Gateway-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GatewayErrorKind {
    /// API key not found in environment
    #[display("GEMINI_API_KEY environment variable not set")]
    MissingApiKey,
    /// API request failed before a response was received
    #[display("Gateway request failed: {}", _0)]
    ApiRequest(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpStatus {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// The gateway returned a response with no usable payload
    #[display("Gateway returned an empty response for {}", _0)]
    EmptyResponse(String),
    /// Downloading a generated media file failed
    #[display("Media download failed: {}", _0)]
    MediaDownload(String),
    /// The long-running video job reported a failure
    #[display("Video generation job failed: {}", _0)]
    VideoJobFailed(String),
    /// The long-running video job exceeded the polling deadline
    #[display("Video generation job timed out after {}s", elapsed_secs)]
    VideoJobTimedOut {
        /// Seconds elapsed before the deadline expired
        elapsed_secs: u64,
    },
}

/// Gateway error with source location tracking.
///
/// # Examples
///
/// ```
/// use vitrine_error::{GatewayError, GatewayErrorKind};
///
/// let err = GatewayError::new(GatewayErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gateway Error: {} at line {} in {}", kind, line, file)]
pub struct GatewayError {
    /// The kind of error that occurred
    pub kind: GatewayErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GatewayError {
    /// Create a new GatewayError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GatewayErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
