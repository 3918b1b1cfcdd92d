//! Top-level error wrapper types.

use crate::{
    ConfigError, GatewayError, HttpError, JsonError, PlannerError, PlaybackError, StorageError,
};

/// This is the foundation error enum. Each Vitrine crate contributes the
/// variants for its own concern.
///
/// # Examples
///
/// ```
/// use vitrine_error::{VitrineError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: VitrineError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum VitrineErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Generation gateway error
    #[from(GatewayError)]
    Gateway(GatewayError),
    /// Persistence adapter error
    #[from(StorageError)]
    Storage(StorageError),
    /// Speech playback error
    #[from(PlaybackError)]
    Playback(PlaybackError),
    /// Planner precondition error
    #[from(PlannerError)]
    Planner(PlannerError),
}

/// Vitrine error with kind discrimination.
///
/// # Examples
///
/// ```
/// use vitrine_error::{VitrineError, VitrineResult, ConfigError};
///
/// fn might_fail() -> VitrineResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Vitrine Error: {}", _0)]
pub struct VitrineError(Box<VitrineErrorKind>);

impl VitrineError {
    /// Create a new error from a kind.
    pub fn new(kind: VitrineErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &VitrineErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to VitrineErrorKind
impl<T> From<T> for VitrineError
where
    T: Into<VitrineErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Vitrine operations.
///
/// # Examples
///
/// ```
/// use vitrine_error::{VitrineResult, HttpError};
///
/// fn fetch_data() -> VitrineResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type VitrineResult<T> = std::result::Result<T, VitrineError>;
