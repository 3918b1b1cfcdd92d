//! Storage error types.

/// Kinds of storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// Failed to create storage directory
    #[display("Failed to create storage directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to write a slot document
    #[display("Failed to write slot: {}", _0)]
    SlotWrite(String),
    /// Failed to read a slot document
    #[display("Failed to read slot: {}", _0)]
    SlotRead(String),
    /// Failed to serialize a collection for a slot
    #[display("Failed to serialize slot contents: {}", _0)]
    Serialize(String),
    /// Failed to deserialize a slot document
    #[display("Failed to deserialize slot contents: {}", _0)]
    Deserialize(String),
}

/// Storage error with location tracking.
///
/// # Examples
///
/// ```
/// use vitrine_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::SlotRead("posts".to_string()));
/// assert!(format!("{}", err).contains("posts"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
