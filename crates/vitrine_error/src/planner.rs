//! Planner precondition error types.

/// Kinds of planner errors raised by the lifecycle engine and orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum PlannerErrorKind {
    /// A campaign was requested with no publication days selected
    #[display("No publication days selected")]
    NoDaysSelected,
    /// A campaign was requested with no target networks
    #[display("No target networks selected")]
    NoNetworksSelected,
    /// A visual generation is already outstanding for the post
    #[display("Visual generation already in flight for post {}", _0)]
    VisualInFlight(String),
}

/// Planner error with location tracking.
///
/// # Examples
///
/// ```
/// use vitrine_error::{PlannerError, PlannerErrorKind};
///
/// let err = PlannerError::new(PlannerErrorKind::NoDaysSelected);
/// assert!(format!("{}", err).contains("days"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Planner Error: {} at line {} in {}", kind, line, file)]
pub struct PlannerError {
    /// The kind of error that occurred
    pub kind: PlannerErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl PlannerError {
    /// Create a new planner error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PlannerErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
