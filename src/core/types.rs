use serde::{Deserialize, Serialize};

/// Lifecycle of a single submission as it moves through the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Rejected,
    Saving,
    Persisted,
    Transforming,
    Mutating,
    Recording,
    Done,
    ErrorReporting,
    Failed,
}

impl SubmissionPhase {
    /// Returns `true` for phases that end a submission.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            SubmissionPhase::Rejected | SubmissionPhase::Done | SubmissionPhase::Failed
        )
    }
}

impl std::fmt::Display for SubmissionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Error category enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCategory {
    ValidationError,
    PersistenceError,
    ConfigurationError,
    SerializationError,
    IoError,
    InternalError,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Error severity enumeration
///
/// `Warning` marks failures the session survives: it keeps accepting
/// submissions afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Error,
    Warning,
}
