use crate::core::diagnostics::DiagnosticReporter;
use crate::core::error::AppError;
use crate::core::gateway::SaveError;
use crate::core::types::ErrorCategory;
use uuid::Uuid;

/// Message carried by every re-signalled persistence failure.
pub const PERSISTENCE_FAILURE_MESSAGE: &str = "Submission could not be saved";
pub const PERSISTENCE_FAILURE_CODE: &str = "SUBMIT-001";

/// Reports a failed save and replaces its cause with a generic error.
pub struct ErrorStage;

impl ErrorStage {
    pub fn intercept(
        submission_id: Uuid,
        cause: SaveError,
        reporter: &dyn DiagnosticReporter,
    ) -> AppError {
        reporter.report_failure(submission_id, &cause);

        let mut error = AppError::new(ErrorCategory::PersistenceError, PERSISTENCE_FAILURE_MESSAGE)
            .with_code(PERSISTENCE_FAILURE_CODE);
        error.add_context("submission_id", &submission_id.to_string());
        error
    }
}
