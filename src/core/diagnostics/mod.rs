use crate::core::entities::{SubmissionInput, SubmissionRecord};
use crate::core::gateway::SaveError;
use crate::core::validation::Violation;
use uuid::Uuid;

/// Sink for the events the pipeline emits for external consumption.
pub trait DiagnosticReporter: Send + Sync {
    /// Called by the recording stage with the full history after each append.
    fn report_history(&self, submission_id: Uuid, history: &[SubmissionRecord]);

    /// Called by the error stage with the original cause before it is discarded.
    fn report_failure(&self, submission_id: Uuid, cause: &SaveError);

    /// Called when the validation gate turns an input away. No-op by default.
    fn report_rejection(
        &self,
        _submission_id: Uuid,
        _input: &SubmissionInput,
        _violations: &[Violation],
    ) {
    }
}

/// Reporter that forwards every event to `tracing`.
pub struct TracingReporter;

impl TracingReporter {
    pub fn new() -> Self {
        TracingReporter
    }
}

impl Default for TracingReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticReporter for TracingReporter {
    fn report_history(&self, submission_id: Uuid, history: &[SubmissionRecord]) {
        match render_history(history) {
            Some(Ok(rendered)) => tracing::info!(
                %submission_id,
                records = history.len(),
                "Submitted data: {}",
                rendered
            ),
            Some(Err(err)) => tracing::warn!(%submission_id, "failed to render history: {}", err),
            None => {}
        }
    }

    fn report_failure(&self, submission_id: Uuid, cause: &SaveError) {
        tracing::error!(%submission_id, "Error submitting data: {}", cause);
    }

    fn report_rejection(
        &self,
        submission_id: Uuid,
        _input: &SubmissionInput,
        violations: &[Violation],
    ) {
        tracing::trace!(%submission_id, ?violations, "submission rejected by validation gate");
    }
}

/// JSON rendering of the history, skipped entirely when INFO is filtered out.
fn render_history(history: &[SubmissionRecord]) -> Option<serde_json::Result<String>> {
    if !tracing::enabled!(tracing::Level::INFO) {
        return None;
    }
    Some(serde_json::to_string(history))
}
