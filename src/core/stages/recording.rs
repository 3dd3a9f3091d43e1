use crate::core::diagnostics::DiagnosticReporter;
use crate::core::entities::{SubmissionInput, SubmissionRecord};
use crate::core::session::SessionState;
use uuid::Uuid;

/// Appends the record, clears the form draft, then reports the history.
///
/// The first two steps mutate the session and run under its lock; reporting
/// happens on the returned snapshot after the lock is released, so a
/// reporter may read the session freely.
pub struct RecordingStage;

/// History as it stood right after one record was appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedSnapshot {
    pub record: SubmissionRecord,
    pub history: Vec<SubmissionRecord>,
}

impl RecordingStage {
    pub fn record(record: SubmissionRecord, state: &mut SessionState) -> RecordedSnapshot {
        state.history.push(record.clone());
        state.draft = SubmissionInput::default();
        RecordedSnapshot {
            record,
            history: state.history.clone(),
        }
    }

    pub fn emit(
        submission_id: Uuid,
        snapshot: RecordedSnapshot,
        reporter: &dyn DiagnosticReporter,
    ) -> SubmissionRecord {
        reporter.report_history(submission_id, &snapshot.history);
        snapshot.record
    }
}
