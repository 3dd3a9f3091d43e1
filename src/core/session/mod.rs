use crate::core::entities::{SubmissionInput, SubmissionRecord};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Mutable state shared by every submission of one form session.
#[derive(Debug, Default)]
pub struct SessionState {
    /// Next index to hand out; advanced only by the index stage.
    pub(crate) counter: u64,
    /// Records in the order they were recorded.
    pub(crate) history: Vec<SubmissionRecord>,
    /// Values currently staged in the form.
    pub(crate) draft: SubmissionInput,
}

impl SessionState {
    pub fn counter(&self) -> u64 {
        self.counter
    }

    pub fn history(&self) -> &[SubmissionRecord] {
        &self.history
    }

    pub fn draft(&self) -> &SubmissionInput {
        &self.draft
    }
}

/// Owner of the counter, history and draft for one form.
///
/// All post-save stages of a submission run while holding the state lock,
/// so their effects are never interleaved with another submission's.
#[derive(Debug, Default)]
pub struct FormSession {
    state: Mutex<SessionState>,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current counter value, equal to the number of recorded submissions.
    pub fn counter(&self) -> u64 {
        self.lock().counter
    }

    /// Snapshot of the recorded submissions.
    pub fn history(&self) -> Vec<SubmissionRecord> {
        self.lock().history.clone()
    }

    pub fn history_len(&self) -> usize {
        self.lock().history.len()
    }

    /// Stage values in the form, replacing whatever was there.
    pub fn stage(&self, input: SubmissionInput) {
        self.lock().draft = input;
    }

    pub fn draft(&self) -> SubmissionInput {
        self.lock().draft.clone()
    }

    /// Return the session to its freshly constructed state.
    pub fn reset(&self) {
        *self.lock() = SessionState::default();
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, SessionState> {
        // Stages never panic while holding the guard; recover the data if one did.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
