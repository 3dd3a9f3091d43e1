use crate::core::entities::{SubmissionInput, SubmissionRecord};
use crate::core::session::SessionState;

/// Record produced by the index stage along with the advanced counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedRecord {
    pub record: SubmissionRecord,
    pub counter_after: u64,
}

/// Assigns the current counter value as the record index, then advances it.
pub struct IndexStage;

impl IndexStage {
    pub fn assign(input: SubmissionInput, state: &mut SessionState) -> IndexedRecord {
        let index = state.counter;
        state.counter += 1;
        IndexedRecord {
            record: SubmissionRecord::from_input(input, index),
            counter_after: state.counter,
        }
    }
}
