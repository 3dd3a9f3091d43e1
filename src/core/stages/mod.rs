//! Synchronous stages that run after the save resolves.
//!
//! On success the pipeline runs [`IndexStage`], then every configured
//! [`RecordTransform`] in order, then [`RecordingStage`]. On failure it runs
//! [`ErrorStage`] instead.

mod error;
mod index;
mod mutation;
mod recording;

pub use error::{ErrorStage, PERSISTENCE_FAILURE_CODE, PERSISTENCE_FAILURE_MESSAGE};
pub use index::{IndexStage, IndexedRecord};
pub use mutation::{AlternatingNameOverride, DEFAULT_OVERRIDE_NAME};
pub use recording::{RecordedSnapshot, RecordingStage};

use crate::core::entities::SubmissionRecord;

/// Rewrites a freshly indexed record before it is recorded.
///
/// Transforms always forward a record; they may only change its mutable
/// fields. `counter` is the session counter right after this record's index
/// was assigned.
pub trait RecordTransform: Send + Sync {
    fn name(&self) -> &'static str;
    fn apply(&self, record: SubmissionRecord, counter: u64) -> SubmissionRecord;
}

/// Run `record` through `transforms` in order.
pub fn apply_transforms(
    transforms: &[Box<dyn RecordTransform>],
    record: SubmissionRecord,
    counter: u64,
) -> SubmissionRecord {
    let mut current = record;
    for transform in transforms {
        current = transform.apply(current, counter);
    }
    current
}
