use super::RecordTransform;
use crate::core::entities::SubmissionRecord;

pub const DEFAULT_OVERRIDE_NAME: &str = "John";

/// Replaces the name of every even-numbered submission.
///
/// The check runs against the counter after the index stage advanced it, so
/// the 2nd, 4th, 6th... recorded submissions carry the override name.
#[derive(Debug, Clone)]
pub struct AlternatingNameOverride {
    override_name: String,
}

impl AlternatingNameOverride {
    pub fn new(override_name: impl Into<String>) -> Self {
        Self {
            override_name: override_name.into(),
        }
    }
}

impl Default for AlternatingNameOverride {
    fn default() -> Self {
        Self::new(DEFAULT_OVERRIDE_NAME)
    }
}

impl RecordTransform for AlternatingNameOverride {
    fn name(&self) -> &'static str {
        "alternating_name_override"
    }

    fn apply(&self, mut record: SubmissionRecord, counter: u64) -> SubmissionRecord {
        if counter % 2 == 0 {
            tracing::debug!(index = record.index, "overriding submitted name");
            record.name = self.override_name.clone();
        }
        record
    }
}
