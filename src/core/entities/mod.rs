use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Token returned by the reference gateway when a save completes.
pub const DEFAULT_SUCCESS_TOKEN: &str = "Data saved successfully";

/// Raw values captured by the form before they enter the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubmissionInput {
    pub name: String,
    pub email: String,
}

impl SubmissionInput {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Returns `true` when both fields are still at their reset values.
    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.email.is_empty()
    }
}

/// A persisted submission as it appears in the session history.
///
/// `index` is fixed when the record is built; `name` may still be rewritten
/// by a record transform before the record is appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub name: String,
    pub email: String,
    pub index: u64,
}

impl SubmissionRecord {
    pub fn from_input(input: SubmissionInput, index: u64) -> Self {
        Self {
            name: input.name,
            email: input.email,
            index,
        }
    }
}

/// Opaque acknowledgement produced by a successful save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessToken(pub String);

impl SuccessToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SuccessToken {
    fn default() -> Self {
        SuccessToken(DEFAULT_SUCCESS_TOKEN.to_string())
    }
}

/// Re-signalled persistence failure delivered to failure channel subscribers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureEvent {
    pub submission_id: Uuid,
    pub code: String,
    pub message: String,
    pub occurred_at: DateTime<Utc>,
}
