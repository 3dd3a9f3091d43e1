#![allow(clippy::result_large_err)]

use crate::core::entities::SubmissionRecord;
use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes history snapshots to disk and reads them back.
pub struct HistoryRecorder {
    path: PathBuf,
}

impl HistoryRecorder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        HistoryRecorder { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn export(&self, history: &[SubmissionRecord]) -> Result<(), AppError> {
        tracing::debug!(
            "Exporting {} records to {}",
            history.len(),
            self.path.display()
        );

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::new(
                    ErrorCategory::IoError,
                    format!("Failed to create history directory: {}", e),
                )
                .with_code("HISTORY-001")
            })?;
        }

        let serialized = serde_json::to_vec_pretty(history)?;
        fs::write(&self.path, serialized).map_err(|e| {
            AppError::new(
                ErrorCategory::IoError,
                format!("Failed to write history: {}", e),
            )
            .with_code("HISTORY-002")
        })?;

        tracing::info!("History exported to {}", self.path.display());
        Ok(())
    }

    pub fn load(&self) -> Result<Vec<SubmissionRecord>, AppError> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            AppError::new(
                ErrorCategory::IoError,
                format!("Failed to read history: {}", e),
            )
            .with_code("HISTORY-003")
        })?;

        let history = serde_json::from_str(&content)?;
        Ok(history)
    }
}
