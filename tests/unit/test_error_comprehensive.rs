use formpipe::core::error::AppError;
use formpipe::core::gateway::SaveError;
use formpipe::core::types::{ErrorCategory, ErrorSeverity};

#[test]
fn test_error_creation_all_categories() {
    let categories = vec![
        ErrorCategory::ValidationError,
        ErrorCategory::PersistenceError,
        ErrorCategory::ConfigurationError,
        ErrorCategory::SerializationError,
        ErrorCategory::IoError,
        ErrorCategory::InternalError,
    ];

    for category in categories {
        let error = AppError::new(category, "test message");
        assert_eq!(error.category, category);
        assert_eq!(error.message, "test message");
        assert!(error.context.is_empty());
        assert!(error.occurred_at <= chrono::Utc::now());
        assert!(error.source.is_none());
    }
}

#[test]
fn test_error_severity_mapping() {
    let test_cases = vec![
        (ErrorCategory::ValidationError, ErrorSeverity::Error),
        (ErrorCategory::PersistenceError, ErrorSeverity::Warning),
        (ErrorCategory::ConfigurationError, ErrorSeverity::Error),
        (ErrorCategory::SerializationError, ErrorSeverity::Error),
        (ErrorCategory::IoError, ErrorSeverity::Error),
        (ErrorCategory::InternalError, ErrorSeverity::Error),
    ];

    for (category, expected_severity) in test_cases {
        let error = AppError::new(category, "test");
        assert_eq!(error.severity(), expected_severity);
    }
}

#[test]
fn test_error_display() {
    let mut error =
        AppError::new(ErrorCategory::PersistenceError, "save failed").with_code("SUBMIT-001");
    error.add_context("submission_id", "abc");

    let display = format!("{}", error);
    assert!(display.contains("SUBMIT-001"));
    assert!(display.contains("PersistenceError"));
    assert!(display.contains("save failed"));
    assert!(display.contains("abc"));
}

#[test]
fn test_error_source_is_displayed() {
    let error = AppError::from(anyhow::anyhow!(SaveError::Transport("timed out".into())));
    let display = error.to_string();
    assert!(display.contains("Transport error: timed out"));
    assert!(display.contains("Caused by: Transport error: timed out"));
}

#[test]
fn test_from_anyhow() {
    let error = AppError::from(anyhow::anyhow!("boom"));
    assert_eq!(error.category, ErrorCategory::InternalError);
    assert_eq!(error.code, "ANYHOW_ERROR");
    assert_eq!(error.message, "boom");
}

#[test]
fn test_save_error_messages() {
    assert_eq!(
        SaveError::Rejected { status: 503 }.to_string(),
        "Remote store rejected the submission with status 503"
    );
    assert_eq!(SaveError::Simulated.to_string(), "Simulated storage failure");
    assert_eq!(SaveError::Other("quota".into()).to_string(), "quota");
}
