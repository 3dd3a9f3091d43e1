//! Persistence gateways: the single asynchronous dependency of the pipeline.
//!
//! A gateway performs one write per call and resolves to exactly one outcome.
//! [`SimulatedGateway`] reproduces the reference behaviour of a fixed delay
//! followed by success; [`HttpGateway`] posts the input to a remote endpoint.

mod http;
mod simulated;

pub use http::HttpGateway;
pub use simulated::SimulatedGateway;

use crate::core::config::{GatewayConfig, GatewayKind};
use crate::core::entities::{SubmissionInput, SuccessToken};
use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Cause reported by a gateway when a save does not complete.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaveError {
    #[error("Remote store rejected the submission with status {status}")]
    Rejected { status: u16 },
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Simulated storage failure")]
    Simulated,
    #[error("{0}")]
    Other(String),
}

/// Asynchronous write of one submission.
#[async_trait]
pub trait PersistenceGateway: Send + Sync + 'static {
    /// Short identifier used in diagnostics.
    fn name(&self) -> &'static str;

    /// Persist the input, suspending the caller until the store answers.
    async fn save(&self, input: &SubmissionInput) -> Result<SuccessToken, SaveError>;
}

/// Build the gateway described by configuration.
#[allow(clippy::result_large_err)]
pub fn from_config(config: &GatewayConfig) -> Result<Arc<dyn PersistenceGateway>, AppError> {
    match config.kind {
        GatewayKind::Simulated => Ok(Arc::new(SimulatedGateway::new(
            Duration::from_millis(config.delay_ms),
            config.failure_rate,
        ))),
        GatewayKind::Http => {
            let endpoint = config.endpoint.as_deref().ok_or_else(|| {
                AppError::new(
                    ErrorCategory::ConfigurationError,
                    "gateway.endpoint is required for the http gateway",
                )
                .with_code("GATEWAY-001")
            })?;
            let gateway =
                HttpGateway::new(endpoint, Duration::from_millis(config.timeout_ms))?;
            Ok(Arc::new(gateway))
        }
    }
}
