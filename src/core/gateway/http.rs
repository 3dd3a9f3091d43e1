#![allow(clippy::result_large_err)]

use super::{PersistenceGateway, SaveError};
use crate::core::entities::{SubmissionInput, SuccessToken};
use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use async_trait::async_trait;
use std::time::Duration;
use url::Url;

/// Gateway that POSTs each input as JSON to a remote endpoint.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    endpoint: Url,
    timeout: Duration,
}

impl HttpGateway {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, AppError> {
        let endpoint = Url::parse(endpoint).map_err(|e| {
            AppError::new(
                ErrorCategory::ConfigurationError,
                format!("Invalid gateway endpoint {}: {}", endpoint, e),
            )
            .with_code("GATEWAY-002")
        })?;
        let client = reqwest::Client::builder()
            .user_agent(concat!("formpipe/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                AppError::new(
                    ErrorCategory::InternalError,
                    format!("Failed to build HTTP client: {}", e),
                )
                .with_code("GATEWAY-003")
            })?;
        Ok(Self {
            client,
            endpoint,
            timeout,
        })
    }
}

#[async_trait]
impl PersistenceGateway for HttpGateway {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn save(&self, input: &SubmissionInput) -> Result<SuccessToken, SaveError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .timeout(self.timeout)
            .json(input)
            .send()
            .await
            .map_err(|e| SaveError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SaveError::Rejected {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SaveError::Transport(e.to_string()))?;
        if body.trim().is_empty() {
            Ok(SuccessToken::default())
        } else {
            Ok(SuccessToken(body))
        }
    }
}
