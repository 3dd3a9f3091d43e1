#![allow(clippy::result_large_err)]

use super::{FormpipeConfig, GatewayKind};
use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use url::Url;

pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate configuration rules
    pub fn validate(config: &FormpipeConfig) -> Result<(), AppError> {
        // A save must take time, even when simulated
        if config.gateway.kind == GatewayKind::Simulated && config.gateway.delay_ms == 0 {
            return Err(invalid("gateway.delay_ms must be greater than zero"));
        }

        if !(0.0..=1.0).contains(&config.gateway.failure_rate) {
            return Err(invalid("gateway.failure_rate must be between 0.0 and 1.0"));
        }

        if config.gateway.kind == GatewayKind::Http {
            let endpoint = config.gateway.endpoint.as_deref().ok_or_else(|| {
                invalid("gateway.endpoint is required when gateway.kind is http")
            })?;
            Url::parse(endpoint)
                .map_err(|e| invalid(format!("invalid gateway.endpoint: {}", e)))?;

            if config.gateway.timeout_ms == 0 {
                return Err(invalid("gateway.timeout_ms must be greater than zero"));
            }
        }

        if config.mutation.override_name.is_empty() {
            return Err(invalid("mutation.override_name cannot be empty"));
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> AppError {
    AppError::new(ErrorCategory::ValidationError, message).with_code("CONFIG-001")
}
