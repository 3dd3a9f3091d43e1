#![allow(clippy::result_large_err)]

use super::FormpipeConfig;
use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use std::env;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "formpipe.toml";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config from workspace root (workspace/formpipe.toml)
    /// Environment variables override config file values
    /// Falls back to defaults + env vars when the file doesn't exist
    pub fn load_from_workspace(workspace_path: &Path) -> Result<FormpipeConfig, AppError> {
        let config_path = workspace_path.join(CONFIG_FILE_NAME);
        let config_file = Self::load_from_file(&config_path)?;

        let mut config = config_file.unwrap_or_default();

        Self::apply_env_overrides(&mut config);

        Ok(config)
    }

    /// Load config from specific file path
    /// Returns Ok(None) if file doesn't exist
    pub fn load_from_file(path: &Path) -> Result<Option<FormpipeConfig>, AppError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::new(
                ErrorCategory::IoError,
                format!("Failed to read config file {}: {}", path.display(), e),
            )
        })?;

        let config: FormpipeConfig = toml::from_str(&content).map_err(|e| {
            AppError::new(
                ErrorCategory::ConfigurationError,
                format!("Failed to parse config file {}: {}", path.display(), e),
            )
        })?;

        Ok(Some(config))
    }

    /// Apply environment variable overrides to the configuration
    /// Unparseable values are ignored and the previous value is kept
    fn apply_env_overrides(config: &mut FormpipeConfig) {
        // Gateway overrides
        if let Ok(kind_str) = env::var("FORMPIPE_GATEWAY_KIND") {
            match kind_str.parse() {
                Ok(kind) => config.gateway.kind = kind,
                Err(err) => tracing::warn!("ignoring FORMPIPE_GATEWAY_KIND: {}", err),
            }
        }

        if let Ok(delay_str) = env::var("FORMPIPE_GATEWAY_DELAY_MS") {
            if let Ok(delay_ms) = delay_str.parse::<u64>() {
                config.gateway.delay_ms = delay_ms;
            }
        }

        if let Ok(rate_str) = env::var("FORMPIPE_GATEWAY_FAILURE_RATE") {
            if let Ok(failure_rate) = rate_str.parse::<f64>() {
                config.gateway.failure_rate = failure_rate;
            }
        }

        if let Ok(endpoint) = env::var("FORMPIPE_GATEWAY_ENDPOINT") {
            config.gateway.endpoint = Some(endpoint);
        }

        if let Ok(timeout_str) = env::var("FORMPIPE_GATEWAY_TIMEOUT_MS") {
            if let Ok(timeout_ms) = timeout_str.parse::<u64>() {
                config.gateway.timeout_ms = timeout_ms;
            }
        }

        // Mutation overrides
        if let Ok(override_name) = env::var("FORMPIPE_MUTATION_OVERRIDE_NAME") {
            config.mutation.override_name = override_name;
        }
    }

    /// Get documentation for supported environment variables
    pub fn env_var_documentation() -> &'static [&'static str] {
        &[
            "FORMPIPE_GATEWAY_KIND - Override gateway implementation (simulated/http, default: simulated)",
            "FORMPIPE_GATEWAY_DELAY_MS - Override simulated save delay in milliseconds (default: 1000)",
            "FORMPIPE_GATEWAY_FAILURE_RATE - Override simulated failure probability (0.0-1.0, default: 0.0)",
            "FORMPIPE_GATEWAY_ENDPOINT - Override http gateway endpoint",
            "FORMPIPE_GATEWAY_TIMEOUT_MS - Override http gateway timeout in milliseconds (default: 5000)",
            "FORMPIPE_MUTATION_OVERRIDE_NAME - Override the name forced onto even submissions (default: John)",
        ]
    }
}
