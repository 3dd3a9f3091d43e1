//! Logging settings read from `<workspace>/.formpipe/config/logging.toml`.
//!
//! ```toml
//! [logging]
//! default_level = "formpipe=debug,info"
//! console_output = "stdout"
//! enable_file = false
//!
//! [logging.opentelemetry]
//! enabled = true
//! endpoint = "http://127.0.0.1:4317"
//! ```

use crate::logging::layers::console::ConsoleOutput;
use crate::Result;
use anyhow::{bail, Context};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::filter::EnvFilter;
use url::Url;

/// Environment variable that enables OTLP export when set to an endpoint.
pub const OTLP_ENDPOINT_ENV: &str = "OTEL_EXPORTER_OTLP_ENDPOINT";
/// Environment variable that overrides `logging.console_output`.
pub const CONSOLE_OUTPUT_ENV: &str = "FORMPIPE_LOG_CONSOLE";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Directory for `formpipe.log`; relative paths hang off the workspace.
    pub log_dir: Option<PathBuf>,
    /// Filter directives used when `RUST_LOG` is unset.
    pub default_level: String,
    pub enable_file: bool,
    /// Console sink; falls back to the execution context's default.
    pub console_output: Option<ConsoleOutput>,
    pub opentelemetry: OpenTelemetryConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OpenTelemetryConfig {
    pub enabled: bool,
    pub endpoint: Option<String>,
    pub service_name: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: None,
            default_level: "info".to_string(),
            enable_file: true,
            console_output: None,
            opentelemetry: OpenTelemetryConfig::default(),
        }
    }
}

impl Default for OpenTelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: None,
            service_name: env!("CARGO_PKG_NAME").to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct LoggingFile {
    #[serde(default)]
    logging: LoggingConfig,
}

impl LoggingConfig {
    /// Defaults, then the workspace file, then environment overrides; validated.
    pub fn load(workspace_root: Option<&Path>) -> Result<Self> {
        let mut config = match workspace_root.map(Self::config_path) {
            Some(path) if path.exists() => Self::read(&path)?,
            _ => Self::default(),
        };
        if let Some(endpoint) = non_empty_env(OTLP_ENDPOINT_ENV) {
            config.opentelemetry.endpoint = Some(endpoint);
            config.opentelemetry.enabled = true;
        }
        if let Some(raw) = non_empty_env(CONSOLE_OUTPUT_ENV) {
            let output = raw.parse::<ConsoleOutput>().map_err(anyhow::Error::msg)?;
            config.console_output = Some(output);
        }
        config.validate()?;
        Ok(config)
    }

    pub fn config_path(workspace_root: &Path) -> PathBuf {
        workspace_root
            .join(".formpipe")
            .join("config")
            .join("logging.toml")
    }

    fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read logging config {}", path.display()))?;
        let file: LoggingFile = toml::from_str(&content)
            .with_context(|| format!("failed to parse logging config {}", path.display()))?;
        Ok(file.logging)
    }

    pub fn validate(&self) -> Result<()> {
        EnvFilter::try_new(&self.default_level).with_context(|| {
            format!(
                "logging.default_level '{}' is not a valid filter",
                self.default_level
            )
        })?;

        if let Some(endpoint) = &self.opentelemetry.endpoint {
            parse_endpoint(endpoint)?;
        }
        if self.opentelemetry.enabled {
            if self.opentelemetry.endpoint.is_none() {
                bail!("logging.opentelemetry.endpoint is required when opentelemetry is enabled");
            }
            if self.opentelemetry.service_name.trim().is_empty() {
                bail!("logging.opentelemetry.service_name cannot be empty");
            }
        }
        Ok(())
    }
}

impl OpenTelemetryConfig {
    /// Endpoint to export spans to, or `None` when export is off.
    pub fn export_endpoint(&self) -> Result<Option<Url>> {
        match (&self.endpoint, self.enabled) {
            (Some(endpoint), true) => parse_endpoint(endpoint).map(Some),
            _ => Ok(None),
        }
    }
}

fn parse_endpoint(endpoint: &str) -> Result<Url> {
    let url = Url::parse(endpoint)
        .with_context(|| format!("invalid logging.opentelemetry.endpoint '{}'", endpoint))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!(
            "logging.opentelemetry.endpoint must use http or https, got '{}'",
            url.scheme()
        );
    }
    Ok(url)
}

fn non_empty_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
