use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::stages::DEFAULT_OVERRIDE_NAME;

/// Main formpipe configuration loaded from formpipe.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormpipeConfig {
    /// Persistence gateway configuration
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Record mutation configuration
    #[serde(default)]
    pub mutation: MutationConfig,
}

/// Which gateway implementation backs the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GatewayKind {
    #[default]
    Simulated,
    Http,
}

impl fmt::Display for GatewayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayKind::Simulated => write!(f, "simulated"),
            GatewayKind::Http => write!(f, "http"),
        }
    }
}

impl FromStr for GatewayKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "simulated" => Ok(GatewayKind::Simulated),
            "http" => Ok(GatewayKind::Http),
            _ => Err(format!(
                "invalid gateway.kind '{}'; supported values are simulated, http",
                value
            )),
        }
    }
}

/// Gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Gateway implementation
    #[serde(default)]
    pub kind: GatewayKind,

    /// Round trip of the simulated gateway, in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Probability in [0, 1] that a simulated save fails
    #[serde(default)]
    pub failure_rate: f64,

    /// Endpoint the http gateway posts to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Request timeout of the http gateway, in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

/// Mutation stage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationConfig {
    /// Name written into every even-numbered submission
    #[serde(default = "default_override_name")]
    pub override_name: String,
}

// Default functions
fn default_delay_ms() -> u64 {
    1000
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_override_name() -> String {
    DEFAULT_OVERRIDE_NAME.to_string()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        GatewayConfig {
            kind: GatewayKind::default(),
            delay_ms: default_delay_ms(),
            failure_rate: 0.0,
            endpoint: None,
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl Default for MutationConfig {
    fn default() -> Self {
        MutationConfig {
            override_name: default_override_name(),
        }
    }
}


pub mod loader;
pub mod validation;

pub use loader::ConfigLoader;
pub use validation::ConfigValidator;
