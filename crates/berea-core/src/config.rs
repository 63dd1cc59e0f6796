//! Service configuration.

use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_API_BASE: &str = "https://bible-api.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_PORT: u16 = 3004;

/// Top-level Berea configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BereaConfig {
    /// HTTP server port.
    pub port: u16,
    /// Base URL of the external verse service.
    pub api_base: String,
    /// Per-request timeout for verse lookups, in seconds.
    pub timeout_secs: u64,
    /// Translation code used when a request doesn't specify one.
    pub default_translation: String,
}

impl BereaConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let api_base = std::env::var("BEREA_API_BASE")
            .unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        let timeout_secs = std::env::var("BEREA_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let default_translation = std::env::var("BEREA_TRANSLATION")
            .unwrap_or_else(|_| "kjv".to_string());

        debug!(
            "config: port={} api_base={} timeout={}s translation={}",
            port, api_base, timeout_secs, default_translation
        );

        Self {
            port,
            api_base,
            timeout_secs,
            default_translation,
        }
    }
}

impl Default for BereaConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            default_translation: "kjv".to_string(),
        }
    }
}
