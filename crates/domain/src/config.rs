//! Configuration management

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_BIND_ADDRESS, DEFAULT_PORT, DEFAULT_SESSION_IDLE_SECS,
};
use crate::types::ClientCredentials;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Adoption directory connection settings
///
/// Missing credentials are not a load error: the directory client reports
/// them on first use so the UI can still render.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    pub base_url: String,
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    #[serde(skip_serializing)]
    pub api_secret: Option<String>,
    /// Per-request timeout; `None` leaves requests unbounded.
    pub timeout_seconds: Option<u64>,
}

impl UpstreamConfig {
    /// Client credentials, if both halves are present and non-blank.
    #[must_use]
    pub fn credentials(&self) -> Option<ClientCredentials> {
        let api_key = self.api_key.as_deref().map(str::trim).filter(|k| !k.is_empty())?;
        let api_secret = self.api_secret.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        Some(ClientCredentials { api_key: api_key.to_string(), api_secret: api_secret.to_string() })
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            api_key: None,
            api_secret: None,
            timeout_seconds: None,
        }
    }
}

impl fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<set>"))
            .field("api_secret", &self.api_secret.as_ref().map(|_| "<redacted>"))
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
    /// Idle time after which a browser session is discarded.
    pub session_idle_seconds: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            session_idle_seconds: DEFAULT_SESSION_IDLE_SECS,
        }
    }
}
