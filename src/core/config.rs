//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables at startup. Configuration is resolved once, before
//! any protocol message is handled, and is immutable afterwards.

use base64::Engine;
use base64::engine::general_purpose::STANDARD_NO_PAD;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::{Error, Result};
use super::transport::TransportConfig;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Upstream Sentry instance configuration.
    pub sentry: SentryConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "sentry-mcp-server".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Configuration for the upstream Sentry instance.
#[derive(Clone, Serialize, Deserialize)]
pub struct SentryConfig {
    /// Base address of the Sentry instance (e.g., "https://sentry.example.com").
    /// The REST API lives under `<url>/api/0/`.
    pub url: String,

    /// Bearer token used to authenticate every upstream request.
    pub auth_token: String,

    /// Organization slug scoping projects and issues.
    pub organization: String,
}

/// Custom Debug implementation to redact the credential from logs.
impl std::fmt::Debug for SentryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentryConfig")
            .field("url", &self.url)
            .field("auth_token", &"[REDACTED]")
            .field("organization", &self.organization)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Reads a `.env` file if present. `SENTRY_URL` and `SENTRY_AUTH_TOKEN`
    /// are required; the organization slug comes from `SENTRY_ORG` or, as a
    /// fallback, from the payload embedded in an organization auth token.
    /// Any missing value is a startup error.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let url = require_env("SENTRY_URL")?;
        let auth_token = require_env("SENTRY_AUTH_TOKEN")?;

        let organization = match std::env::var("SENTRY_ORG") {
            Ok(org) if !org.trim().is_empty() => org,
            _ => {
                let org = organization_from_token(&auth_token).ok_or_else(|| {
                    Error::config(
                        "SENTRY_ORG is not set and the auth token does not embed \
                         an organization slug",
                    )
                })?;
                info!("Organization slug derived from auth token");
                org
            }
        };

        let mut server = ServerConfig::default();
        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            server.name = name;
        }

        let mut logging = LoggingConfig::default();
        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            logging.level = level;
        }

        Ok(Self {
            server,
            logging,
            transport: TransportConfig::from_env(),
            sentry: SentryConfig {
                url,
                auth_token,
                organization,
            },
        })
    }
}

/// Read a required environment variable, rejecting empty values.
fn require_env(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::config(format!("{} is not set", name))),
    }
}

/// Derive the organization slug from a Sentry organization auth token.
///
/// Organization tokens look like `sntrys_<base64 json>_<secret>`, where the
/// JSON payload carries the instance URL and the `org` slug. Returns `None`
/// for any token that does not follow this format.
pub fn organization_from_token(token: &str) -> Option<String> {
    let rest = token.strip_prefix("sntrys_")?;
    let encoded = rest.split('_').next()?;
    let decoded = STANDARD_NO_PAD
        .decode(encoded.trim_end_matches('='))
        .ok()?;
    let payload: serde_json::Value = serde_json::from_slice(&decoded).ok()?;
    payload.get("org")?.as_str().map(str::to_string)
}
