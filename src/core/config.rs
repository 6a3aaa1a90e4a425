//! Configuration management for the MCP server.
//!
//! Configuration is populated from defaults and then overridden by
//! environment variables (optionally loaded from a `.env` file).

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Default host of the Dungeon & Fighter Open API.
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://api.neople.co.kr";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Upstream API configuration.
    pub upstream: UpstreamConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Where tool calls are forwarded to.
///
/// The API key is deliberately absent: every tool call carries its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Scheme and host of the upstream API, without a trailing path.
    pub base_url: String,
}

impl UpstreamConfig {
    /// Join a catalogue path (e.g. `/df/servers`) onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_UPSTREAM_BASE_URL.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "DNF API Server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            upstream: UpstreamConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Recognized variables: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`,
    /// `MCP_DNF_API_BASE_URL` and the `MCP_TRANSPORT`/`MCP_HTTP_*` family.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();

        if let Ok(base_url) = std::env::var("MCP_DNF_API_BASE_URL") {
            let base_url = base_url.trim();
            if !base_url.is_empty() {
                info!("Upstream API base URL overridden: {}", base_url);
                config.upstream.base_url = base_url.to_string();
            }
        }

        config
    }
}
