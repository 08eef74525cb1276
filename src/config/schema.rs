//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration for the edge gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listen address.
    pub listener: ListenerConfig,

    /// Backend the `/api` traffic is forwarded to.
    pub upstream: UpstreamConfig,

    /// Pre-built UI assets.
    pub assets: AssetConfig,

    /// Liveness probe settings.
    pub liveness: LivenessConfig,

    /// Logging and metrics settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ListenerConfig {
    /// Interface to bind, all interfaces by default.
    pub host: String,

    /// TCP port to bind.
    pub port: u16,
}

impl ListenerConfig {
    /// `host:port` string suitable for parsing into a socket address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

/// Upstream (backend API) configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the backend, e.g. `http://127.0.0.1:8000`.
    pub url: String,

    /// Requests whose path falls under this prefix are forwarded.
    pub path_prefix: String,

    /// Deadline in seconds for connecting and receiving the response head,
    /// and the longest gap allowed between response body chunks.
    pub timeout_secs: u64,

    /// Message placed in the `error` field of the 500 body when the
    /// upstream cannot be reached.
    pub error_message: String,
}

impl UpstreamConfig {
    /// `timeout_secs` as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:8000".to_string(),
            path_prefix: "/api".to_string(),
            timeout_secs: 10,
            error_message: "Backend service unavailable".to_string(),
        }
    }
}

/// Static asset configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AssetConfig {
    /// Directory holding the built UI.
    pub root: String,

    /// Document served for `/`, relative to `root`.
    pub index: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            root: "dist".to_string(),
            index: "index.html".to_string(),
        }
    }
}

/// Liveness probe configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LivenessConfig {
    /// Path answered by the probe; never proxied.
    pub path: String,

    /// Identifier reported in the `service` field.
    pub service: String,
}

impl Default for LivenessConfig {
    fn default() -> Self {
        Self {
            path: "/health".to_string(),
            service: "frontend".to_string(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    pub log_level: String,

    pub log_format: LogFormat,

    /// Enable the Prometheus scrape endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
