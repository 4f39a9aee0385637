//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the router
//! process. All types derive Serde traits for deserialization from TOML.

use serde::{Deserialize, Serialize};

use crate::routing::{MatchMode, RouteOrder, RouterOptions};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct CanalConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Matching and dispatch policy.
    pub routing: RoutingConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:9876").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:9876".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Maximum time to produce a response, in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Routing policy.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// `unanchored` (substring) or `anchored` (whole path).
    pub match_mode: MatchMode,

    /// `descending_source` or `priority`.
    pub order: RouteOrder,

    /// Send handler error messages to clients in 500 responses.
    pub expose_error_detail: bool,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        let options = RouterOptions::default();
        Self {
            match_mode: options.match_mode,
            order: options.order,
            expose_error_detail: options.expose_error_detail,
        }
    }
}

impl From<&RoutingConfig> for RouterOptions {
    fn from(config: &RoutingConfig) -> Self {
        Self {
            match_mode: config.match_mode,
            order: config.order,
            expose_error_detail: config.expose_error_detail,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Write logs to this file instead of stdout.
    pub log_path: Option<String>,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_path: None,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
