//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the proxy.
//! Every field maps to one environment variable; see `loader.rs`.

use serde::{Deserialize, Serialize};

/// Root configuration for the proxy.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProxyConfig {
    /// Listener configuration (host, port).
    pub listener: ListenerConfig,

    /// External API the proxy forwards to.
    pub upstream: UpstreamConfig,

    /// Timeout configuration for the outbound call.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Interface to bind (`HOST`).
    pub host: String,

    /// Port to bind (`PORT`).
    pub port: u16,
}

impl ListenerConfig {
    /// `host:port` string suitable for `TcpListener::bind`.
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

/// External API settings.
///
/// The four credentials are optional at load time. A process with an
/// incomplete upstream config still starts; each request is rejected
/// until the values are supplied.
#[derive(Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Target URL for the outbound POST (`API_URL`).
    pub api_url: Option<String>,

    /// Basic Auth username (`API_BASIC_AUTH_USER`).
    pub api_user: Option<String>,

    /// Basic Auth password (`API_BASIC_AUTH_PASS`).
    pub api_pass: Option<String>,

    /// Value sent as `UserName` in the outbound payload (`API_USERNAME_FIELD`).
    pub api_username_field: Option<String>,

    /// Date used when the caller does not send one (`API_DEFAULT_DATE`).
    pub default_date: Option<String>,

    /// Ignore `HTTP_PROXY`/`HTTPS_PROXY` for the outbound call (`API_NO_PROXY`).
    pub no_proxy: bool,
}

// Credentials stay out of logs.
impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("api_url", &self.api_url)
            .field("api_user", &self.api_user.as_ref().map(|_| "<redacted>"))
            .field("api_pass", &self.api_pass.as_ref().map(|_| "<redacted>"))
            .field("api_username_field", &self.api_username_field)
            .field("default_date", &self.default_date)
            .field("no_proxy", &self.no_proxy)
            .finish()
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Connection establishment timeout to the external API.
    pub connect_secs: u64,

    /// Total time allowed for the outbound call, body included.
    pub upstream_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_secs: 5,
            upstream_secs: 30,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value; anything other than `json` is pretty.
    pub fn from_env_value(s: &str) -> Self {
        if s.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Pretty
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log output format.
    pub log_format: LogFormat,

    /// Prometheus exporter bind address; `None` disables the exporter.
    pub metrics_address: Option<String>,
}
