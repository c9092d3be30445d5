//! Outbound call to the external API.
//!
//! # Responsibilities
//! - POST the payload with Basic Auth and a JSON content type
//! - Enforce connect and total timeouts
//! - Classify the result as success, rejection, or transport failure
//!
//! # Design Decisions
//! - One client per process; connection pooling is shared by all requests
//! - No retries; the first outcome is final
//! - Non-JSON bodies are relayed as JSON strings

use axum::http::StatusCode;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use std::time::Duration;

use crate::config::validation::UpstreamSettings;
use crate::config::ProxyConfig;
use crate::proxy::payload::OutboundPayload;

/// Result of one outbound call.
#[derive(Debug)]
pub enum UpstreamOutcome {
    /// 2xx response.
    Success { status: StatusCode, body: Value },
    /// Any other status the API answered with.
    Rejected { status: StatusCode, body: Value },
    /// No usable response (connect, DNS, timeout, body read, bad URL).
    Transport(reqwest::Error),
}

/// Shared HTTP client for the external API.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
}

impl UpstreamClient {
    /// Build a client with the configured timeouts and proxy policy.
    pub fn new(config: &ProxyConfig) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .timeout(Duration::from_secs(config.timeouts.upstream_secs));
        if config.upstream.no_proxy {
            builder = builder.no_proxy();
        }
        Ok(Self {
            http: builder.build()?,
        })
    }

    /// Send `payload` to the configured API and classify the result.
    pub async fn send(
        &self,
        settings: &UpstreamSettings<'_>,
        payload: &OutboundPayload,
    ) -> UpstreamOutcome {
        let response = match self
            .http
            .post(settings.api_url)
            .header(CONTENT_TYPE, "application/json")
            .basic_auth(settings.api_user, Some(settings.api_pass))
            .json(payload)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return UpstreamOutcome::Transport(e),
        };

        let status = response.status();
        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => return UpstreamOutcome::Transport(e),
        };
        let body = decode_body(&bytes);

        if status.is_success() {
            UpstreamOutcome::Success { status, body }
        } else {
            UpstreamOutcome::Rejected { status, body }
        }
    }
}

/// JSON when the body parses as JSON, otherwise the raw text as a string.
pub fn decode_body(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}
