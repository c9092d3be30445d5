//! Forwarding handler for `POST /api/proxy`.

use axum::{
    body::Bytes,
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap},
    response::{IntoResponse, Response},
};
use std::time::Instant;

use crate::config::validation::{missing_upstream_vars, upstream_settings};
use crate::config::UpstreamConfig;
use crate::http::request::request_id;
use crate::http::response::Passthrough;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::proxy::error::ProxyError;
use crate::proxy::payload::{resolve_date, InboundRequest, OutboundPayload};
use crate::proxy::upstream::{UpstreamClient, UpstreamOutcome};

/// Axum entry point: parse the body, forward, and render the outcome.
///
/// A malformed JSON body is rejected before the configuration check.
pub async fn proxy_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let start_time = Instant::now();
    let request_id = request_id(&headers);

    tracing::info!(request_id = %request_id, "Received proxy request");

    let content_type = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok());
    let result = match InboundRequest::from_body(content_type, &body) {
        Ok(inbound) => forward(&inbound, &state.config.upstream, &state.upstream).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(passthrough) => {
            tracing::info!(
                request_id = %request_id,
                status = %passthrough.status,
                "Successfully fetched data from external API"
            );
            metrics::record_request("success", passthrough.status.as_u16(), start_time);
            passthrough.into_response()
        }
        Err(err) => {
            match &err {
                ProxyError::MissingConfig(missing) => {
                    tracing::error!(request_id = %request_id, missing = ?missing, "Server configuration incomplete")
                }
                ProxyError::MalformedBody(reason) => {
                    tracing::warn!(request_id = %request_id, reason = %reason, "Request rejected: malformed JSON body")
                }
                ProxyError::MissingDate => {
                    tracing::warn!(request_id = %request_id, "Request rejected: no date available")
                }
                ProxyError::Upstream { status, .. } => {
                    tracing::warn!(request_id = %request_id, status = %status, "External API returned an error")
                }
                ProxyError::Transport(e) => {
                    tracing::error!(
                        request_id = %request_id,
                        error = %e,
                        timeout = e.is_timeout(),
                        "Error calling the external API"
                    )
                }
            }
            metrics::record_request(err.kind(), err.status().as_u16(), start_time);
            err.into_response()
        }
    }
}

/// Validate, build the outbound payload, call the API, and classify the result.
///
/// Returns before any network I/O when the configuration is incomplete or
/// no date can be resolved.
pub async fn forward(
    inbound: &InboundRequest,
    upstream: &UpstreamConfig,
    client: &UpstreamClient,
) -> Result<Passthrough, ProxyError> {
    let settings = upstream_settings(upstream)
        .ok_or_else(|| ProxyError::MissingConfig(missing_upstream_vars(upstream)))?;

    let date = resolve_date(inbound.date.as_deref(), upstream.default_date.as_deref())
        .ok_or(ProxyError::MissingDate)?;

    let payload = OutboundPayload::new(date, settings.api_username_field);
    tracing::debug!(
        date = %payload.date,
        user_name = %payload.user_name,
        "Calling external API"
    );

    let call_start = Instant::now();
    let outcome = client.send(&settings, &payload).await;
    metrics::record_upstream_duration(call_start);

    match outcome {
        UpstreamOutcome::Success { status, body } => Ok(Passthrough { status, body }),
        UpstreamOutcome::Rejected { status, body } => Err(ProxyError::Upstream { status, body }),
        UpstreamOutcome::Transport(e) => Err(ProxyError::Transport(e)),
    }
}
