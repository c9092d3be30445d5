//! Request-level failures and their HTTP rendering.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::http::response::json_response;

pub const MISSING_CONFIG_MESSAGE: &str =
    "Server configuration error: Missing API environment variables.";
pub const MISSING_DATE_MESSAGE: &str = "Missing 'date' in request body and no default is set.";
pub const MALFORMED_BODY_MESSAGE: &str = "Request body is not valid JSON.";
pub const UPSTREAM_ERROR_MESSAGE: &str = "Error from external API.";
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal server error occurred.";

/// Errors that abort a proxy request.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// One or more required API variables are unset or empty.
    #[error("missing API configuration: {}", .0.join(", "))]
    MissingConfig(Vec<&'static str>),

    /// The body claims to be JSON but does not parse as an object or array.
    #[error("malformed JSON body: {0}")]
    MalformedBody(String),

    /// Neither the request nor the configuration supplies a date.
    #[error("no date in request and no default configured")]
    MissingDate,

    /// The external API answered with a non-success status.
    #[error("external API returned {status}")]
    Upstream { status: StatusCode, body: Value },

    /// No response was obtained from the external API.
    #[error("external API unreachable: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::MissingConfig(_) | ProxyError::Transport(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ProxyError::MalformedBody(_) | ProxyError::MissingDate => StatusCode::BAD_REQUEST,
            ProxyError::Upstream { status, .. } => *status,
        }
    }

    /// Short label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ProxyError::MissingConfig(_) => "config_error",
            ProxyError::MalformedBody(_) => "malformed_body",
            ProxyError::MissingDate => "bad_request",
            ProxyError::Upstream { .. } => "upstream_error",
            ProxyError::Transport(_) => "transport_error",
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ProxyError::MissingConfig(_) => json!({ "message": MISSING_CONFIG_MESSAGE }),
            ProxyError::MalformedBody(_) => json!({ "message": MALFORMED_BODY_MESSAGE }),
            ProxyError::MissingDate => json!({ "message": MISSING_DATE_MESSAGE }),
            ProxyError::Upstream { body, .. } => json!({
                "message": UPSTREAM_ERROR_MESSAGE,
                "details": body,
            }),
            // Transport details are logged by the handler, never returned.
            ProxyError::Transport(_) => json!({ "message": INTERNAL_ERROR_MESSAGE }),
        };
        json_response(status, &body)
    }
}
