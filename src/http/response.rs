//! Response construction.
//!
//! # Responsibilities
//! - Render JSON bodies with an explicit status code
//! - Relay a successful external response unchanged
//!
//! # Design Decisions
//! - Bodies are always JSON (`application/json`), including relayed text
//! - Error envelopes live with the error type (`proxy::error`)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

/// External API response relayed verbatim to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Passthrough {
    pub status: StatusCode,
    pub body: Value,
}

impl IntoResponse for Passthrough {
    fn into_response(self) -> Response {
        json_response(self.status, &self.body)
    }
}

/// JSON response with the given status.
pub fn json_response(status: StatusCode, body: &Value) -> Response {
    (status, Json(body)).into_response()
}
