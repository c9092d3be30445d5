//! Request translation and forwarding.
//!
//! # Data Flow
//! ```text
//! POST /api/proxy { "date"?: string }
//!     → payload.rs  (lenient parse, date resolution, fixed-shape body)
//!     → handler.rs  (config check → date check → forward)
//!     → upstream.rs (POST + Basic Auth → UpstreamOutcome)
//!     → error.rs / http::response (outcome → status + JSON body)
//! ```
//!
//! # Design Decisions
//! - No state between requests; config and client are shared read-only
//! - Both validation failures return before any network I/O
//! - Upstream failures are a value (`UpstreamOutcome`), not a control-flow branch

pub mod error;
pub mod handler;
pub mod payload;
pub mod upstream;

pub use error::ProxyError;
pub use handler::{forward, proxy_handler};
pub use payload::{InboundRequest, OutboundPayload};
pub use upstream::{UpstreamClient, UpstreamOutcome};
