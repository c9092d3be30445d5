//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, graceful shutdown)
//!     → request.rs (request ID assigned or kept)
//!     → proxy::handler (forwarding)
//!     → response.rs (JSON rendering, passthrough)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use response::Passthrough;
pub use server::{AppState, HttpServer, PROXY_PATH};
