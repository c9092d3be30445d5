//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handlers and server produce:
//!     → logging.rs (structured log events, request ID on every span)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout (pretty or JSON)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```

pub mod logging;
pub mod metrics;
