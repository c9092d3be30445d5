//! API proxy
//!
//! Accepts `POST /api/proxy`, builds a fixed-shape schedule request, and
//! forwards it to one external API with HTTP Basic Authentication.
//!
//! ```text
//!   Client ──POST /api/proxy──▶ ┌──────────────────────────┐ ──POST + Basic──▶ External
//!                               │ config check → date → fwd │                   API
//!   Client ◀──status + JSON──── └──────────────────────────┘ ◀──status + JSON──
//! ```

use tokio::net::TcpListener;

use api_proxy::config::{self, validation};
use api_proxy::http::HttpServer;
use api_proxy::lifecycle::{forward_termination, Shutdown};
use api_proxy::observability::{logging, metrics};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load_config()?;

    logging::init_logging(config.observability.log_format);

    tracing::info!("api-proxy v{} starting", env!("CARGO_PKG_VERSION"));

    let missing = validation::missing_upstream_vars(&config.upstream);
    if !missing.is_empty() {
        tracing::warn!(
            missing = ?missing,
            "API environment variables missing; requests will fail until they are set"
        );
    }
    if let Some(error) = validation::invalid_api_url(&config.upstream) {
        tracing::warn!(error = %error, "API_URL is not a valid absolute URL");
    }

    tracing::info!(
        bind_address = %config.listener.bind_address(),
        upstream_timeout_secs = config.timeouts.upstream_secs,
        default_date = config.upstream.default_date.as_deref().unwrap_or("<none>"),
        "Configuration loaded"
    );

    if let Some(addr) = &config.observability.metrics_address {
        match addr.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %addr,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(config.listener.bind_address()).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for POST requests on /api/proxy"
    );

    let shutdown = Shutdown::new();
    tokio::spawn(forward_termination(shutdown.clone()));

    let server = HttpServer::new(config)?;
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
