//! Gemini API gateway.
//!
//! ```text
//!     Client ──▶ auth (shared secret) ──▶ keys (pick upstream key)
//!                                              │
//!                                              ▼
//!     Client ◀── forward (stream back) ◀── rewrite (host, scheme, key) ──▶ Upstream
//! ```
//!
//! Configuration comes from the environment (`SHARED_SECRET`,
//! `UPSTREAM_API_KEYS`, ...) and an optional TOML file named by
//! `GATEWAY_CONFIG`.

use gemini_gateway::config::load_config;
use gemini_gateway::lifecycle::startup;
use gemini_gateway::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(|key| std::env::var(key).ok())?;

    logging::init(config.observability.log_format);

    tracing::info!("gemini-gateway v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        selection = ?config.upstream.selection,
        "Configuration loaded"
    );

    startup::start(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
