//! Startup orchestration.

use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::auth::Authenticator;
use crate::config::GatewayConfig;
use crate::error::StartupError;
use crate::http::HttpServer;
use crate::keys::CredentialPool;
use crate::lifecycle::Shutdown;
use crate::observability::metrics;

/// Build the gateway, bind the listener and serve until SIGINT/SIGTERM.
pub async fn start(config: GatewayConfig) -> Result<(), StartupError> {
    warn_on_missing_credentials(&config);

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse::<SocketAddr>() {
            metrics::init_metrics(addr);
        }
    }

    let server = HttpServer::new(config)?;

    let listener = TcpListener::bind(&server.config().listener.bind_address)
        .await
        .map_err(StartupError::Bind)?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    shutdown.trigger_on_termination();

    server.run(listener, server_shutdown).await
}

// Both conditions are served (as 401 / 500) rather than refused at startup.
fn warn_on_missing_credentials(config: &GatewayConfig) {
    for warning in credential_warnings(config) {
        tracing::warn!("{}", warning);
    }

    let pool = CredentialPool::parse(config.auth.api_keys.as_deref());
    if !pool.is_empty() {
        tracing::info!(keys = pool.len(), "Upstream key pool loaded");
    }
}

fn credential_warnings(config: &GatewayConfig) -> Vec<&'static str> {
    let mut warnings = Vec::new();
    if !Authenticator::new(config.auth.shared_secret.clone()).is_configured() {
        warnings.push("SHARED_SECRET is not set; every request will be rejected with 401");
    }
    if CredentialPool::parse(config.auth.api_keys.as_deref()).is_empty() {
        warnings.push("UPSTREAM_API_KEYS is empty; authenticated requests will fail with 500");
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_secret_is_warned_like_unset() {
        let mut config = GatewayConfig::default();
        config.auth.api_keys = Some("k1".into());

        assert_eq!(credential_warnings(&config).len(), 1);
        config.auth.shared_secret = Some(String::new());
        assert_eq!(credential_warnings(&config).len(), 1);
        config.auth.shared_secret = Some("s3cret".into());
        assert!(credential_warnings(&config).is_empty());
    }

    #[test]
    fn test_empty_pool_is_warned() {
        let mut config = GatewayConfig::default();
        config.auth.shared_secret = Some("s3cret".into());
        config.auth.api_keys = Some(" , ".into());
        assert_eq!(
            credential_warnings(&config),
            vec!["UPSTREAM_API_KEYS is empty; authenticated requests will fail with 500"]
        );
    }
}
