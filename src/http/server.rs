//! HTTP server setup and the request-handling path.
//!
//! # Responsibilities
//! - Create the Axum Router with a single catch-all handler
//! - Wire up middleware (request ID, tracing, body limit)
//! - Authenticate, select a key, rewrite, and forward each request
//! - Serve until the shutdown signal fires
//!
//! # Request States
//! ```text
//! Received → Authenticating ─fail─▶ Rejected (401)
//!                 │
//!                 ▼
//!           KeySelecting ─empty─▶ KeyPoolError (500)
//!                 │
//!                 ▼
//!            Rewriting → Forwarding → Completed (upstream status)
//! ```

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::{header, Request},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::auth::Authenticator;
use crate::config::GatewayConfig;
use crate::error::{GatewayError, StartupError};
use crate::http::forward::Forwarder;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer, RequestIdExt};
use crate::http::rewrite::{rewrite, UpstreamTarget};
use crate::keys::pool::mask;
use crate::keys::selector::{self, KeySelector};
use crate::keys::CredentialPool;
use crate::observability::metrics;

/// Read-only state shared by every in-flight request.
#[derive(Debug)]
pub struct Gateway {
    pub authenticator: Authenticator,
    pub pool: CredentialPool,
    pub selector: Box<dyn KeySelector>,
    pub target: UpstreamTarget,
    pub forwarder: Forwarder,
}

impl Gateway {
    pub fn from_config(config: &GatewayConfig) -> Result<Self, StartupError> {
        Ok(Self {
            authenticator: Authenticator::new(config.auth.shared_secret.clone()),
            pool: CredentialPool::parse(config.auth.api_keys.as_deref()),
            selector: selector::from_strategy(config.upstream.selection),
            target: UpstreamTarget::parse(&config.upstream.base_url)?,
            forwarder: Forwarder::new(&config.upstream, &config.timeouts)?,
        })
    }

    /// Swap the selection policy, e.g. for deterministic tests.
    pub fn with_selector(mut self, selector: Box<dyn KeySelector>) -> Self {
        self.selector = selector;
        self
    }

    /// Run one request through authentication, key selection, rewrite and forward.
    pub async fn handle(&self, request: Request<Body>, request_id: &str) -> Result<Response, GatewayError> {
        self.authenticator.check(request.headers(), request_id)?;

        let key = self.selector.select(&self.pool).inspect_err(|e| {
            tracing::error!(request_id = %request_id, error = %e, "Failed to get API key");
        })?;
        let masked = mask(key);
        tracing::debug!(request_id = %request_id, key = %masked, "Selected upstream key");
        metrics::record_key_selection(&masked);

        let outbound = rewrite(request, &self.target, key)?;
        tracing::debug!(request_id = %request_id, target = %outbound.uri(), "Forwarding request");

        self.forwarder.forward(outbound).await.inspect_err(|e| {
            tracing::error!(request_id = %request_id, error = %e, "Upstream error");
        })
    }
}

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: GatewayConfig) -> Result<Self, StartupError> {
        let gateway = Gateway::from_config(&config)?;
        Ok(Self::with_gateway(config, gateway))
    }

    /// Create a server around an already-built gateway.
    pub fn with_gateway(config: GatewayConfig, gateway: Gateway) -> Self {
        let router = Self::build_router(&config, Arc::new(gateway));
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &GatewayConfig, gateway: Arc<Gateway>) -> Router {
        Router::new()
            .route("/", any(gateway_handler))
            .route("/{*path}", any(gateway_handler))
            .with_state(gateway)
            .layer(RequestBodyLimitLayer::new(config.listener.max_body_bytes))
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http())
            .layer(set_request_id_layer())
    }

    /// The router, for driving the gateway without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), StartupError> {
        let addr = listener.local_addr().map_err(StartupError::Serve)?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.base_url,
            "HTTP server starting"
        );

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await
            .map_err(StartupError::Serve)?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

async fn gateway_handler(State(gateway): State<Arc<Gateway>>, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let request_id = request.request_id();
    let method = request.method().to_string();

    let remote = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "unknown".to_string());
    let user_agent = request
        .headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    let host = request
        .headers()
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        uri = %request.uri(),
        host = %host,
        remote = %remote,
        user_agent = %user_agent,
        "Received request"
    );

    let response = match gateway.handle(request, &request_id).await {
        Ok(response) => response,
        Err(e) => e.into_response(),
    };

    metrics::record_request(&method, response.status().as_u16(), start_time);
    response
}
