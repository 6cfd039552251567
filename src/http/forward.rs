//! Upstream forwarding.
//!
//! # Responsibilities
//! - Send the rewritten request to the upstream with a pooled client
//! - Stream the request body up and the response body back without buffering
//! - Relay status and headers verbatim, upstream error statuses included
//!
//! # Design Decisions
//! - Exactly one attempt; transport failures surface as 502 (504 on timeout)
//! - Redirects are relayed to the caller, never followed
//! - Dropping the response (caller disconnect) aborts the upstream exchange

use std::time::Duration;

use axum::body::{Body, HttpBody};
use axum::http::{header, Request};
use axum::response::Response;
use reqwest::redirect::Policy;

use crate::config::{TimeoutConfig, UpstreamConfig};
use crate::error::{GatewayError, StartupError};
use crate::security::headers::strip_hop_by_hop;

/// Relays requests to the upstream over a shared connection pool.
#[derive(Debug, Clone)]
pub struct Forwarder {
    client: reqwest::Client,
}

impl Forwarder {
    pub fn new(upstream: &UpstreamConfig, timeouts: &TimeoutConfig) -> Result<Self, StartupError> {
        let mut builder = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .redirect(Policy::none());
        if !upstream.use_system_proxy {
            builder = builder.no_proxy();
        }
        if let Some(secs) = timeouts.request_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(StartupError::Client)?;
        Ok(Self { client })
    }

    /// Forward an already-rewritten request.
    pub async fn forward(&self, request: Request<Body>) -> Result<Response, GatewayError> {
        let (mut parts, body) = request.into_parts();

        strip_hop_by_hop(&mut parts.headers);
        // The client derives Host from the absolute URI set by the rewriter.
        parts.headers.remove(header::HOST);

        let mut outbound = self
            .client
            .request(parts.method, parts.uri.to_string())
            .headers(parts.headers);
        // Bodiless requests must not turn into chunked uploads.
        if !body.is_end_stream() {
            outbound = outbound.body(reqwest::Body::wrap_stream(body.into_data_stream()));
        }
        let upstream = outbound.send().await?;

        let status = upstream.status();
        let mut headers = upstream.headers().clone();
        strip_hop_by_hop(&mut headers);

        let mut response = Response::new(Body::from_stream(upstream.bytes_stream()));
        *response.status_mut() = status;
        *response.headers_mut() = headers;
        Ok(response)
    }
}
