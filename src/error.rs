//! Error taxonomy.
//!
//! `GatewayError` is terminal for the request that produced it and never for
//! the process; conversion to an HTTP response lives in `http::response`.
//! `StartupError` is fatal and only produced before the listener accepts.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    /// Supplied credential missing, wrong, or no shared secret configured.
    #[error("authentication failed")]
    Unauthorized,

    /// No usable upstream credentials.
    #[error("upstream key pool is empty")]
    KeyPoolEmpty,

    /// The selected key cannot be encoded as a header value.
    #[error("selected upstream key is not a valid header value")]
    KeyInvalid,

    /// The request could not be retargeted at the upstream.
    #[error("failed to rewrite request: {0}")]
    Rewrite(String),

    /// Connection or protocol failure talking to the upstream.
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid upstream url {0}")]
    InvalidUpstream(String),

    #[error("failed to build upstream client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("failed to bind listener: {0}")]
    Bind(#[source] std::io::Error),

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
