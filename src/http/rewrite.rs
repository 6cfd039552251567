//! Request rewriting.
//!
//! # Responsibilities
//! - Point the request URI and Host header at the upstream origin
//! - Replace the caller credential with the selected upstream key
//!
//! # Design Decisions
//! - Method, path, query, body and every other header are left untouched
//! - Native requests carry the key in `x-goog-api-key`; paths containing
//!   `/openai/` carry it as `Authorization: Bearer`
//! - Native requests never carry `Authorization` upstream and OpenAI-compatible
//!   requests never carry `x-goog-api-key`, so a caller credential sent in
//!   either header never reaches the upstream

use axum::body::Body;
use axum::http::uri::{Authority, PathAndQuery, Scheme};
use axum::http::{header, HeaderValue, Request, Uri};
use url::Url;

use crate::auth::API_KEY_HEADER;
use crate::error::{GatewayError, StartupError};

/// Fixed origin every request is forwarded to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamTarget {
    pub scheme: Scheme,
    pub authority: Authority,
}

impl UpstreamTarget {
    /// Parse an absolute http(s) URL. Any path or query is ignored.
    pub fn parse(raw: &str) -> Result<Self, StartupError> {
        let invalid = |reason: String| StartupError::InvalidUpstream(format!("{}: {}", raw, reason));

        let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
        let scheme = match url.scheme() {
            "http" => Scheme::HTTP,
            "https" => Scheme::HTTPS,
            other => return Err(invalid(format!("unsupported scheme '{}'", other))),
        };
        let host = url.host_str().ok_or_else(|| invalid("missing host".into()))?;
        let authority = match url.port() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        };
        let authority = authority
            .parse::<Authority>()
            .map_err(|e| invalid(e.to_string()))?;

        Ok(Self { scheme, authority })
    }
}

/// Where the upstream expects its credential for this request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialPlacement {
    ApiKeyHeader,
    Bearer,
}

impl CredentialPlacement {
    pub fn for_path(path: &str) -> Self {
        if path.contains("/openai/") {
            CredentialPlacement::Bearer
        } else {
            CredentialPlacement::ApiKeyHeader
        }
    }
}

/// Retarget `request` at `target`, carrying `credential` upstream.
pub fn rewrite(
    request: Request<Body>,
    target: &UpstreamTarget,
    credential: &str,
) -> Result<Request<Body>, GatewayError> {
    let (mut parts, body) = request.into_parts();

    let mut uri_parts = parts.uri.into_parts();
    uri_parts.scheme = Some(target.scheme.clone());
    uri_parts.authority = Some(target.authority.clone());
    if uri_parts.path_and_query.is_none() {
        uri_parts.path_and_query = Some(PathAndQuery::from_static("/"));
    }
    parts.uri = Uri::from_parts(uri_parts).map_err(|e| GatewayError::Rewrite(e.to_string()))?;

    let host = HeaderValue::from_str(target.authority.as_str())
        .map_err(|e| GatewayError::Rewrite(e.to_string()))?;
    parts.headers.insert(header::HOST, host);

    let placement = CredentialPlacement::for_path(parts.uri.path());
    match placement {
        CredentialPlacement::ApiKeyHeader => {
            let value = HeaderValue::from_str(credential).map_err(|_| GatewayError::KeyInvalid)?;
            parts.headers.insert(API_KEY_HEADER, value);
            parts.headers.remove(header::AUTHORIZATION);
        }
        CredentialPlacement::Bearer => {
            let value = HeaderValue::from_str(&format!("Bearer {}", credential))
                .map_err(|_| GatewayError::KeyInvalid)?;
            parts.headers.insert(header::AUTHORIZATION, value);
            parts.headers.remove(API_KEY_HEADER);
        }
    }

    Ok(Request::from_parts(parts, body))
}
