//! Shared-secret authenticator.

use axum::http::{header, HeaderMap};
use subtle::ConstantTimeEq;

use crate::error::GatewayError;
use crate::observability::metrics;

/// Header carrying the API key on native Gemini requests.
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// Which inbound header carried the caller credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    ApiKeyHeader,
    Bearer,
    Missing,
}

impl CredentialSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialSource::ApiKeyHeader => "x-goog-api-key",
            CredentialSource::Bearer => "authorization",
            CredentialSource::Missing => "none",
        }
    }
}

/// Find the credential the caller supplied.
///
/// A non-empty `x-goog-api-key` wins; `Authorization: Bearer` is the
/// fallback used by OpenAI-compatible clients. A missing credential yields
/// an empty value.
pub fn extract_credential(headers: &HeaderMap) -> (&[u8], CredentialSource) {
    if let Some(value) = headers.get(API_KEY_HEADER).filter(|v| !v.is_empty()) {
        return (value.as_bytes(), CredentialSource::ApiKeyHeader);
    }

    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.as_bytes().strip_prefix(b"Bearer "));
    match bearer {
        Some(token) => (token, CredentialSource::Bearer),
        None => (&[], CredentialSource::Missing),
    }
}

/// Returns true iff `supplied` equals a configured, non-empty `expected`.
pub fn authenticate(supplied: &[u8], expected: Option<&[u8]>) -> bool {
    let Some(expected) = expected.filter(|e| !e.is_empty()) else {
        return false;
    };
    if supplied.len() != expected.len() {
        return false;
    }
    supplied.ct_eq(expected).into()
}

/// Authenticator bound to the configured shared secret.
#[derive(Clone)]
pub struct Authenticator {
    expected: Option<String>,
}

impl Authenticator {
    pub fn new(expected: Option<String>) -> Self {
        Self { expected }
    }

    pub fn is_configured(&self) -> bool {
        self.expected.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// Check the request headers, returning where the credential was found.
    pub fn check(&self, headers: &HeaderMap, request_id: &str) -> Result<CredentialSource, GatewayError> {
        let (supplied, source) = extract_credential(headers);

        if !self.is_configured() {
            tracing::warn!(
                request_id = %request_id,
                "Authentication failed: shared secret is not configured"
            );
            metrics::record_auth(false);
            return Err(GatewayError::Unauthorized);
        }

        if authenticate(supplied, self.expected.as_deref().map(str::as_bytes)) {
            tracing::info!(request_id = %request_id, source = source.as_str(), "Authentication passed");
            metrics::record_auth(true);
            Ok(source)
        } else {
            tracing::warn!(request_id = %request_id, source = source.as_str(), "Authentication failed");
            metrics::record_auth(false);
            Err(GatewayError::Unauthorized)
        }
    }
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("configured", &self.is_configured())
            .finish()
    }
}
