//! Gateway error responses.
//!
//! Maps each `GatewayError` to the plain-text response the caller sees.
//! Successful upstream responses never pass through here; they are relayed
//! verbatim by the forwarder.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::GatewayError;

pub const UNAUTHORIZED_BODY: &str = "Unauthorized: Invalid API Key";
pub const KEY_CONFIG_BODY: &str = "Internal Server Error: API Key configuration error";
pub const INTERNAL_BODY: &str = "Internal Server Error";
pub const BAD_GATEWAY_BODY: &str = "Bad Gateway: upstream request failed";
pub const GATEWAY_TIMEOUT_BODY: &str = "Gateway Timeout: upstream did not respond in time";

impl GatewayError {
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::Unauthorized => StatusCode::UNAUTHORIZED,
            GatewayError::KeyPoolEmpty | GatewayError::KeyInvalid | GatewayError::Rewrite(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            GatewayError::Upstream(e) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            GatewayError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn body(&self) -> &'static str {
        match self {
            GatewayError::Unauthorized => UNAUTHORIZED_BODY,
            GatewayError::KeyPoolEmpty | GatewayError::KeyInvalid => KEY_CONFIG_BODY,
            GatewayError::Rewrite(_) => INTERNAL_BODY,
            GatewayError::Upstream(e) if e.is_timeout() => GATEWAY_TIMEOUT_BODY,
            GatewayError::Upstream(_) => BAD_GATEWAY_BODY,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        (self.status(), self.body()).into_response()
    }
}
