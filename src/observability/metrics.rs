//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_requests_total` (counter): requests by method, status
//! - `gateway_request_duration_seconds` (histogram): latency until response headers
//! - `gateway_auth_total` (counter): authentication outcomes
//! - `gateway_key_selections_total` (counter): selections by masked key

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter with its own HTTP listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_request(method: &str, status: u16, start: Instant) {
    ::metrics::counter!(
        "gateway_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    ::metrics::histogram!("gateway_request_duration_seconds").record(start.elapsed().as_secs_f64());
}

pub fn record_auth(passed: bool) {
    let outcome = if passed { "pass" } else { "fail" };
    ::metrics::counter!("gateway_auth_total", "outcome" => outcome).increment(1);
}

pub fn record_key_selection(masked_key: &str) {
    ::metrics::counter!("gateway_key_selections_total", "key" => masked_key.to_string()).increment(1);
}
