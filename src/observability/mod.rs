//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Request handling produces:
//!     → logging.rs (structured log events, request-id on every line)
//!     → metrics.rs (counters and latency histograms)
//!
//! Consumers:
//!     → stdout (pretty for development, JSON for aggregation)
//!     → Metrics endpoint (Prometheus scrape, opt-in)
//! ```
//!
//! # Design Decisions
//! - Credentials are never logged or used as labels unmasked
//! - Metric updates are no-ops until an exporter is installed

pub mod logging;
pub mod metrics;
