//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional TOML file (GATEWAY_CONFIG)
//!     → loader.rs (parse & deserialize)
//!     → environment overlay (SHARED_SECRET, UPSTREAM_API_KEYS, ...)
//!     → validation.rs (semantic checks)
//!     → GatewayConfig (validated, immutable)
//!     → shared via Arc with every request handler
//! ```
//!
//! # Design Decisions
//! - Config is loaded once at startup and never mutated afterwards
//! - All fields have defaults so the gateway runs from environment alone
//! - Missing credentials are a per-request failure, not a startup failure

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::GatewayConfig;
pub use schema::{AuthConfig, ListenerConfig, ObservabilityConfig, SelectionStrategy, TimeoutConfig, UpstreamConfig};
