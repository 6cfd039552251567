//! Gemini API gateway library.
//!
//! Authenticates callers against a shared secret and forwards their requests
//! to the Generative Language API with a key rotated from a pool.

pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod keys;
pub mod lifecycle;
pub mod observability;
pub mod security;

pub use config::schema::GatewayConfig;
pub use error::{GatewayError, StartupError};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
