//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, handler)
//!     → request.rs (request ID)
//!     → auth + keys (authenticate, select upstream key)
//!     → rewrite.rs (retarget URI, Host and credential)
//!     → forward.rs (send upstream, stream response back)
//!     → response.rs (error mapping when any step fails)
//! ```

pub mod forward;
pub mod request;
pub mod response;
pub mod rewrite;
pub mod server;

pub use request::{RequestIdExt, X_REQUEST_ID};
pub use rewrite::{rewrite, UpstreamTarget};
pub use server::{Gateway, HttpServer};
