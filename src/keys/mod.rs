//! Upstream credential management.
//!
//! # Data Flow
//! ```text
//! UPSTREAM_API_KEYS ("k1, k2,,k3")
//!     → pool.rs (split, trim, drop empties)
//!     → CredentialPool (immutable, shared via Arc)
//!     → selector.rs (pick one index per request)
//!     → credential placed on the outbound request
//! ```
//!
//! # Design Decisions
//! - The pool is parsed once at startup; an empty pool is a valid state that
//!   fails each request individually instead of the whole process
//! - Selection is stateless for the random policy, so no locking is needed
//! - The selection policy is a trait so tests can drive it deterministically

pub mod pool;
pub mod selector;

pub use pool::CredentialPool;
pub use selector::{KeySelector, RandomSelector, RoundRobinSelector};
