//! Inbound caller authentication.
//!
//! # Responsibilities
//! - Locate the caller credential (`x-goog-api-key`, else `Authorization: Bearer`)
//! - Compare it against the single configured shared secret
//! - Emit the pass/fail audit event
//!
//! # Design Decisions
//! - An unset or empty shared secret denies every request
//! - A missing credential is treated exactly like a wrong one
//! - Comparison runs in constant time over the secret's bytes

pub mod authenticator;

pub use authenticator::{authenticate, Authenticator, CredentialSource, API_KEY_HEADER};
