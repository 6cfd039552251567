//! Security subsystem.
//!
//! # Responsibilities
//! - Keep connection-scoped headers from crossing the gateway
//!
//! Caller authentication lives in `auth`.

pub mod headers;
