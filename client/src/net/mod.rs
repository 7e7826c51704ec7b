//! Networking boundary for authentication.
//!
//! SYSTEM CONTEXT
//! ==============
//! `backend` defines the auth requests and the local demo implementation,
//! `providers` wraps third-party identity SDKs, and `types` holds the session
//! and request DTOs shared with storage.

pub mod backend;
pub mod providers;
pub mod types;
