//! User-action flows that combine validation, the auth backend, and the
//! session store.
//!
//! ARCHITECTURE
//! ============
//! Pages own signals and rendering; the flows here are plain async functions
//! over `AuthBackend` + `SessionStore` so they run unchanged in tests.

pub mod auth;
pub mod social;
