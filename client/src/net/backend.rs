//! Auth backend boundary: login, sign-up and social sign-in requests.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no auth server behind the site yet. `DemoBackend` answers every
//! request locally after a simulated network delay, and the root component
//! provides it as [`SiteBackend`]. Flows in `services` only see the
//! [`AuthBackend`] trait, so a real HTTP client can replace the demo without
//! touching pages.
//!
//! TRADE-OFFS
//! ==========
//! Latency is injected through [`Latency`] so tests drive the same code path
//! without timers (`NoLatency`).

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use async_trait::async_trait;

use super::providers::ProviderError;
use super::types::{Provider, SessionRecord, SignupRequest, SocialIntent};
use crate::consts::{DEMO_EMAIL, DEMO_PASSWORD, LATENCY_JITTER_MS, LATENCY_MIN_MS};
use crate::util::clock::{sleep_ms, unique_millis};
use crate::util::storage::StorageError;

// =============================================================================
// ERROR TYPE
// =============================================================================

/// Failure of one user-initiated auth action. `Display` is the toast text.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Please check your input.")]
    InvalidInput,
    #[error("Incorrect email or password.")]
    InvalidCredentials,
    #[error("Something went wrong while signing up.")]
    SignupFailed,
    #[error("{0}")]
    Provider(#[from] ProviderError),
    #[error("Could not save your session.")]
    Storage(#[from] StorageError),
}

// =============================================================================
// LATENCY
// =============================================================================

/// Stand-in for network round-trip time.
#[async_trait(?Send)]
pub trait Latency {
    async fn wait(&self);
}

/// Resolves immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoLatency;

#[async_trait(?Send)]
impl Latency for NoLatency {
    async fn wait(&self) {}
}

/// Randomized browser-timer delay of `min_ms..min_ms + jitter_ms`.
#[derive(Clone, Copy, Debug)]
pub struct TimerLatency {
    pub min_ms: u32,
    pub jitter_ms: u32,
}

impl Default for TimerLatency {
    fn default() -> Self {
        Self {
            min_ms: LATENCY_MIN_MS,
            jitter_ms: LATENCY_JITTER_MS,
        }
    }
}

impl TimerLatency {
    /// Delay for a uniform sample `unit` in `[0, 1)`.
    #[must_use]
    pub fn delay_ms(&self, unit: f64) -> u32 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let jitter = (unit.clamp(0.0, 1.0) * f64::from(self.jitter_ms)).floor() as u32;
        self.min_ms + jitter.min(self.jitter_ms)
    }
}

#[async_trait(?Send)]
impl Latency for TimerLatency {
    async fn wait(&self) {
        #[cfg(feature = "hydrate")]
        let unit = js_sys::Math::random();
        #[cfg(not(feature = "hydrate"))]
        let unit = 0.0;
        sleep_ms(self.delay_ms(unit)).await;
    }
}

// =============================================================================
// BACKEND
// =============================================================================

/// Requests the site makes to an auth service.
#[async_trait(?Send)]
pub trait AuthBackend {
    /// Check a credential pair and return the matching user.
    async fn login(&self, email: &str, password: &str) -> Result<SessionRecord, AuthError>;

    /// Register a new account. Registration does not sign the user in.
    async fn signup(&self, request: &SignupRequest) -> Result<SessionRecord, AuthError>;

    /// Sign in or register through a third-party provider.
    async fn social(&self, provider: Provider, intent: SocialIntent) -> Result<SessionRecord, AuthError>;
}

/// Local-only backend: one fixed credential pair, sign-ups always succeed,
/// social sign-ins fabricate a provider-tagged user.
#[derive(Clone, Copy, Debug, Default)]
pub struct DemoBackend<L = TimerLatency> {
    latency: L,
}

/// Backend wired into the running site.
pub type SiteBackend = DemoBackend<TimerLatency>;

impl<L> DemoBackend<L> {
    pub fn new(latency: L) -> Self {
        Self { latency }
    }
}

/// The fixed user returned for the demo credential pair.
#[must_use]
pub fn demo_user() -> SessionRecord {
    SessionRecord {
        id: "1".to_owned(),
        name: "Test User".to_owned(),
        email: DEMO_EMAIL.to_owned(),
        phone: Some("010-1234-5678".to_owned()),
        provider: None,
    }
}

/// Fabricated provider user. Login ids are fixed per provider; sign-up ids
/// carry a fresh timestamp.
#[must_use]
pub fn social_user(provider: Provider, intent: SocialIntent) -> SessionRecord {
    let tag = provider.as_str();
    let label = provider.label();
    match intent {
        SocialIntent::Login => SessionRecord {
            id: format!("{tag}_123456"),
            name: format!("{label} User"),
            email: format!("{tag}@example.com"),
            phone: Some("010-1234-5678".to_owned()),
            provider: Some(provider),
        },
        SocialIntent::Signup => SessionRecord {
            id: format!("{tag}_{}", unique_millis()),
            name: format!("New {label} User"),
            email: format!("new_{tag}@example.com"),
            phone: Some("010-9876-5432".to_owned()),
            provider: Some(provider),
        },
    }
}

#[async_trait(?Send)]
impl<L: Latency> AuthBackend for DemoBackend<L> {
    async fn login(&self, email: &str, password: &str) -> Result<SessionRecord, AuthError> {
        self.latency.wait().await;
        if email == DEMO_EMAIL && password == DEMO_PASSWORD {
            return Ok(demo_user());
        }
        Err(AuthError::InvalidCredentials)
    }

    async fn signup(&self, request: &SignupRequest) -> Result<SessionRecord, AuthError> {
        self.latency.wait().await;
        let user = SessionRecord {
            id: unique_millis().to_string(),
            name: request.name.trim().to_owned(),
            email: request.email.clone(),
            phone: Some(request.phone.clone()),
            provider: None,
        };
        log::info!("registered new user {} <{}>", user.id, user.email);
        Ok(user)
    }

    async fn social(&self, provider: Provider, intent: SocialIntent) -> Result<SessionRecord, AuthError> {
        self.latency.wait().await;
        Ok(social_user(provider, intent))
    }
}
