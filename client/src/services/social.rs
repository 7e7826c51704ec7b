//! Social sign-in flow for the Kakao and Google buttons.
//!
//! A social sign-in always lands in the tab storage scope; there is no
//! "remember me" for provider logins.

#[cfg(test)]
#[path = "social_test.rs"]
mod social_test;

use crate::net::backend::{AuthBackend, AuthError};
use crate::net::types::{Provider, SessionRecord, SocialIntent};
use crate::state::session::SessionStore;
use crate::util::storage::{KeyValueStore, StorageScope};

/// Sign in (or register) through `provider` and make the user current.
///
/// # Errors
///
/// Returns the backend error with the store untouched, or
/// [`AuthError::Storage`] if the record cannot be written.
pub async fn social_sign_in<B, S>(
    backend: &B,
    store: &mut SessionStore<S>,
    provider: Provider,
    intent: SocialIntent,
) -> Result<SessionRecord, AuthError>
where
    B: AuthBackend + ?Sized,
    S: KeyValueStore,
{
    let user = backend.social(provider, intent).await?;
    store.set(user.clone(), StorageScope::Tab)?;
    log::info!("{} {} as {}", provider.as_str(), intent.as_str(), user.id);
    Ok(user)
}

/// Element id of a social button, e.g. `kakao-login-btn`.
#[must_use]
pub fn button_id(provider: Provider, intent: SocialIntent) -> String {
    format!("{}-{}-btn", provider.as_str(), intent.as_str())
}

/// Button caption.
#[must_use]
pub fn button_label(provider: Provider, intent: SocialIntent) -> String {
    match intent {
        SocialIntent::Login => format!("Continue with {provider}"),
        SocialIntent::Signup => format!("Sign up with {provider}"),
    }
}

#[must_use]
pub fn success_message(provider: Provider, intent: SocialIntent) -> String {
    match intent {
        SocialIntent::Login => format!("Signed in with {provider}!"),
        SocialIntent::Signup => format!("Signed up with {provider}!"),
    }
}

#[must_use]
pub fn failure_message(provider: Provider, intent: SocialIntent) -> String {
    match intent {
        SocialIntent::Login => format!("{provider} sign-in failed."),
        SocialIntent::Signup => format!("{provider} sign-up failed."),
    }
}
