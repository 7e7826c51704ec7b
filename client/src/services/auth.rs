//! Login, sign-up, and logout flows.
//!
//! Every submit validates the whole form first and returns
//! `AuthError::InvalidInput` without reaching the backend when any field
//! fails. A successful login updates the session store; sign-up only
//! registers, the user logs in afterwards.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::backend::{AuthBackend, AuthError};
use crate::net::types::{SessionRecord, SignupRequest};
use crate::state::session::SessionStore;
use crate::util::storage::{KeyValueStore, StorageScope};
use crate::util::validation::{
    FieldKind, TermsAcceptance, ValidationResult, validate_field, validate_login_password, validate_terms,
};

// =============================================================================
// FORMS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    /// "Remember me": keep the session across browser restarts.
    pub remember: bool,
}

/// Per-field results for the login form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoginCheck {
    pub email: ValidationResult,
    pub password: ValidationResult,
}

impl LoginCheck {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.email.valid && self.password.valid
    }
}

#[must_use]
pub fn check_login(form: &LoginForm) -> LoginCheck {
    LoginCheck {
        email: validate_field(FieldKind::Email, &form.email),
        password: validate_login_password(&form.password),
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub password_confirm: String,
    pub terms: TermsAcceptance,
}

impl SignupForm {
    #[must_use]
    pub fn to_request(&self) -> SignupRequest {
        SignupRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            password: self.password.clone(),
        }
    }
}

/// Per-field results for the sign-up form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignupCheck {
    pub name: ValidationResult,
    pub email: ValidationResult,
    pub phone: ValidationResult,
    pub password: ValidationResult,
    pub password_confirm: ValidationResult,
    pub terms: ValidationResult,
}

impl SignupCheck {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        [self.name, self.email, self.phone, self.password, self.password_confirm, self.terms]
            .iter()
            .all(|r| r.valid)
    }
}

/// Evaluate every field so the page can show all inline errors at once.
#[must_use]
pub fn check_signup(form: &SignupForm) -> SignupCheck {
    SignupCheck {
        name: validate_field(FieldKind::Name, &form.name),
        email: validate_field(FieldKind::Email, &form.email),
        phone: validate_field(FieldKind::Phone, &form.phone),
        password: validate_field(FieldKind::Password, &form.password),
        password_confirm: validate_field(
            FieldKind::PasswordConfirm { password: &form.password },
            &form.password_confirm,
        ),
        terms: validate_terms(&form.terms),
    }
}

// =============================================================================
// FLOWS
// =============================================================================

/// Authenticate and make the returned user current.
///
/// `remember` selects the persistent storage scope, otherwise the tab scope.
///
/// # Errors
///
/// Returns the backend error (e.g. [`AuthError::InvalidCredentials`]) with
/// the store untouched, or [`AuthError::Storage`] if the record cannot be
/// written.
pub async fn login<B, S>(
    backend: &B,
    store: &mut SessionStore<S>,
    email: &str,
    password: &str,
    remember: bool,
) -> Result<SessionRecord, AuthError>
where
    B: AuthBackend + ?Sized,
    S: KeyValueStore,
{
    let user = backend.login(email, password).await?;
    store.set(user.clone(), StorageScope::for_remember(remember))?;
    log::info!("signed in {} (remember: {remember})", user.email);
    Ok(user)
}

/// Login form submit: validation, then [`login`].
///
/// # Errors
///
/// Returns [`AuthError::InvalidInput`] when a field fails validation, else
/// whatever [`login`] returns.
pub async fn submit_login<B, S>(backend: &B, store: &mut SessionStore<S>, form: &LoginForm) -> Result<SessionRecord, AuthError>
where
    B: AuthBackend + ?Sized,
    S: KeyValueStore,
{
    if !check_login(form).is_valid() {
        return Err(AuthError::InvalidInput);
    }
    login(backend, store, &form.email, &form.password, form.remember).await
}

/// Register a new account.
///
/// # Errors
///
/// Returns the backend error if registration fails.
pub async fn signup<B>(backend: &B, request: &SignupRequest) -> Result<SessionRecord, AuthError>
where
    B: AuthBackend + ?Sized,
{
    backend.signup(request).await
}

/// Sign-up form submit: validation, then [`signup`].
///
/// # Errors
///
/// Returns [`AuthError::InvalidInput`] when a field or the terms check fails,
/// else whatever [`signup`] returns.
pub async fn submit_signup<B>(backend: &B, form: &SignupForm) -> Result<SessionRecord, AuthError>
where
    B: AuthBackend + ?Sized,
{
    if !check_signup(form).is_valid() {
        return Err(AuthError::InvalidInput);
    }
    signup(backend, &form.to_request()).await
}

/// Drop the current user from memory and both storage scopes.
pub fn logout<S: KeyValueStore>(store: &mut SessionStore<S>) {
    if let Some(user) = store.current_user() {
        log::info!("signed out {}", user.email);
    }
    store.clear();
}
