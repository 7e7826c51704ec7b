//! Session and request DTOs shared by the auth backend and browser storage.
//!
//! DESIGN
//! ======
//! `SessionRecord` keeps the exact JSON shape stored under the session key
//! (`phone` and `provider` are omitted when absent) so records written by
//! older page versions still rehydrate.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Third-party identity provider behind a social sign-in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Kakao,
    Google,
}

impl Provider {
    /// Lowercase tag used in ids and element ids (`kakao`, `google`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Kakao => "kakao",
            Self::Google => "google",
        }
    }

    /// Human-readable provider name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Kakao => "Kakao",
            Self::Google => "Google",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether a social button signs an existing user in or registers a new one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialIntent {
    Login,
    Signup,
}

impl SocialIntent {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Signup => "signup",
        }
    }
}

/// The currently authenticated (or simulated) user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<Provider>,
}

/// Validated sign-up fields handed to the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}
