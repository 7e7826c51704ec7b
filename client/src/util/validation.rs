//! Field validation rules for the login and sign-up forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! These are pure predicates. Pages call them on blur and on submit, then
//! render the returned message next to the field; nothing here touches the
//! DOM.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::LazyLock;

use regex::Regex;

const MIN_NAME_CHARS: usize = 2;
const MIN_PASSWORD_CHARS: usize = 8;

/// `local@domain.tld` with no whitespace and a single `@`.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex"));

/// National mobile format `010-dddd-dddd`, ASCII digits only.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^010-[0-9]{4}-[0-9]{4}$").expect("Invalid regex"));

/// Characters a password may contain.
static PASSWORD_CHARSET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9@$!%*?&]+$").expect("Invalid regex"));

/// Character classes a password must each contain at least once: a letter,
/// a digit, and one of `@$!%*?&`.
static PASSWORD_CLASS_RES: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [r"[A-Za-z]", r"[0-9]", r"[@$!%*?&]"].map(|pattern| Regex::new(pattern).expect("Invalid regex"))
});

/// Fields with a validation rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind<'a> {
    Name,
    Email,
    Phone,
    Password,
    /// Confirmation field; must equal the `password` it confirms.
    PasswordConfirm { password: &'a str },
}

/// Outcome of one validation call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    /// Empty when `valid`.
    pub message: &'static str,
}

impl ValidationResult {
    #[must_use]
    pub const fn ok() -> Self {
        Self { valid: true, message: "" }
    }

    #[must_use]
    pub const fn fail(message: &'static str) -> Self {
        Self { valid: false, message }
    }

    /// The message to show, if the field is invalid.
    #[must_use]
    pub fn error(&self) -> Option<&'static str> {
        (!self.valid).then_some(self.message)
    }
}

/// Check `value` against the rule for `kind`.
#[must_use]
pub fn validate_field(kind: FieldKind<'_>, value: &str) -> ValidationResult {
    match kind {
        FieldKind::Name => validate_name(value),
        FieldKind::Email => validate_email(value),
        FieldKind::Phone => validate_phone(value),
        FieldKind::Password => validate_password(value),
        FieldKind::PasswordConfirm { password } => validate_password_confirm(password, value),
    }
}

/// Login only checks that a password was typed; strength rules apply to
/// new passwords.
#[must_use]
pub fn validate_login_password(value: &str) -> ValidationResult {
    if value.is_empty() {
        return ValidationResult::fail("Please enter your password.");
    }
    ValidationResult::ok()
}

fn validate_name(value: &str) -> ValidationResult {
    if value.trim().chars().count() < MIN_NAME_CHARS {
        return ValidationResult::fail("Name must be at least 2 characters.");
    }
    ValidationResult::ok()
}

fn validate_email(value: &str) -> ValidationResult {
    if value.is_empty() {
        return ValidationResult::fail("Please enter your email.");
    }
    if !EMAIL_RE.is_match(value) {
        return ValidationResult::fail("Please enter a valid email address.");
    }
    ValidationResult::ok()
}

fn validate_phone(value: &str) -> ValidationResult {
    if value.is_empty() {
        return ValidationResult::fail("Please enter your phone number.");
    }
    if !PHONE_RE.is_match(value) {
        return ValidationResult::fail("Please enter a valid phone number (e.g. 010-1234-5678).");
    }
    ValidationResult::ok()
}

fn validate_password(value: &str) -> ValidationResult {
    if value.is_empty() {
        return ValidationResult::fail("Please enter a password.");
    }
    if value.chars().count() < MIN_PASSWORD_CHARS {
        return ValidationResult::fail("Password must be at least 8 characters.");
    }
    if !is_strong_password(value) {
        return ValidationResult::fail("Password must mix letters, numbers, and special characters.");
    }
    ValidationResult::ok()
}

fn is_strong_password(value: &str) -> bool {
    PASSWORD_CHARSET_RE.is_match(value) && PASSWORD_CLASS_RES.iter().all(|re| re.is_match(value))
}

fn validate_password_confirm(password: &str, confirm: &str) -> ValidationResult {
    if confirm.is_empty() {
        return ValidationResult::fail("Please confirm your password.");
    }
    if password != confirm {
        return ValidationResult::fail("Passwords do not match.");
    }
    ValidationResult::ok()
}

// =============================================================================
// TERMS
// =============================================================================

/// Sign-up agreement checkboxes. Service and privacy terms are required;
/// marketing consent is optional.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TermsAcceptance {
    pub service: bool,
    pub privacy: bool,
    pub marketing: bool,
}

impl TermsAcceptance {
    /// State of the "accept all" checkbox.
    #[must_use]
    pub fn all_accepted(&self) -> bool {
        self.service && self.privacy && self.marketing
    }

    /// Apply the "accept all" checkbox to every individual box.
    pub fn set_all(&mut self, accepted: bool) {
        self.service = accepted;
        self.privacy = accepted;
        self.marketing = accepted;
    }
}

#[must_use]
pub fn validate_terms(terms: &TermsAcceptance) -> ValidationResult {
    if !terms.service || !terms.privacy {
        return ValidationResult::fail("Please accept the required terms.");
    }
    ValidationResult::ok()
}
