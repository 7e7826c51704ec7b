use super::*;

fn invalid(kind: FieldKind<'_>, value: &str) -> bool {
    !validate_field(kind, value).valid
}

// =============================================================
// Name
// =============================================================

#[test]
fn name_needs_two_trimmed_chars() {
    assert!(invalid(FieldKind::Name, ""));
    assert!(invalid(FieldKind::Name, " a "));
    assert!(validate_field(FieldKind::Name, "Jo").valid);
    assert!(validate_field(FieldKind::Name, "  김하늘 ").valid);
}

// =============================================================
// Email
// =============================================================

#[test]
fn email_accepts_basic_addresses() {
    for value in ["test@neurucare.com", "a@b.co", "first.last@mail.example.kr"] {
        assert!(validate_field(FieldKind::Email, value).valid, "{value:?} should pass");
    }
}

#[test]
fn email_rejects_malformed_addresses() {
    for value in ["user", "@example.com", "user@", "user@example", "user@.com", "user@com.", "a b@c.de", "a@b@c.de"] {
        assert!(invalid(FieldKind::Email, value), "{value:?} should fail");
    }
}

#[test]
fn email_rejects_any_unicode_whitespace() {
    assert!(invalid(FieldKind::Email, "a\u{3000}b@c.de"));
    assert!(invalid(FieldKind::Email, "ab@c.de\t"));
}

#[test]
fn email_empty_and_malformed_have_distinct_messages() {
    let empty = validate_field(FieldKind::Email, "");
    let malformed = validate_field(FieldKind::Email, "nope");
    assert_eq!(empty.error(), Some("Please enter your email."));
    assert_eq!(malformed.error(), Some("Please enter a valid email address."));
}

// =============================================================
// Phone
// =============================================================

#[test]
fn phone_accepts_national_mobile_format() {
    assert!(validate_field(FieldKind::Phone, "010-1234-5678").valid);
}

#[test]
fn phone_rejects_other_shapes() {
    for value in [
        "",
        "01012345678",
        "011-1234-5678",
        "010-123-5678",
        "010-1234-567",
        "010-1234-56789",
        "010-12a4-5678",
        "010-1234-5678-",
        " 010-1234-5678",
        "010-１２３４-5678",
    ] {
        assert!(invalid(FieldKind::Phone, value), "{value:?} should fail");
    }
}

// =============================================================
// Password
// =============================================================

#[test]
fn password_accepts_letter_digit_special_mix() {
    assert!(validate_field(FieldKind::Password, "abcd123!").valid);
    assert!(validate_field(FieldKind::Password, "Secure&Pass9").valid);
}

#[test]
fn password_shorter_than_eight_is_invalid() {
    let result = validate_field(FieldKind::Password, "ab1!");
    assert_eq!(result.error(), Some("Password must be at least 8 characters."));
}

#[test]
fn password_missing_a_class_is_invalid() {
    assert!(invalid(FieldKind::Password, "abcdefg!"), "no digit");
    assert!(invalid(FieldKind::Password, "1234567!"), "no letter");
    assert!(invalid(FieldKind::Password, "password123"), "no special");
}

#[test]
fn password_with_unlisted_characters_is_invalid() {
    assert!(invalid(FieldKind::Password, "abcd 123!"));
    assert!(invalid(FieldKind::Password, "abcd123!#"));
    assert!(invalid(FieldKind::Password, "비밀번호abc1!"));
}

#[test]
fn password_digit_class_is_ascii_only() {
    assert!(invalid(FieldKind::Password, "abcdefg１!"));
}

#[test]
fn login_password_only_requires_presence() {
    assert!(!validate_login_password("").valid);
    assert!(validate_login_password("password123").valid);
}

// =============================================================
// Password confirm
// =============================================================

#[test]
fn password_confirm_must_match() {
    let kind = FieldKind::PasswordConfirm { password: "abcd123!" };
    assert!(validate_field(kind, "abcd123!").valid);
    assert_eq!(validate_field(kind, "abcd123?").error(), Some("Passwords do not match."));
    assert_eq!(validate_field(kind, "").error(), Some("Please confirm your password."));
}

// =============================================================
// Terms
// =============================================================

#[test]
fn terms_require_service_and_privacy() {
    let mut terms = TermsAcceptance::default();
    assert!(!validate_terms(&terms).valid);

    terms.service = true;
    assert!(!validate_terms(&terms).valid);

    terms.privacy = true;
    assert!(validate_terms(&terms).valid);
    assert!(!terms.all_accepted());
}

#[test]
fn accept_all_mirrors_every_box() {
    let mut terms = TermsAcceptance::default();
    terms.set_all(true);
    assert!(terms.all_accepted());
    assert!(validate_terms(&terms).valid);

    terms.marketing = false;
    assert!(!terms.all_accepted());

    terms.set_all(false);
    assert_eq!(terms, TermsAcceptance::default());
}

#[test]
fn valid_result_has_no_error() {
    assert_eq!(ValidationResult::ok().error(), None);
}
