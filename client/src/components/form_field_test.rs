use super::*;

#[test]
fn unchecked_field_has_neutral_class() {
    let class = input_class(None);
    assert!(!class.contains("input-error"));
    assert!(!class.contains("input-success"));
}

#[test]
fn checked_field_reflects_result() {
    assert!(input_class(Some(ValidationResult::ok())).ends_with("input-success"));
    assert!(input_class(Some(ValidationResult::fail("bad"))).ends_with("input-error"));
}
