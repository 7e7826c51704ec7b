use super::*;

#[test]
fn toast_state_default_hidden_info() {
    let state = ToastState::default();
    assert!(!state.visible);
    assert_eq!(state.kind, ToastKind::Info);
}

#[test]
fn show_then_dismiss_hides() {
    let mut state = ToastState::default();
    let generation = state.show("Logged out.", ToastKind::Info);
    assert!(state.visible);
    assert_eq!(state.message, "Logged out.");

    state.dismiss(generation);
    assert!(!state.visible);
}

#[test]
fn stale_dismiss_keeps_newer_toast() {
    let mut state = ToastState::default();
    let first = state.show("first", ToastKind::Error);
    let second = state.show("second", ToastKind::Success);
    assert_ne!(first, second);

    state.dismiss(first);
    assert!(state.visible);
    assert_eq!(state.kind, ToastKind::Success);

    state.dismiss(second);
    assert!(!state.visible);
}

#[test]
fn alert_classes() {
    assert_eq!(ToastKind::Success.alert_class(), "alert-success");
    assert_eq!(ToastKind::Error.alert_class(), "alert-error");
    assert_eq!(ToastKind::Warning.alert_class(), "alert-warning");
    assert_eq!(ToastKind::Info.alert_class(), "alert-info");
}
