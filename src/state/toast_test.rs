use super::*;

#[test]
fn ids_are_monotonic() {
    let mut state = ToastState::default();
    let a = state.push(ToastLevel::Info, "one");
    let b = state.push(ToastLevel::Success, "two");
    let c = state.push(ToastLevel::Error, "three");
    assert!(a < b && b < c);
}

#[test]
fn dismiss_removes_only_the_target() {
    let mut state = ToastState::default();
    let a = state.push(ToastLevel::Info, "one");
    let b = state.push(ToastLevel::Info, "two");

    state.dismiss(a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, b);

    // Unknown id is a no-op.
    state.dismiss(999);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn ids_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let a = state.push(ToastLevel::Info, "one");
    state.dismiss(a);
    let b = state.push(ToastLevel::Info, "two");
    assert!(b > a);
}

#[test]
fn default_durations_by_level() {
    assert_eq!(ToastLevel::Success.default_duration_ms(), 5_000);
    assert_eq!(ToastLevel::Info.default_duration_ms(), 5_000);
    assert_eq!(ToastLevel::Error.default_duration_ms(), 8_000);
    assert_eq!(ToastLevel::Warning.default_duration_ms(), 10_000);
}

#[test]
fn push_with_duration_overrides_default() {
    let mut state = ToastState::default();
    let id = state.push_with_duration(ToastLevel::Success, "saved", 2_000);
    assert_eq!(state.toasts[0].id, id);
    assert_eq!(state.toasts[0].duration_ms, 2_000);
}
