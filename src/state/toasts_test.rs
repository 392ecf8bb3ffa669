use super::*;

// =============================================================
// Toast queue
// =============================================================

#[test]
fn push_appends_in_order() {
    let mut state = ToastState::default();
    state.push(ToastKind::Success, "first");
    state.push(ToastKind::Error, "second");

    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[0].message, "first");
    assert_eq!(state.toasts[1].message, "second");
    assert_eq!(state.toasts[1].kind, ToastKind::Error);
}

#[test]
fn push_returns_distinct_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "a");
    let b = state.push(ToastKind::Success, "b");
    assert_ne!(a, b);
}

#[test]
fn dismiss_removes_only_the_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "a");
    state.push(ToastKind::Error, "b");

    state.dismiss(&a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].message, "b");
}

#[test]
fn dismiss_unknown_id_is_a_noop() {
    let mut state = ToastState::default();
    state.push(ToastKind::Success, "a");
    state.dismiss("no-such-id");
    assert_eq!(state.toasts.len(), 1);
}
