use super::*;

// =============================================================
// Debounce generations
// =============================================================

#[test]
fn default_search_is_empty() {
    let state = SearchState::default();
    assert!(state.raw.is_empty());
    assert!(state.debounced.is_empty());
}

#[test]
fn set_raw_does_not_touch_debounced() {
    let mut state = SearchState::default();
    state.set_raw("calculus");
    assert_eq!(state.raw, "calculus");
    assert!(state.debounced.is_empty());
}

#[test]
fn commit_with_current_generation_applies() {
    let mut state = SearchState::default();
    let generation = state.set_raw("calculus");
    assert!(state.commit(generation));
    assert_eq!(state.debounced, "calculus");
}

#[test]
fn stale_commit_is_ignored() {
    let mut state = SearchState::default();
    let stale = state.set_raw("cal");
    let latest = state.set_raw("calculus");

    assert!(!state.commit(stale));
    assert!(state.debounced.is_empty());

    assert!(state.commit(latest));
    assert_eq!(state.debounced, "calculus");
}

#[test]
fn each_keystroke_gets_a_new_generation() {
    let mut state = SearchState::default();
    let first = state.set_raw("a");
    let second = state.set_raw("ab");
    assert_ne!(first, second);
}
