use super::*;
use crate::net::types::{User, UserRole, UserStatus};

fn sample_user() -> User {
    User {
        id: "u-1".to_owned(),
        email: "ana@example.edu".to_owned(),
        full_name: "Ana Petrova".to_owned(),
        avatar_url: None,
        role: UserRole::User,
        status: UserStatus::Active,
        joined_date: "2024-09-01T00:00:00.000Z".to_owned(),
        uploads_count: 0,
        downloads_count: 0,
    }
}

// =============================================================
// Gate derivation
// =============================================================

#[test]
fn fresh_session_is_restoring() {
    assert_eq!(auth_gate(&Session::default()), AuthGate::Restoring);
}

#[test]
fn unhydrated_session_is_restoring_even_with_credentials() {
    // Until the storage read completes, nothing is decided.
    let mut session = Session::default();
    session.establish(sample_user(), "tok-123".to_owned());
    assert_eq!(auth_gate(&session), AuthGate::Restoring);
}

#[test]
fn hydrated_empty_session_is_unauthenticated() {
    let mut session = Session::default();
    session.mark_hydrated();
    assert_eq!(auth_gate(&session), AuthGate::Unauthenticated);
}

#[test]
fn hydrated_signed_in_session_is_authenticated() {
    let mut session = Session::default();
    session.mark_hydrated();
    session.establish(sample_user(), "tok-123".to_owned());
    assert_eq!(auth_gate(&session), AuthGate::Authenticated);
}

#[test]
fn logout_moves_the_gate_back_to_unauthenticated() {
    let mut session = Session::default();
    session.mark_hydrated();
    session.establish(sample_user(), "tok-123".to_owned());
    session.clear();
    assert_eq!(auth_gate(&session), AuthGate::Unauthenticated);
}

// =============================================================
// Redirect latch
// =============================================================

#[test]
fn latch_fires_once_per_entry() {
    let mut latch = EdgeLatch::default();
    assert!(latch.trigger());
    assert!(!latch.trigger());
    assert!(!latch.trigger());
}

#[test]
fn reset_rearms_the_latch() {
    let mut latch = EdgeLatch::default();
    assert!(latch.trigger());
    latch.reset();
    assert!(latch.trigger());
}

#[test]
fn rapid_toggle_fires_once_per_signed_out_period() {
    let mut latch = EdgeLatch::default();

    // First render while signed out: redirect fires.
    assert!(latch.trigger());
    // Re-renders before the navigation lands must stay quiet.
    assert!(!latch.trigger());
    assert!(!latch.trigger());

    // Signing in re-arms; the next sign-out redirects exactly once again.
    latch.reset();
    assert!(latch.trigger());
    assert!(!latch.trigger());
}
