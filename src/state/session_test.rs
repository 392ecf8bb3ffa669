use super::*;
use crate::net::types::{UserRole, UserStatus};

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
// Session transitions
// =============================================================

#[test]
fn default_session_is_signed_out_and_unhydrated() {
    let session = Session::default();
    assert!(session.user.is_none());
    assert!(session.token.is_none());
    assert!(!session.is_authenticated);
    assert!(!session.has_hydrated);
}

#[test]
fn establish_sets_the_whole_triple() {
    let mut session = Session::default();
    session.establish(sample_user(), "tok-123".to_owned());
    assert!(session.is_authenticated);
    assert_eq!(session.token.as_deref(), Some("tok-123"));
    assert_eq!(session.user.as_ref().map(|u| u.id.as_str()), Some("u-1"));
}

#[test]
fn clear_resets_the_triple_but_not_hydration() {
    let mut session = Session::default();
    session.mark_hydrated();
    session.establish(sample_user(), "tok-123".to_owned());
    session.clear();
    assert!(session.user.is_none());
    assert!(session.token.is_none());
    assert!(!session.is_authenticated);
    assert!(session.has_hydrated);
}

#[test]
fn clear_is_idempotent() {
    let mut session = Session::default();
    session.clear();
    session.clear();
    assert_eq!(session, Session::default());
}

#[test]
fn set_user_keeps_token_and_flag() {
    let mut session = Session::default();
    session.establish(sample_user(), "tok-123".to_owned());

    let mut renamed = sample_user();
    renamed.full_name = "Ana P.".to_owned();
    session.set_user(renamed);

    assert!(session.is_authenticated);
    assert_eq!(session.token.as_deref(), Some("tok-123"));
    assert_eq!(session.user.as_ref().map(|u| u.full_name.as_str()), Some("Ana P."));
}

// =============================================================
// Restore from persisted state
// =============================================================

#[test]
fn restore_none_completes_hydration_signed_out() {
    let mut session = Session::default();
    session.restore(None);
    assert!(session.has_hydrated);
    assert!(!session.is_authenticated);
    assert!(session.user.is_none());
}

#[test]
fn restore_adopts_a_complete_authenticated_record() {
    let mut session = Session::default();
    session.restore(Some(PersistedSession {
        user: Some(sample_user()),
        token: Some("tok-123".to_owned()),
        is_authenticated: true,
    }));
    assert!(session.has_hydrated);
    assert!(session.is_authenticated);
    assert_eq!(session.token.as_deref(), Some("tok-123"));
}

#[test]
fn restore_ignores_an_unauthenticated_record() {
    let mut session = Session::default();
    session.restore(Some(PersistedSession {
        user: Some(sample_user()),
        token: Some("tok-123".to_owned()),
        is_authenticated: false,
    }));
    assert!(session.has_hydrated);
    assert!(!session.is_authenticated);
    assert!(session.user.is_none());
}

#[test]
fn restore_ignores_a_record_missing_the_token() {
    let mut session = Session::default();
    session.restore(Some(PersistedSession {
        user: Some(sample_user()),
        token: None,
        is_authenticated: true,
    }));
    assert!(session.has_hydrated);
    assert!(!session.is_authenticated);
}

#[test]
fn restore_ignores_a_record_missing_the_user() {
    let mut session = Session::default();
    session.restore(Some(PersistedSession {
        user: None,
        token: Some("tok-123".to_owned()),
        is_authenticated: true,
    }));
    assert!(session.has_hydrated);
    assert!(!session.is_authenticated);
}

#[test]
fn hydration_never_reverts() {
    let mut session = Session::default();
    session.restore(None);
    session.establish(sample_user(), "tok-123".to_owned());
    session.clear();
    assert!(session.has_hydrated);
}

// =============================================================
// Persisted form
// =============================================================

#[test]
fn persisted_session_uses_camel_case_keys() {
    let mut session = Session::default();
    session.establish(sample_user(), "tok-123".to_owned());

    let value = serde_json::to_value(PersistedSession::from(&session)).unwrap();
    assert_eq!(value["isAuthenticated"], serde_json::json!(true));
    assert_eq!(value["token"], serde_json::json!("tok-123"));
    assert_eq!(value["user"]["_id"], serde_json::json!("u-1"));
}

#[test]
fn persisted_session_round_trips_through_restore() {
    let mut original = Session::default();
    original.establish(sample_user(), "tok-123".to_owned());

    let raw = serde_json::to_string(&PersistedSession::from(&original)).unwrap();
    let record: PersistedSession = serde_json::from_str(&raw).unwrap();

    let mut restored = Session::default();
    restored.restore(Some(record));
    assert!(restored.is_authenticated);
    assert_eq!(restored.user, original.user);
    assert_eq!(restored.token, original.token);
}
