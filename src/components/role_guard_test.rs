use super::*;
use crate::net::types::UserStatus;

fn user_with_role(role: UserRole) -> User {
    User {
        id: "u-1".to_owned(),
        email: "ana@example.edu".to_owned(),
        full_name: "Ana Petrova".to_owned(),
        avatar_url: None,
        role,
        status: UserStatus::Active,
        joined_date: "2024-09-01T00:00:00.000Z".to_owned(),
        uploads_count: 0,
        downloads_count: 0,
    }
}

const STAFF: [UserRole; 2] = [UserRole::Moderator, UserRole::Admin];

// =============================================================
// Gate derivation
// =============================================================

#[test]
fn missing_user_is_loading_not_denied() {
    assert_eq!(role_gate(None, &STAFF), RoleGate::Loading);
}

#[test]
fn listed_roles_are_allowed() {
    let moderator = user_with_role(UserRole::Moderator);
    let admin = user_with_role(UserRole::Admin);
    assert_eq!(role_gate(Some(&moderator), &STAFF), RoleGate::Allowed);
    assert_eq!(role_gate(Some(&admin), &STAFF), RoleGate::Allowed);
}

#[test]
fn unlisted_role_is_denied() {
    let user = user_with_role(UserRole::User);
    assert_eq!(role_gate(Some(&user), &STAFF), RoleGate::Denied);
}

#[test]
fn empty_allow_list_denies_everyone() {
    let admin = user_with_role(UserRole::Admin);
    assert_eq!(role_gate(Some(&admin), &[]), RoleGate::Denied);
}

// =============================================================
// Denial side effects
// =============================================================

#[test]
fn denial_toast_and_redirect_latch_once_per_event() {
    let mut latch = EdgeLatch::default();

    // First denied render emits the toast + redirect.
    assert!(latch.trigger());
    // Further renders of the same denial stay silent.
    assert!(!latch.trigger());

    // Regaining an allowed role re-arms for the next denial.
    latch.reset();
    assert!(latch.trigger());
}
