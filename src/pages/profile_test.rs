use super::*;

// =============================================================
// Change-password validation
// =============================================================

#[test]
fn matching_passwords_of_sufficient_length_pass() {
    assert!(validate_password_change("hunter2", "hunter2").is_ok());
}

#[test]
fn mismatched_confirmation_is_rejected() {
    let err = validate_password_change("hunter2", "hunter3").unwrap_err();
    assert_eq!(err, "New passwords do not match.");
}

#[test]
fn short_new_password_is_rejected() {
    let err = validate_password_change("abc", "abc").unwrap_err();
    assert_eq!(err, "New password must be at least 6 characters.");
}

#[test]
fn mismatch_is_reported_before_length() {
    assert_eq!(validate_password_change("abc", "abcd").unwrap_err(), "New passwords do not match.");
}
