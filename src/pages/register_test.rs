use super::*;

// =============================================================
// Registration validation
// =============================================================

#[test]
fn valid_input_passes() {
    assert!(validate_registration("Ana Petrova", "ana@example.edu", "hunter2hunter2", "hunter2hunter2").is_ok());
}

#[test]
fn blank_name_is_rejected() {
    assert!(validate_registration("   ", "ana@example.edu", "hunter2hunter2", "hunter2hunter2").is_err());
}

#[test]
fn email_without_at_sign_is_rejected() {
    assert!(validate_registration("Ana", "not-an-email", "hunter2hunter2", "hunter2hunter2").is_err());
}

#[test]
fn short_password_is_rejected() {
    assert!(validate_registration("Ana", "ana@example.edu", "short", "short").is_err());
}

#[test]
fn mismatched_confirmation_is_rejected() {
    let err = validate_registration("Ana", "ana@example.edu", "hunter2hunter2", "different-pass")
        .unwrap_err();
    assert_eq!(err, "Passwords do not match.");
}
