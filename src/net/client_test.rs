use super::*;

// =============================================================
// URL + header helpers
// =============================================================

#[test]
fn api_url_prefixes_the_base() {
    assert_eq!(api_url("/auth/login"), "/api/auth/login");
}

#[test]
fn bearer_value_formats_the_scheme() {
    assert_eq!(bearer_value("tok-123"), "Bearer tok-123");
}

// =============================================================
// Forced logout rule
// =============================================================

#[test]
fn authenticated_401_forces_logout() {
    assert!(should_force_logout(401, true));
}

#[test]
fn unauthenticated_401_stays_local() {
    // A rejected login attempt must not trigger the global logout path.
    assert!(!should_force_logout(401, false));
}

#[test]
fn other_statuses_never_force_logout() {
    assert!(!should_force_logout(403, true));
    assert!(!should_force_logout(500, true));
    assert!(!should_force_logout(200, true));
}

// =============================================================
// Error body decoding
// =============================================================

#[test]
fn error_message_prefers_message_over_error() {
    let body = serde_json::json!({ "message": "Invalid credentials", "error": "Unauthorized" });
    assert_eq!(error_message(&body), Some("Invalid credentials"));
}

#[test]
fn error_message_falls_back_to_error() {
    let body = serde_json::json!({ "error": "Unauthorized" });
    assert_eq!(error_message(&body), Some("Unauthorized"));
}

#[test]
fn error_message_ignores_non_string_fields() {
    let body = serde_json::json!({ "message": 42 });
    assert_eq!(error_message(&body), None);
}

#[test]
fn error_message_handles_empty_bodies() {
    assert_eq!(error_message(&serde_json::json!({})), None);
}

// =============================================================
// User-facing messages
// =============================================================

#[test]
fn http_error_message_comes_from_the_server() {
    let err = ApiError::Http { status: 409, message: "Email already in use".to_owned() };
    assert_eq!(err.message(), "Email already in use");
}

#[test]
fn network_error_message_is_generic() {
    let err = ApiError::Network("fetch aborted".to_owned());
    assert_eq!(err.message(), "Could not reach the server.");
}

#[test]
fn display_includes_the_status() {
    let err = ApiError::Http { status: 404, message: "Not found".to_owned() };
    assert_eq!(err.to_string(), "Not found (404)");
}
