use super::*;

// =============================================================
// User wire format
// =============================================================

#[test]
fn user_deserializes_from_backend_json() {
    let user: User = serde_json::from_str(
        r#"{
            "_id": "64fa12",
            "email": "ana@example.edu",
            "fullName": "Ana Petrova",
            "role": "USER",
            "status": "ACTIVE",
            "joinedDate": "2024-09-01T00:00:00.000Z"
        }"#,
    )
    .unwrap();

    assert_eq!(user.id, "64fa12");
    assert_eq!(user.full_name, "Ana Petrova");
    assert_eq!(user.role, UserRole::User);
    assert_eq!(user.status, UserStatus::Active);
    assert!(user.avatar_url.is_none());
    assert_eq!(user.uploads_count, 0);
}

#[test]
fn roles_use_screaming_snake_case_on_the_wire() {
    assert_eq!(serde_json::to_string(&UserRole::Moderator).unwrap(), r#""MODERATOR""#);
    let role: UserRole = serde_json::from_str(r#""ADMIN""#).unwrap();
    assert_eq!(role, UserRole::Admin);
}

#[test]
fn blocked_status_deserializes() {
    let status: UserStatus = serde_json::from_str(r#""BLOCKED""#).unwrap();
    assert_eq!(status, UserStatus::Blocked);
}

// =============================================================
// Documents
// =============================================================

#[test]
fn document_deserializes_with_nested_subject_and_uploader() {
    let doc: Document = serde_json::from_str(
        r#"{
            "_id": "d-1",
            "title": "Week 3 notes",
            "fileUrl": "/files/d-1.pdf",
            "fileType": "application/pdf",
            "fileSize": 204800,
            "uploader": { "_id": "u-1", "fullName": "Ana Petrova" },
            "status": "VISIBLE",
            "subject": { "_id": "s-1", "name": "Calculus", "code": "MATH101" },
            "documentType": "Lecture Notes",
            "schoolYear": "2024-2025",
            "downloadCount": 12,
            "uploadDate": "2025-01-15T10:00:00.000Z"
        }"#,
    )
    .unwrap();

    assert_eq!(doc.status, DocumentStatus::Visible);
    assert_eq!(doc.subject.code, "MATH101");
    assert_eq!(doc.uploader.full_name, "Ana Petrova");
    assert_eq!(doc.download_count, 12);
    // Absent optional counters fall back to zero.
    assert_eq!(doc.view_count, 0);
    assert!(doc.description.is_empty());
}

#[test]
fn documents_page_tolerates_missing_pagination() {
    let page: DocumentsPage = serde_json::from_str(r#"{ "data": [] }"#).unwrap();
    assert!(page.data.is_empty());
    assert_eq!(page.pagination.total, 0);
}

// =============================================================
// Display labels
// =============================================================

#[test]
fn role_labels_and_wire_strings_agree() {
    assert_eq!(UserRole::User.as_str(), "USER");
    assert_eq!(UserRole::Moderator.label(), "Moderator");
    assert_eq!(UserRole::Admin.as_str(), "ADMIN");
}
