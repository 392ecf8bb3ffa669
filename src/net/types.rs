//! Wire types shared with the UniShare REST backend.
//!
//! Field names follow the backend's JSON shapes (`_id`, camelCase), so every
//! struct carries serde renames rather than leaking wire casing into Rust
//! code.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account roles, ordered by privilege (`User` < `Moderator` < `Admin`).
///
/// Guards check set membership, not ordering; the ordering only matters for
/// display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    User,
    Moderator,
    Admin,
}

impl UserRole {
    pub fn label(self) -> &'static str {
        match self {
            UserRole::User => "User",
            UserRole::Moderator => "Moderator",
            UserRole::Admin => "Admin",
        }
    }

    /// Wire representation, e.g. for query parameters.
    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::User => "USER",
            UserRole::Moderator => "MODERATOR",
            UserRole::Admin => "ADMIN",
        }
    }
}

/// Account status as managed by moderators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Active,
    Blocked,
}

/// A platform user profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub role: UserRole,
    pub status: UserStatus,
    pub joined_date: String,
    #[serde(default)]
    pub uploads_count: u32,
    #[serde(default)]
    pub downloads_count: u32,
}

/// Response of `POST /auth/login`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub user: User,
}

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub full_name: String,
    pub password: String,
}

/// Body of `PATCH /users/me/profile`.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Body of `POST /users/me/change-password`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

/// Subject reference embedded in documents and majors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub managing_faculty: Option<String>,
}

/// A major grouping subjects, used by the filter sidebar and admin manager.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Major {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub subjects: Vec<Subject>,
}

/// Uploader summary embedded in documents.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Uploader {
    #[serde(rename = "_id")]
    pub id: String,
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Moderation status of a document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentStatus {
    Processing,
    Visible,
    Blocked,
}

/// A shared academic document.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub file_url: String,
    pub file_type: String,
    pub file_size: u64,
    pub uploader: Uploader,
    pub status: DocumentStatus,
    pub subject: Subject,
    pub document_type: String,
    pub school_year: String,
    #[serde(default)]
    pub download_count: u32,
    #[serde(default)]
    pub view_count: u32,
    pub upload_date: String,
}

/// Pagination envelope returned by list endpoints.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: u32,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

/// Paged document list from `GET /documents`.
#[derive(Clone, Debug, Deserialize)]
pub struct DocumentsPage {
    pub data: Vec<Document>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// Paged user list from `GET /admin/users`.
#[derive(Clone, Debug, Deserialize)]
pub struct UsersPage {
    pub data: Vec<User>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// Per-user counters from `GET /users/{id}/stats`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    #[serde(default)]
    pub uploads_count: u32,
    #[serde(default)]
    pub downloads_count: u32,
    #[serde(default)]
    pub total_views: u32,
}

/// Platform-wide counters from `GET /statistics/platform`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformStats {
    #[serde(default)]
    pub total_users: u32,
    #[serde(default)]
    pub total_documents: u32,
    #[serde(default)]
    pub total_downloads: u32,
    #[serde(default)]
    pub total_subjects: u32,
}

/// One point of the uploads-over-time series.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadsPoint {
    pub period: String,
    pub count: u32,
}

/// An admin activity log entry.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    #[serde(rename = "_id")]
    pub id: String,
    pub actor: String,
    pub action: String,
    #[serde(default)]
    pub target: String,
    pub timestamp: String,
}
