//! Typed endpoint functions over the shared request pipeline.
//!
//! One thin async fn per backend route; every call goes through
//! [`crate::net::client`] so token attachment and 401 handling happen in
//! exactly one place. Mutation endpoints whose response bodies the UI never
//! reads decode into `serde_json::Value` and are ignored by callers.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;

use crate::net::client::{self, ApiError};
use crate::net::types::{
    ChangePasswordRequest, Document, DocumentsPage, LoginResponse, LogEntry, Major,
    PlatformStats, RegisterRequest, Subject, UpdateProfileRequest, UploadsPoint, User,
    UserRole, UserStats, UsersPage,
};
use crate::state::session::SessionStore;

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// `POST /auth/login`. Sent without a bearer token; a 401 here means bad
/// credentials, not an expired session.
pub async fn login(
    store: SessionStore,
    email: &str,
    password: &str,
) -> Result<LoginResponse, ApiError> {
    client::post_json(store, "/auth/login", &LoginRequest { email, password }).await
}

/// `POST /auth/register`.
pub async fn register(store: SessionStore, req: &RegisterRequest) -> Result<(), ApiError> {
    client::post_json::<_, serde_json::Value>(store, "/auth/register", req)
        .await
        .map(|_| ())
}

// ---------------------------------------------------------------------------
// Documents
// ---------------------------------------------------------------------------

/// Sort key for the browse page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    UploadDate,
    DownloadCount,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::UploadDate => "uploadDate",
            SortKey::DownloadCount => "downloadCount",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::UploadDate => "Upload date",
            SortKey::DownloadCount => "Downloads",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Desc,
    Asc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Desc => "desc",
            SortOrder::Asc => "asc",
        }
    }
}

/// Query parameters for `GET /documents`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentQuery {
    pub search: String,
    pub subjects: Vec<String>,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
}

impl DocumentQuery {
    /// Render as a query string, always starting with `?`.
    ///
    /// Subject ids repeat the `subjects` key, matching the backend's array
    /// parameter format. Blank search terms are omitted.
    pub fn query_string(&self) -> String {
        let mut parts = vec![
            format!("sortBy={}", self.sort_by.as_str()),
            format!("sortOrder={}", self.sort_order.as_str()),
        ];
        let search = self.search.trim();
        if !search.is_empty() {
            parts.push(format!("search={}", urlencoding::encode(search)));
        }
        for id in &self.subjects {
            parts.push(format!("subjects={}", urlencoding::encode(id)));
        }
        format!("?{}", parts.join("&"))
    }
}

/// `GET /documents` with search/filter/sort parameters.
pub async fn fetch_documents(
    store: SessionStore,
    query: &DocumentQuery,
) -> Result<DocumentsPage, ApiError> {
    client::get_json(store, &format!("/documents{}", query.query_string())).await
}

/// `GET /documents/{id}`.
pub async fn fetch_document(store: SessionStore, id: &str) -> Result<Document, ApiError> {
    client::get_json(store, &format!("/documents/{id}")).await
}

/// `GET /documents/my-uploads`.
pub async fn fetch_my_uploads(store: SessionStore) -> Result<Vec<Document>, ApiError> {
    client::get_json(store, "/documents/my-uploads").await
}

/// `GET /documents/user/{id}/uploads`.
pub async fn fetch_user_uploads(
    store: SessionStore,
    user_id: &str,
) -> Result<Vec<Document>, ApiError> {
    client::get_json(store, &format!("/documents/user/{user_id}/uploads")).await
}

/// `DELETE /documents/{id}` — owner removing their own upload.
pub async fn delete_document(store: SessionStore, id: &str) -> Result<(), ApiError> {
    client::delete::<serde_json::Value>(store, &format!("/documents/{id}"))
        .await
        .map(|_| ())
}

/// `POST /documents/upload` — multipart: metadata fields plus the file.
#[cfg(feature = "hydrate")]
pub async fn upload_document(
    store: SessionStore,
    form: web_sys::FormData,
) -> Result<Document, ApiError> {
    client::post_form(store, "/documents/upload", form).await
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// `GET /categories/subjects`.
pub async fn fetch_subjects(store: SessionStore) -> Result<Vec<Subject>, ApiError> {
    client::get_json(store, "/categories/subjects").await
}

/// `GET /categories/majors`.
pub async fn fetch_majors(store: SessionStore) -> Result<Vec<Major>, ApiError> {
    client::get_json(store, "/categories/majors").await
}

// ---------------------------------------------------------------------------
// Profiles
// ---------------------------------------------------------------------------

/// `GET /users/me/profile`.
pub async fn fetch_my_profile(store: SessionStore) -> Result<User, ApiError> {
    client::get_json(store, "/users/me/profile").await
}

/// `GET /users/me/stats`.
pub async fn fetch_my_stats(store: SessionStore) -> Result<UserStats, ApiError> {
    client::get_json(store, "/users/me/stats").await
}

/// `GET /users/{id}/profile`.
pub async fn fetch_user_profile(store: SessionStore, user_id: &str) -> Result<User, ApiError> {
    client::get_json(store, &format!("/users/{user_id}/profile")).await
}

/// `GET /users/{id}/stats`.
pub async fn fetch_user_stats(store: SessionStore, user_id: &str) -> Result<UserStats, ApiError> {
    client::get_json(store, &format!("/users/{user_id}/stats")).await
}

/// `PATCH /users/me/profile` — returns the updated profile.
pub async fn update_my_profile(
    store: SessionStore,
    req: &UpdateProfileRequest,
) -> Result<User, ApiError> {
    client::patch_json(store, "/users/me/profile", req).await
}

/// `POST /users/me/change-password`.
pub async fn change_password(
    store: SessionStore,
    req: &ChangePasswordRequest,
) -> Result<(), ApiError> {
    client::post_json::<_, serde_json::Value>(store, "/users/me/change-password", req)
        .await
        .map(|_| ())
}

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

/// `GET /statistics/platform`.
pub async fn fetch_platform_stats(store: SessionStore) -> Result<PlatformStats, ApiError> {
    client::get_json(store, "/statistics/platform").await
}

/// `GET /statistics/uploads-over-time`.
pub async fn fetch_uploads_over_time(
    store: SessionStore,
) -> Result<Vec<UploadsPoint>, ApiError> {
    client::get_json(store, "/statistics/uploads-over-time").await
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// Query parameters for `GET /admin/users`.
pub fn admin_users_path(search: &str, role: Option<UserRole>) -> String {
    let mut path = "/admin/users?limit=100".to_owned();
    let search = search.trim();
    if !search.is_empty() {
        path.push_str(&format!("&search={}", urlencoding::encode(search)));
    }
    if let Some(role) = role {
        path.push_str(&format!("&role={}", role.as_str()));
    }
    path
}

/// `GET /admin/users`.
pub async fn admin_fetch_users(
    store: SessionStore,
    search: &str,
    role: Option<UserRole>,
) -> Result<UsersPage, ApiError> {
    client::get_json(store, &admin_users_path(search, role)).await
}

/// `GET /admin/documents`.
pub async fn admin_fetch_documents(
    store: SessionStore,
    search: &str,
) -> Result<DocumentsPage, ApiError> {
    let mut path = "/admin/documents?limit=100".to_owned();
    let search = search.trim();
    if !search.is_empty() {
        path.push_str(&format!("&search={}", urlencoding::encode(search)));
    }
    client::get_json(store, &path).await
}

/// `POST /admin/users/{id}/block`.
pub async fn admin_block_user(store: SessionStore, id: &str) -> Result<(), ApiError> {
    client::post_empty::<serde_json::Value>(store, &format!("/admin/users/{id}/block"))
        .await
        .map(|_| ())
}

/// `POST /admin/users/{id}/unblock`.
pub async fn admin_unblock_user(store: SessionStore, id: &str) -> Result<(), ApiError> {
    client::post_empty::<serde_json::Value>(store, &format!("/admin/users/{id}/unblock"))
        .await
        .map(|_| ())
}

#[derive(Serialize)]
struct SetRoleRequest {
    role: UserRole,
}

/// `PATCH /admin/users/{id}/role` — returns the updated user.
pub async fn admin_set_role(
    store: SessionStore,
    id: &str,
    role: UserRole,
) -> Result<User, ApiError> {
    client::patch_json(store, &format!("/admin/users/{id}/role"), &SetRoleRequest { role }).await
}

/// `POST /admin/documents/{id}/block`.
pub async fn admin_block_document(store: SessionStore, id: &str) -> Result<(), ApiError> {
    client::post_empty::<serde_json::Value>(store, &format!("/admin/documents/{id}/block"))
        .await
        .map(|_| ())
}

/// `POST /admin/documents/{id}/unblock`.
pub async fn admin_unblock_document(store: SessionStore, id: &str) -> Result<(), ApiError> {
    client::post_empty::<serde_json::Value>(store, &format!("/admin/documents/{id}/unblock"))
        .await
        .map(|_| ())
}

/// `DELETE /admin/documents/{id}`.
pub async fn admin_delete_document(store: SessionStore, id: &str) -> Result<(), ApiError> {
    client::delete::<serde_json::Value>(store, &format!("/admin/documents/{id}"))
        .await
        .map(|_| ())
}

/// `GET /admin/subjects`.
pub async fn admin_fetch_subjects(store: SessionStore) -> Result<Vec<Subject>, ApiError> {
    client::get_json(store, "/admin/subjects").await
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NewSubjectRequest<'a> {
    name: &'a str,
    code: &'a str,
    managing_faculty: &'a str,
}

/// `POST /admin/subjects`.
pub async fn admin_add_subject(
    store: SessionStore,
    name: &str,
    code: &str,
    managing_faculty: &str,
) -> Result<(), ApiError> {
    client::post_json::<_, serde_json::Value>(
        store,
        "/admin/subjects",
        &NewSubjectRequest { name, code, managing_faculty },
    )
    .await
    .map(|_| ())
}

/// `DELETE /admin/subjects/{id}`.
pub async fn admin_delete_subject(store: SessionStore, id: &str) -> Result<(), ApiError> {
    client::delete::<serde_json::Value>(store, &format!("/admin/subjects/{id}"))
        .await
        .map(|_| ())
}

/// `GET /admin/majors`.
pub async fn admin_fetch_majors(store: SessionStore) -> Result<Vec<Major>, ApiError> {
    client::get_json(store, "/admin/majors").await
}

#[derive(Serialize)]
struct NewMajorRequest<'a> {
    name: &'a str,
    subjects: &'a [String],
}

/// `POST /admin/majors` — `subjects` is a list of subject ids.
pub async fn admin_add_major(
    store: SessionStore,
    name: &str,
    subject_ids: &[String],
) -> Result<(), ApiError> {
    client::post_json::<_, serde_json::Value>(
        store,
        "/admin/majors",
        &NewMajorRequest { name, subjects: subject_ids },
    )
    .await
    .map(|_| ())
}

/// `DELETE /admin/majors/{id}`.
pub async fn admin_delete_major(store: SessionStore, id: &str) -> Result<(), ApiError> {
    client::delete::<serde_json::Value>(store, &format!("/admin/majors/{id}"))
        .await
        .map(|_| ())
}

/// `GET /admin/logs`.
pub async fn admin_fetch_logs(store: SessionStore) -> Result<Vec<LogEntry>, ApiError> {
    client::get_json(store, "/admin/logs").await
}
