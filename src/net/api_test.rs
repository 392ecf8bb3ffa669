use super::*;

// =============================================================
// Document query strings
// =============================================================

#[test]
fn default_query_carries_only_sort_parameters() {
    let query = DocumentQuery::default();
    assert_eq!(query.query_string(), "?sortBy=uploadDate&sortOrder=desc");
}

#[test]
fn search_term_is_trimmed_and_encoded() {
    let query = DocumentQuery {
        search: "  linear algebra  ".to_owned(),
        ..DocumentQuery::default()
    };
    assert_eq!(
        query.query_string(),
        "?sortBy=uploadDate&sortOrder=desc&search=linear%20algebra"
    );
}

#[test]
fn blank_search_is_omitted() {
    let query = DocumentQuery { search: "   ".to_owned(), ..DocumentQuery::default() };
    assert_eq!(query.query_string(), "?sortBy=uploadDate&sortOrder=desc");
}

#[test]
fn subject_filters_repeat_the_key() {
    let query = DocumentQuery {
        subjects: vec!["s-1".to_owned(), "s-2".to_owned()],
        ..DocumentQuery::default()
    };
    assert_eq!(
        query.query_string(),
        "?sortBy=uploadDate&sortOrder=desc&subjects=s-1&subjects=s-2"
    );
}

#[test]
fn sort_selection_is_reflected() {
    let query = DocumentQuery {
        sort_by: SortKey::DownloadCount,
        sort_order: SortOrder::Asc,
        ..DocumentQuery::default()
    };
    assert_eq!(query.query_string(), "?sortBy=downloadCount&sortOrder=asc");
}

// =============================================================
// Admin user listing path
// =============================================================

#[test]
fn admin_users_path_defaults_to_the_page_limit() {
    assert_eq!(admin_users_path("", None), "/admin/users?limit=100");
}

#[test]
fn admin_users_path_appends_search_and_role() {
    assert_eq!(
        admin_users_path("ana maria", Some(UserRole::Moderator)),
        "/admin/users?limit=100&search=ana%20maria&role=MODERATOR"
    );
}

#[test]
fn admin_users_path_trims_blank_search() {
    assert_eq!(admin_users_path("  ", Some(UserRole::Admin)), "/admin/users?limit=100&role=ADMIN");
}
