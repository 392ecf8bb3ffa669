use super::*;

// =============================================================
// File sizes
// =============================================================

#[test]
fn bytes_stay_in_bytes() {
    assert_eq!(file_size(0), "0 B");
    assert_eq!(file_size(512), "512 B");
}

#[test]
fn kilobytes_get_one_decimal() {
    assert_eq!(file_size(1024), "1.0 KB");
    assert_eq!(file_size(1536), "1.5 KB");
}

#[test]
fn megabytes_get_one_decimal() {
    assert_eq!(file_size(5 * 1024 * 1024), "5.0 MB");
}

// =============================================================
// Dates
// =============================================================

#[test]
fn date_only_drops_the_time_part() {
    assert_eq!(date_only("2025-01-15T10:00:00.000Z"), "2025-01-15");
}

#[test]
fn date_only_passes_through_bare_dates() {
    assert_eq!(date_only("2025-01-15"), "2025-01-15");
}

// =============================================================
// File kinds
// =============================================================

#[test]
fn known_mime_types_get_short_labels() {
    assert_eq!(file_kind("application/pdf"), "PDF");
    assert_eq!(
        file_kind("application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
        "Word"
    );
    assert_eq!(file_kind("image/png"), "Image");
    assert_eq!(file_kind("text/plain"), "Text");
}

#[test]
fn unknown_mime_types_fall_back_to_file() {
    assert_eq!(file_kind("application/octet-stream"), "File");
}
