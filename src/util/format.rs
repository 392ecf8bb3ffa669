//! Display formatting helpers for document metadata.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Human-readable file size, one decimal above bytes.
pub fn file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    #[allow(clippy::cast_precision_loss)]
    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}

/// The date part of an ISO-8601 timestamp, for compact list display.
pub fn date_only(iso: &str) -> &str {
    iso.split('T').next().unwrap_or(iso)
}

/// Short label for a MIME type shown on document cards.
pub fn file_kind(mime: &str) -> &'static str {
    match mime {
        "application/pdf" => "PDF",
        "application/msword"
        | "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => "Word",
        "application/vnd.ms-powerpoint"
        | "application/vnd.openxmlformats-officedocument.presentationml.presentation" => "Slides",
        "application/zip" => "Archive",
        _ if mime.starts_with("image/") => "Image",
        _ if mime.starts_with("text/") => "Text",
        _ => "File",
    }
}
