//! Card component for a document in the browse grid.

use leptos::prelude::*;

use crate::net::types::Document;
use crate::util::format;

/// A clickable card summarizing one document.
#[component]
pub fn DocumentCard(document: Document) -> impl IntoView {
    let href = format!("/document/{}", document.id);

    view! {
        <a class="document-card" href=href>
            <div class="document-card__badge">{format::file_kind(&document.file_type)}</div>
            <h3 class="document-card__title">{document.title}</h3>
            <p class="document-card__description">{document.description}</p>
            <div class="document-card__meta">
                <span>{document.subject.name}</span>
                <span>{document.school_year}</span>
            </div>
            <div class="document-card__footer">
                <span>{document.uploader.full_name}</span>
                <span>{format!("{} downloads", document.download_count)}</span>
                <span>{format::date_only(&document.upload_date).to_owned()}</span>
            </div>
        </a>
    }
}
