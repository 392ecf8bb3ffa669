//! Sort selector for the browse page.

use leptos::prelude::*;

use crate::net::api::{SortKey, SortOrder};

/// Dropdown mapping a fixed set of options onto `(SortKey, SortOrder)`.
#[component]
pub fn SortDropdown(
    sort_by: RwSignal<SortKey>,
    sort_order: RwSignal<SortOrder>,
) -> impl IntoView {
    let current = move || encode(sort_by.get(), sort_order.get());

    view! {
        <select
            class="sort-dropdown"
            prop:value=current
            on:change=move |ev| {
                let (key, order) = decode(&event_target_value(&ev));
                sort_by.set(key);
                sort_order.set(order);
            }
        >
            <option value="uploadDate:desc">"Newest first"</option>
            <option value="uploadDate:asc">"Oldest first"</option>
            <option value="downloadCount:desc">"Most downloaded"</option>
            <option value="downloadCount:asc">"Least downloaded"</option>
        </select>
    }
}

fn encode(key: SortKey, order: SortOrder) -> String {
    format!("{}:{}", key.as_str(), order.as_str())
}

fn decode(value: &str) -> (SortKey, SortOrder) {
    match value {
        "uploadDate:asc" => (SortKey::UploadDate, SortOrder::Asc),
        "downloadCount:desc" => (SortKey::DownloadCount, SortOrder::Desc),
        "downloadCount:asc" => (SortKey::DownloadCount, SortOrder::Asc),
        _ => (SortKey::UploadDate, SortOrder::Desc),
    }
}
