//! Upload page: document metadata form plus file picker.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::net::api;
use crate::state::session::SessionStore;
use crate::state::toasts::Toaster;

/// Document types offered by the upload form.
const DOCUMENT_TYPES: [&str; 5] =
    ["Lecture Notes", "Exam Paper", "Solved Exercises", "Tutorial", "Other"];

/// Multipart upload form.
///
/// The request body is a `FormData` with the metadata fields and the picked
/// file; the API client deliberately leaves the content-type header to the
/// browser so the multipart boundary is set correctly.
#[component]
pub fn UploadPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let toaster = expect_context::<Toaster>();
    let navigate = use_navigate();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let subject_id = RwSignal::new(String::new());
    let document_type = RwSignal::new(DOCUMENT_TYPES[0].to_owned());
    let school_year = RwSignal::new("2024-2025".to_owned());
    let uploading = RwSignal::new(false);
    let file_input = NodeRef::<leptos::html::Input>::new();

    let subjects = LocalResource::new(move || api::fetch_subjects(store));

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if uploading.get_untracked() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let Some(input) = file_input.get_untracked() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                toaster.error("Please choose a file to upload.");
                return;
            };
            if title.get_untracked().trim().is_empty() {
                toaster.error("Please enter a title.");
                return;
            }
            if subject_id.get_untracked().is_empty() {
                toaster.error("Please choose a subject.");
                return;
            }

            let form = web_sys::FormData::new().ok();
            let Some(form) = form else { return };
            let _ = form.append_with_str("title", title.get_untracked().trim());
            let _ = form.append_with_str("description", description.get_untracked().trim());
            let _ = form.append_with_str("subject", &subject_id.get_untracked());
            let _ = form.append_with_str("documentType", &document_type.get_untracked());
            let _ = form.append_with_str("schoolYear", &school_year.get_untracked());
            let _ = form.append_with_blob_and_filename("file", &file, &file.name());

            uploading.set(true);
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api::upload_document(store, form).await {
                    Ok(doc) => {
                        toaster.success("Document uploaded.");
                        navigate(&format!("/document/{}", doc.id), NavigateOptions::default());
                    }
                    Err(e) => toaster.error(&e.message()),
                }
                uploading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, &toaster, &file_input);
        }
    };

    view! {
        <Navbar/>
        <div class="upload-page">
            <h1>"Share a document"</h1>

            <form class="upload-form" on:submit=submit>
                <label class="upload-form__label">
                    "Title"
                    <input
                        type="text"
                        required
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>

                <label class="upload-form__label">
                    "Description"
                    <textarea
                        rows="4"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>

                <label class="upload-form__label">
                    "Subject"
                    <select
                        required
                        prop:value=move || subject_id.get()
                        on:change=move |ev| subject_id.set(event_target_value(&ev))
                    >
                        <option value="">"Choose a subject"</option>
                        <Suspense fallback=|| ()>
                            {move || {
                                subjects
                                    .get()
                                    .and_then(Result::ok)
                                    .map(|list| {
                                        list.into_iter()
                                            .map(|s| {
                                                view! {
                                                    <option value=s.id>
                                                        {format!("{} ({})", s.name, s.code)}
                                                    </option>
                                                }
                                            })
                                            .collect::<Vec<_>>()
                                    })
                            }}
                        </Suspense>
                    </select>
                </label>

                <label class="upload-form__label">
                    "Document type"
                    <select
                        prop:value=move || document_type.get()
                        on:change=move |ev| document_type.set(event_target_value(&ev))
                    >
                        {DOCUMENT_TYPES
                            .into_iter()
                            .map(|t| view! { <option value=t>{t}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>

                <label class="upload-form__label">
                    "School year"
                    <input
                        type="text"
                        required
                        prop:value=move || school_year.get()
                        on:input=move |ev| school_year.set(event_target_value(&ev))
                    />
                </label>

                <label class="upload-form__label">
                    "File"
                    <input type="file" required node_ref=file_input/>
                </label>

                <button class="btn btn--primary" type="submit" disabled=move || uploading.get()>
                    {move || if uploading.get() { "Uploading..." } else { "Upload" }}
                </button>
            </form>
        </div>
    }
}
