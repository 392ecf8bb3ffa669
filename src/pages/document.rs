//! Document detail page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::navbar::Navbar;
use crate::net::api;
use crate::net::types::Document;
use crate::state::session::SessionStore;
use crate::state::toasts::Toaster;
use crate::util::format;

/// Metadata and download link for a single document, loaded from the route
/// parameter. The uploader sees a delete button for their own upload.
#[component]
pub fn DocumentPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let params = use_params_map();

    let doc_id = move || params.read().get("id").unwrap_or_default();
    let document = LocalResource::new(move || {
        let id = doc_id();
        async move { api::fetch_document(store, &id).await }
    });

    view! {
        <Navbar/>
        <div class="document-page">
            <Suspense fallback=move || view! { <p>"Loading document..."</p> }>
                {move || {
                    document
                        .get()
                        .map(|result| match result {
                            Ok(doc) => view! { <DocumentDetail document=doc/> }.into_any(),
                            Err(e) => {
                                view! { <p class="document-page__error">{e.message()}</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn DocumentDetail(document: Document) -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let toaster = expect_context::<Toaster>();
    let navigate = use_navigate();

    let is_own = store
        .user()
        .is_some_and(|u| u.id == document.uploader.id);
    let delete_id = document.id.clone();

    let on_delete = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let id = delete_id.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api::delete_document(store, &id).await {
                    Ok(()) => {
                        toaster.success("Document deleted.");
                        navigate("/", NavigateOptions::default());
                    }
                    Err(e) => toaster.error(&e.message()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&delete_id, &navigate, &toaster);
        }
    };

    view! {
        <article class="document-detail">
            <header class="document-detail__header">
                <span class="document-detail__badge">
                    {format::file_kind(&document.file_type)}
                </span>
                <h1>{document.title}</h1>
            </header>

            <p class="document-detail__description">{document.description}</p>

            <dl class="document-detail__meta">
                <dt>"Subject"</dt>
                <dd>{format!("{} ({})", document.subject.name, document.subject.code)}</dd>
                <dt>"Type"</dt>
                <dd>{document.document_type}</dd>
                <dt>"School year"</dt>
                <dd>{document.school_year}</dd>
                <dt>"Uploaded by"</dt>
                <dd>
                    <a href=format!("/profile/{}", document.uploader.id)>
                        {document.uploader.full_name}
                    </a>
                </dd>
                <dt>"Uploaded"</dt>
                <dd>{format::date_only(&document.upload_date).to_owned()}</dd>
                <dt>"Size"</dt>
                <dd>{format::file_size(document.file_size)}</dd>
                <dt>"Downloads"</dt>
                <dd>{document.download_count}</dd>
                <dt>"Views"</dt>
                <dd>{document.view_count}</dd>
            </dl>

            <div class="document-detail__actions">
                <a class="btn btn--primary" href=document.file_url target="_blank" download>
                    "Download"
                </a>
                <Show when=move || is_own>
                    <button class="btn btn--danger" on:click=on_delete.clone()>
                        "Delete"
                    </button>
                </Show>
            </div>
        </article>
    }
}
