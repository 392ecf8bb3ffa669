//! Browse page: searchable, filterable, sortable document grid.

use leptos::prelude::*;

use crate::components::document_card::DocumentCard;
use crate::components::filter_sidebar::FilterSidebar;
use crate::components::navbar::Navbar;
use crate::components::sort_dropdown::SortDropdown;
use crate::net::api::{self, DocumentQuery, SortKey, SortOrder};
use crate::state::search::SearchState;
use crate::state::session::SessionStore;

/// The protected landing page.
///
/// The document resource re-fetches whenever the debounced search term, the
/// subject selection, or the sort changes; each of those is a signal the
/// resource closure reads.
#[component]
pub fn HomePage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let search = expect_context::<RwSignal<SearchState>>();

    let selected_subjects = RwSignal::new(Vec::<String>::new());
    let sort_by = RwSignal::new(SortKey::default());
    let sort_order = RwSignal::new(SortOrder::default());

    let majors = LocalResource::new(move || api::fetch_majors(store));
    let documents = LocalResource::new(move || {
        let query = DocumentQuery {
            search: search.get().debounced,
            subjects: selected_subjects.get(),
            sort_by: sort_by.get(),
            sort_order: sort_order.get(),
        };
        async move { api::fetch_documents(store, &query).await }
    });

    view! {
        <Navbar/>
        <div class="home-page">
            <FilterSidebar majors=majors selected=selected_subjects/>

            <main class="home-page__main">
                <header class="home-page__header">
                    <h1>"Documents"</h1>
                    <SortDropdown sort_by=sort_by sort_order=sort_order/>
                </header>

                <Suspense fallback=move || view! { <p>"Loading documents..."</p> }>
                    {move || {
                        documents
                            .get()
                            .map(|result| match result {
                                Ok(page) => {
                                    if page.data.is_empty() {
                                        view! {
                                            <p class="home-page__empty">
                                                "No documents match your filters."
                                            </p>
                                        }
                                            .into_any()
                                    } else {
                                        view! {
                                            <div class="home-page__grid">
                                                {page
                                                    .data
                                                    .into_iter()
                                                    .map(|doc| view! { <DocumentCard document=doc/> })
                                                    .collect::<Vec<_>>()}
                                            </div>
                                        }
                                            .into_any()
                                    }
                                }
                                Err(e) => {
                                    view! { <p class="home-page__error">{e.message()}</p> }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </main>
        </div>
    }
}
