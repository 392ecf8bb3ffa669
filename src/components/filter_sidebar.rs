//! Sidebar for filtering the browse page by subject, grouped by major.

use leptos::prelude::*;

use crate::net::client::ApiError;
use crate::net::types::Major;

/// Toggle a subject id in the selection, returning the new selection.
pub fn toggle_subject(mut selected: Vec<String>, id: &str) -> Vec<String> {
    if let Some(pos) = selected.iter().position(|s| s == id) {
        selected.remove(pos);
    } else {
        selected.push(id.to_owned());
    }
    selected
}

/// Subject checkboxes grouped by major. Selection drives the document query.
#[component]
pub fn FilterSidebar(
    majors: LocalResource<Result<Vec<Major>, ApiError>>,
    selected: RwSignal<Vec<String>>,
) -> impl IntoView {
    view! {
        <aside class="filter-sidebar">
            <h2>"Subjects"</h2>
            <Suspense fallback=move || view! { <p>"Loading subjects..."</p> }>
                {move || {
                    majors
                        .get()
                        .map(|result| match result {
                            Ok(majors) => {
                                view! {
                                    <div class="filter-sidebar__groups">
                                        {majors
                                            .into_iter()
                                            .map(|major| {
                                                view! {
                                                    <div class="filter-sidebar__group">
                                                        <h3>{major.name}</h3>
                                                        {major
                                                            .subjects
                                                            .into_iter()
                                                            .map(|subject| {
                                                                let id = subject.id.clone();
                                                                let check_id = subject.id.clone();
                                                                view! {
                                                                    <label class="filter-sidebar__subject">
                                                                        <input
                                                                            type="checkbox"
                                                                            prop:checked=move || {
                                                                                selected.get().iter().any(|s| *s == check_id)
                                                                            }
                                                                            on:change=move |_| {
                                                                                selected.update(|sel| {
                                                                                    *sel = toggle_subject(std::mem::take(sel), &id);
                                                                                });
                                                                            }
                                                                        />
                                                                        {subject.name}
                                                                    </label>
                                                                }
                                                            })
                                                            .collect::<Vec<_>>()}
                                                    </div>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(e) => {
                                view! { <p class="filter-sidebar__error">{e.message()}</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </aside>
    }
}
