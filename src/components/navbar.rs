//! Top navigation bar with the global search input and session controls.

use leptos::prelude::*;

use crate::net::types::UserRole;
use crate::state::search::{self, SearchState};
use crate::state::session::SessionStore;

/// Navbar shown on all protected pages.
///
/// The search input feeds the shared debounced [`SearchState`]; the manager
/// link only appears for moderators and admins (the route itself is still
/// role-guarded).
#[component]
pub fn Navbar() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let search_state = expect_context::<RwSignal<SearchState>>();

    let is_staff = move || {
        store
            .user()
            .is_some_and(|u| matches!(u.role, UserRole::Moderator | UserRole::Admin))
    };
    let display_name = move || store.user().map(|u| u.full_name).unwrap_or_default();

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">
                "UniShare"
            </a>

            <input
                class="navbar__search"
                type="search"
                placeholder="Search documents..."
                prop:value=move || search_state.get().raw
                on:input=move |ev| {
                    search::set_search(search_state, event_target_value(&ev));
                }
            />

            <div class="navbar__links">
                <a href="/upload">"Upload"</a>
                <a href="/statistics">"Statistics"</a>
                <Show when=is_staff>
                    <a href="/admin/manager">"Manager"</a>
                </Show>
                <a class="navbar__profile" href="/profile/me">
                    {display_name}
                </a>
                <button class="btn" on:click=move |_| store.logout()>
                    "Sign out"
                </button>
            </div>
        </nav>
    }
}
