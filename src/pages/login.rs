//! Login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionStore;

/// Email/password form driving `SessionStore::login`.
///
/// Failure leaves the form intact with its loading flag cleared (the store
/// already raised the error toast); once the session is hydrated and
/// authenticated — by this login or a restored one — the page bounces home.
#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let loading = RwSignal::new(false);

    Effect::new(move || {
        let session = store.session();
        if session.has_hydrated && session.is_authenticated {
            navigate("/", NavigateOptions { replace: true, ..Default::default() });
        }
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            let email = email.get_untracked();
            let password = password.get_untracked();
            leptos::task::spawn_local(async move {
                // The store raises the toast on failure; the redirect effect
                // reacts on success. Either way the spinner stops.
                let _ = store.login(&email, &password).await;
                loading.set(false);
            });
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome back"</h1>
                <p class="auth-card__subtitle">"Sign in to access the document library"</p>

                <form class="auth-form" on:submit=submit>
                    <label class="auth-form__label">
                        "Email"
                        <input
                            type="email"
                            required
                            autocomplete="email"
                            placeholder="you@university.edu"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            type="password"
                            required
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <p class="auth-card__footer">
                    "No account yet? " <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
