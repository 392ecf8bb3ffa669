//! Registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::types::RegisterRequest;
use crate::state::session::SessionStore;
use crate::state::toasts::Toaster;

/// Client-side checks before the request leaves the form.
pub fn validate_registration(
    full_name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(), &'static str> {
    if full_name.trim().is_empty() {
        return Err("Please enter your full name.");
    }
    if !email.contains('@') {
        return Err("Please enter a valid email address.");
    }
    if password.len() < 8 {
        return Err("Password must be at least 8 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(())
}

/// Account creation form; on success navigates to the login page.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let toaster = expect_context::<Toaster>();
    let navigate = use_navigate();

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let loading = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }

        let name_v = full_name.get_untracked();
        let email_v = email.get_untracked();
        let password_v = password.get_untracked();
        let confirm_v = confirm.get_untracked();
        if let Err(msg) = validate_registration(&name_v, &email_v, &password_v, &confirm_v) {
            toaster.error(msg);
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let req = RegisterRequest {
                    email: email_v,
                    full_name: name_v,
                    password: password_v,
                };
                match api::register(store, &req).await {
                    Ok(()) => {
                        toaster.success("Account created. Please sign in.");
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(e) => toaster.error(&e.message()),
                }
                loading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name_v, email_v, password_v, confirm_v, &navigate, &store);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create an account"</h1>
                <p class="auth-card__subtitle">"Join your classmates on UniShare"</p>

                <form class="auth-form" on:submit=submit>
                    <label class="auth-form__label">
                        "Full name"
                        <input
                            type="text"
                            required
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Email"
                        <input
                            type="email"
                            required
                            autocomplete="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            type="password"
                            required
                            autocomplete="new-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Confirm password"
                        <input
                            type="password"
                            required
                            autocomplete="new-password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Creating..." } else { "Register" }}
                    </button>
                </form>

                <p class="auth-card__footer">
                    "Already registered? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
