//! Fixed overlay rendering the toast queue.

use leptos::prelude::*;

use crate::state::toasts::{ToastKind, Toaster};

/// Renders every queued toast; clicking one dismisses it early.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = expect_context::<Toaster>();
    let state = toaster.signal();

    view! {
        <div class="toast-host">
            <For
                each=move || state.get().toasts
                key=|toast| toast.id.clone()
                children=move |toast| {
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                    };
                    let id = toast.id.clone();
                    view! {
                        <div class=class on:click=move |_| toaster.dismiss(&id)>
                            {toast.message.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
