//! Role-based view guard, composed inside `AuthGuard`.
//!
//! Waits for the user profile before deciding anything (no false-positive
//! denial flicker while data loads), then either renders the children or
//! emits one "not authorized" toast and one redirect per denial event.

#[cfg(test)]
#[path = "role_guard_test.rs"]
mod role_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::auth_guard::EdgeLatch;
use crate::net::types::{User, UserRole};
use crate::state::session::SessionStore;
use crate::state::toasts::Toaster;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoleGate {
    /// User not loaded yet; never assume denial.
    Loading,
    Allowed,
    Denied,
}

pub fn role_gate(user: Option<&User>, allowed: &[UserRole]) -> RoleGate {
    match user {
        None => RoleGate::Loading,
        Some(user) if allowed.contains(&user.role) => RoleGate::Allowed,
        Some(_) => RoleGate::Denied,
    }
}

/// Guard wrapper restricting a view tree to an allow-list of roles.
#[component]
pub fn RoleGuard(allowed: Vec<UserRole>, children: ChildrenFn) -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let toaster = expect_context::<Toaster>();
    let navigate = use_navigate();

    // One toast and one redirect per denial event, not per render.
    let handled = StoredValue::new(EdgeLatch::default());

    let allowed_effect = allowed.clone();
    Effect::new(move || match role_gate(store.user().as_ref(), &allowed_effect) {
        RoleGate::Denied => {
            if handled.try_update_value(EdgeLatch::trigger).unwrap_or(false) {
                toaster.error("You are not authorized to view this page.");
                navigate("/", NavigateOptions { replace: true, ..Default::default() });
            }
        }
        RoleGate::Allowed => handled.update_value(EdgeLatch::reset),
        RoleGate::Loading => {}
    });

    view! {
        {move || match role_gate(store.user().as_ref(), &allowed) {
            RoleGate::Loading => {
                view! { <div class="guard-screen">"Loading profile..."</div> }.into_any()
            }
            RoleGate::Denied => {
                view! { <div class="guard-screen">"Not authorized. Redirecting..."</div> }
                    .into_any()
            }
            RoleGate::Allowed => children().into_any(),
        }}
    }
}
