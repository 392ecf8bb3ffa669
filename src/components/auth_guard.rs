//! Hydration-gated authentication guard.
//!
//! Wraps a protected view tree and only releases it once the persisted
//! session has been restored *and* the user is authenticated. Before
//! restoration completes, nothing is decided — redirecting early would bounce
//! an actually-logged-in user to the login page during the restore window.

#[cfg(test)]
#[path = "auth_guard_test.rs"]
mod auth_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{Session, SessionStore};

/// The guard's three states, derived fresh from the session on every read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthGate {
    /// Persisted state not yet restored; render a placeholder, decide nothing.
    Restoring,
    /// Restore finished and nobody is logged in; redirect once.
    Unauthenticated,
    /// Render the protected content.
    Authenticated,
}

pub fn auth_gate(session: &Session) -> AuthGate {
    if !session.has_hydrated {
        AuthGate::Restoring
    } else if session.is_authenticated {
        AuthGate::Authenticated
    } else {
        AuthGate::Unauthenticated
    }
}

/// Edge trigger for guard side effects.
///
/// `trigger` returns true only on the first call after construction or a
/// `reset`, so a redirect or toast tied to entering a denying state fires
/// once per entry, not once per render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EdgeLatch {
    engaged: bool,
}

impl EdgeLatch {
    /// Engage the latch; true when it was not already engaged.
    pub fn trigger(&mut self) -> bool {
        if self.engaged {
            false
        } else {
            self.engaged = true;
            true
        }
    }

    /// Re-arm the latch on leaving the denying state.
    pub fn reset(&mut self) {
        self.engaged = false;
    }
}

/// Guard wrapper for routes that require a signed-in user.
#[component]
pub fn AuthGuard(children: ChildrenFn) -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();

    // Latched per entry into Unauthenticated: the redirect fires on the
    // transition, not on every render while the navigation completes.
    let redirected = StoredValue::new(EdgeLatch::default());

    Effect::new(move || match auth_gate(&store.session()) {
        AuthGate::Unauthenticated => {
            if redirected.try_update_value(EdgeLatch::trigger).unwrap_or(false) {
                navigate("/login", NavigateOptions { replace: true, ..Default::default() });
            }
        }
        AuthGate::Authenticated => redirected.update_value(EdgeLatch::reset),
        AuthGate::Restoring => {}
    });

    view! {
        {move || match auth_gate(&store.session()) {
            AuthGate::Restoring => {
                view! { <div class="guard-screen">"Restoring session..."</div> }.into_any()
            }
            AuthGate::Unauthenticated => {
                view! { <div class="guard-screen">"Redirecting to sign-in..."</div> }.into_any()
            }
            AuthGate::Authenticated => children().into_any(),
        }}
    }
}
