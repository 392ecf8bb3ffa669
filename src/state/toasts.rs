//! Toast notification state.
//!
//! The session store and the guards report their observable transitions
//! (login success/failure, logout, authorization denial) through this
//! surface; `ToastHost` renders the queue.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

use leptos::prelude::*;

/// Visual category of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A single queued notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub kind: ToastKind,
    pub message: String,
}

/// Ordered queue of visible toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

impl ToastState {
    /// Queue a toast and return its id for later dismissal.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.toasts.push(Toast { id: id.clone(), kind, message: message.into() });
        id
    }

    /// Remove a toast by id. Unknown ids are a no-op.
    pub fn dismiss(&mut self, id: &str) {
        self.toasts.retain(|t| t.id != id);
    }
}

/// How long a toast stays on screen.
#[cfg(feature = "hydrate")]
const DISMISS_AFTER_MS: u64 = 4000;

/// Shared handle over the toast queue, provided via context.
#[derive(Clone, Copy)]
pub struct Toaster {
    inner: RwSignal<ToastState>,
}

impl Toaster {
    pub fn new() -> Self {
        Self { inner: RwSignal::new(ToastState::default()) }
    }

    /// The underlying signal, for rendering by `ToastHost`.
    pub fn signal(&self) -> RwSignal<ToastState> {
        self.inner
    }

    pub fn success(&self, message: &str) {
        self.show(ToastKind::Success, message);
    }

    pub fn error(&self, message: &str) {
        self.show(ToastKind::Error, message);
    }

    pub fn dismiss(&self, id: &str) {
        let id = id.to_owned();
        self.inner.update(|s| s.dismiss(&id));
    }

    fn show(&self, kind: ToastKind, message: &str) {
        let id = self
            .inner
            .try_update(|s| s.push(kind, message))
            .unwrap_or_default();

        // Auto-dismiss after a fixed delay; browser only.
        #[cfg(feature = "hydrate")]
        {
            let inner = self.inner;
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(DISMISS_AFTER_MS))
                    .await;
                let _ = inner.try_update(|s| s.dismiss(&id));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}
