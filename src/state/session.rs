//! Session state: who is logged in, durable across reloads.
//!
//! DESIGN
//! ======
//! `Session` is a plain struct with pure transition methods, so the
//! invariants (authenticated implies user *and* token present; hydration is
//! monotonic) are enforced and tested without a browser. `SessionStore` is
//! the shared `Copy` handle over the one process-wide `RwSignal<Session>`,
//! provided via context; it owns the only writes to durable storage
//! (write-through on login and profile updates, key removal on logout) and
//! emits the toast at each observable transition.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::net::api;
use crate::net::client::ApiError;
use crate::net::types::User;
use crate::state::toasts::Toaster;
use crate::util::storage;

/// localStorage key holding the serialized session triple.
pub const STORAGE_KEY: &str = "auth-storage";

/// In-memory session record.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_authenticated: bool,
    /// True once the one-time restore from durable storage has finished,
    /// whether or not a prior session existed. Never reverts.
    pub has_hydrated: bool,
}

impl Session {
    /// Adopt a successful login: user, token, and the flag change together.
    pub fn establish(&mut self, user: User, token: String) {
        self.user = Some(user);
        self.token = Some(token);
        self.is_authenticated = true;
    }

    /// Clear the session triple. Idempotent; hydration state is untouched.
    pub fn clear(&mut self) {
        self.user = None;
        self.token = None;
        self.is_authenticated = false;
    }

    /// Replace the stored profile without touching token or auth flag.
    pub fn set_user(&mut self, user: User) {
        self.user = Some(user);
    }

    pub fn mark_hydrated(&mut self) {
        self.has_hydrated = true;
    }

    /// Apply the outcome of the startup storage read.
    ///
    /// Only a complete triple is adopted; a partial or unauthenticated record
    /// counts as "no prior session". Hydration completes either way.
    pub fn restore(&mut self, record: Option<PersistedSession>) {
        if let Some(record) = record {
            if record.is_authenticated {
                if let (Some(user), Some(token)) = (record.user, record.token) {
                    self.establish(user, token);
                }
            }
        }
        self.mark_hydrated();
    }
}

/// The durable form of the session, as stored under [`STORAGE_KEY`].
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSession {
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_authenticated: bool,
}

impl From<&Session> for PersistedSession {
    fn from(session: &Session) -> Self {
        Self {
            user: session.user.clone(),
            token: session.token.clone(),
            is_authenticated: session.is_authenticated,
        }
    }
}

/// Shared handle over the single session instance.
#[derive(Clone, Copy)]
pub struct SessionStore {
    inner: RwSignal<Session>,
    toaster: Toaster,
}

impl SessionStore {
    /// Create a fresh, un-hydrated store. One per running client.
    pub fn new(toaster: Toaster) -> Self {
        Self { inner: RwSignal::new(Session::default()), toaster }
    }

    /// Reactive read of the whole session.
    pub fn session(&self) -> Session {
        self.inner.get()
    }

    /// Reactive read of the current user.
    pub fn user(&self) -> Option<User> {
        self.inner.with(|s| s.user.clone())
    }

    /// Latest token without subscribing; the API client reads this at send
    /// time so in-flight state never goes stale.
    pub fn token_untracked(&self) -> Option<String> {
        self.inner.with_untracked(|s| s.token.clone())
    }

    pub fn is_authenticated_untracked(&self) -> bool {
        self.inner.with_untracked(|s| s.is_authenticated)
    }

    /// One-time restore of persisted state. Safe to call repeatedly; only the
    /// first call does anything.
    pub fn hydrate(&self) {
        if self.inner.with_untracked(|s| s.has_hydrated) {
            return;
        }
        let record = storage::read(STORAGE_KEY)
            .and_then(|raw| serde_json::from_str::<PersistedSession>(&raw).ok());
        self.inner.update(|s| s.restore(record));
    }

    /// Exchange credentials for a session.
    ///
    /// On success the triple is established atomically and persisted. On
    /// failure state is left untouched and the error is returned so the
    /// calling form can clear its loading indicator.
    pub async fn login(self, email: &str, password: &str) -> Result<(), ApiError> {
        match api::login(self, email, password).await {
            Ok(resp) => {
                self.inner.update(|s| s.establish(resp.user, resp.access_token));
                self.persist();
                self.toaster.success("Signed in successfully.");
                Ok(())
            }
            Err(err) => {
                self.toaster.error(&err.message());
                Err(err)
            }
        }
    }

    /// Clear the session and drop the persisted record. Idempotent.
    pub fn logout(&self) {
        self.inner.update(Session::clear);
        storage::remove(STORAGE_KEY);
        self.toaster.success("Signed out.");
    }

    /// Logout forced by a server-side 401 on an authenticated call.
    pub fn force_logout(&self) {
        if !self.is_authenticated_untracked() {
            return;
        }
        self.inner.update(Session::clear);
        storage::remove(STORAGE_KEY);
        self.toaster.error("Your session has expired. Please sign in again.");
    }

    /// Replace the stored profile after a profile edit completed elsewhere.
    pub fn set_user(&self, user: User) {
        self.inner.update(|s| s.set_user(user));
        self.persist();
    }

    /// Write-through of the persisted triple.
    fn persist(&self) {
        let record = self.inner.with_untracked(|s| PersistedSession::from(s));
        match serde_json::to_string(&record) {
            Ok(raw) => storage::write(STORAGE_KEY, &raw),
            Err(e) => leptos::logging::warn!("failed to serialize session: {e}"),
        }
    }
}
