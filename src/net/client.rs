//! Single egress point for backend HTTP calls.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since the REST backend is only
//! reachable from the browser.
//!
//! Every request flows through the same pipeline: resolve the URL under the
//! API base, read the bearer token from the session store *at send time*,
//! attach the `Authorization` header when present, then run the shared
//! response stage. The response stage owns the one global failure rule: a 401
//! while the store believes itself authenticated forces a logout, and the
//! triggering call still fails with its own error. Everything else propagates
//! to the caller unchanged — no retries, no caching.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::state::session::SessionStore;

/// All backend routes are mounted under this prefix.
pub const API_BASE: &str = "/api";

/// Resolve an endpoint path against the API base.
pub fn api_url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

/// Error returned by every API call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// Transport-level failure (offline, DNS, aborted).
    Network(String),
    /// The response body could not be decoded into the expected type.
    Decode(String),
    /// Non-2xx response, with the backend's `{ message }` when present.
    Http { status: u16, message: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Decode(msg) => write!(f, "invalid response: {msg}"),
            ApiError::Http { status, message } => write!(f, "{message} ({status})"),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// User-facing message for toasts and inline form errors.
    pub fn message(&self) -> String {
        match self {
            ApiError::Network(_) => "Could not reach the server.".to_owned(),
            ApiError::Decode(_) => "Unexpected server response.".to_owned(),
            ApiError::Http { message, .. } => message.clone(),
        }
    }
}

/// Format a token as an `Authorization` header value.
pub fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// A 401 invalidates the local session only when the store currently thinks
/// it is authenticated. Unauthenticated 401s (e.g. a rejected login) stay
/// local to their caller.
pub fn should_force_logout(status: u16, is_authenticated: bool) -> bool {
    status == 401 && is_authenticated
}

/// Extract the backend's error message from a JSON error body.
/// Prefers `message`, falls back to `error`.
pub fn error_message(body: &serde_json::Value) -> Option<&str> {
    body.get("message")
        .and_then(|v| v.as_str())
        .or_else(|| body.get("error").and_then(|v| v.as_str()))
}

/// Attach the current bearer token, if any, to an outgoing request.
#[cfg(feature = "hydrate")]
fn authorized(
    builder: gloo_net::http::RequestBuilder,
    store: SessionStore,
) -> gloo_net::http::RequestBuilder {
    match store.token_untracked() {
        Some(token) => builder.header("Authorization", &bearer_value(&token)),
        None => builder,
    }
}

/// Shared response stage: 401 handling, error decoding, body decoding.
#[cfg(feature = "hydrate")]
async fn finish<T: DeserializeOwned>(
    store: SessionStore,
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if resp.ok() {
        return resp
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()));
    }

    let status = resp.status();
    let body = resp.json::<serde_json::Value>().await.ok();
    let message = body
        .as_ref()
        .and_then(error_message)
        .unwrap_or("Request failed.")
        .to_owned();

    if should_force_logout(status, store.is_authenticated_untracked()) {
        leptos::logging::warn!("session rejected by server, forcing logout");
        store.force_logout();
    }

    Err(ApiError::Http { status, message })
}

/// `GET` an endpoint and decode the JSON response.
pub async fn get_json<T: DeserializeOwned>(store: SessionStore, path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::get(&api_url(path)), store)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        finish(store, resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (store, path);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// `POST` a JSON body and decode the JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    store: SessionStore,
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::post(&api_url(path)), store)
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        finish(store, resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (store, path, body);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// `POST` with no body and decode the JSON response.
pub async fn post_empty<T: DeserializeOwned>(
    store: SessionStore,
    path: &str,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::post(&api_url(path)), store)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        finish(store, resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (store, path);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// `PATCH` a JSON body and decode the JSON response.
pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
    store: SessionStore,
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::patch(&api_url(path)), store)
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        finish(store, resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (store, path, body);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// `DELETE` an endpoint and decode the JSON response.
pub async fn delete<T: DeserializeOwned>(store: SessionStore, path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::delete(&api_url(path)), store)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        finish(store, resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (store, path);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// `POST` a multipart form and decode the JSON response.
///
/// No content-type header is set here: the browser supplies the multipart
/// boundary itself, and forcing JSON would corrupt the payload.
#[cfg(feature = "hydrate")]
pub async fn post_form<T: DeserializeOwned>(
    store: SessionStore,
    path: &str,
    form: web_sys::FormData,
) -> Result<T, ApiError> {
    let resp = authorized(gloo_net::http::Request::post(&api_url(path)), store)
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    finish(store, resp).await
}
