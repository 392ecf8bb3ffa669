//! Network layer: wire types, the HTTP client pipeline, and endpoint calls.

pub mod api;
pub mod client;
pub mod types;
