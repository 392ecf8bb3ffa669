//! Top-level routed pages.

pub mod admin;
pub mod document;
pub mod home;
pub mod login;
pub mod profile;
pub mod register;
pub mod statistics;
pub mod upload;
