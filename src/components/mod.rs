//! Reusable UI components shared across pages.

pub mod auth_guard;
pub mod document_card;
pub mod filter_sidebar;
pub mod navbar;
pub mod role_guard;
pub mod sort_dropdown;
pub mod toast_host;
