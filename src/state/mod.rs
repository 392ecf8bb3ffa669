//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `search`, `toasts`) so individual
//! components can depend on small focused models. Each module keeps its
//! transition logic on plain structs, with a thin `Copy` handle over an
//! `RwSignal` for components.

pub mod search;
pub mod session;
pub mod toasts;
