//! Client state shared through Leptos context.
//!
//! ARCHITECTURE
//! ============
//! Each module holds plain data plus the transitions pages apply to it. The
//! app root wraps the long-lived pieces (`session`) in `RwSignal`s; pages own
//! their per-view state (`documents`, `chat`, `upload`).

pub mod chat;
pub mod documents;
pub mod session;
pub mod upload;
