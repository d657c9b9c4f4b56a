//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (session guard, view scope,
//! network calls) and delegates rendering details to `components`.

pub mod dashboard;
pub mod document;
pub mod login;
pub mod register;
