//! Networking modules for the remote document API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues REST calls, `types` defines the wire schema, and `error`
//! classifies failures for the pages.

pub mod api;
pub mod error;
pub mod types;
