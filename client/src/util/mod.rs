//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, clocks,
//! blobs, abort signals) from page and component logic to improve reuse and
//! testability.

pub mod auth;
pub mod download;
pub mod object_url;
pub mod scope;
pub mod storage;
pub mod time;
