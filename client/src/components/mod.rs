//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page sections and report user actions back through
//! callbacks; pages own the state and the network calls.

pub mod chat_section;
pub mod document_card;
pub mod document_gallery;
pub mod document_section;
pub mod error_view;
pub mod file_upload;
pub mod loading;
pub mod logout_button;
