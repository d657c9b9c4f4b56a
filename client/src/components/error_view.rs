//! Full-page error with a way back to the gallery.

#[cfg(test)]
#[path = "error_view_test.rs"]
mod error_view_test;

use leptos::prelude::*;

/// Message shown when a page fails without a more specific reason.
pub const DEFAULT_ERROR: &str = "Document not found";
/// Label of the link back to the gallery.
pub const HOME_LINK_TEXT: &str = "← Return to Home";

fn display_message(message: Option<String>) -> String {
    message
        .filter(|text| !text.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_ERROR.to_owned())
}

#[component]
pub fn ErrorView(#[prop(optional, into)] message: Option<String>) -> impl IntoView {
    let message = display_message(message);

    view! {
        <div class="error-view">
            <p class="error-view__message">{message}</p>
            <a class="btn btn--primary error-view__home" href="/">
                {HOME_LINK_TEXT}
            </a>
        </div>
    }
}
