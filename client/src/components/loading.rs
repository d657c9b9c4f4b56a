//! Full-page loading indicator.

use leptos::prelude::*;

#[component]
pub fn Loading(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="loading-view">
            <span class="spinner" aria-hidden="true"></span>
            <span class="loading-view__message">{message}</span>
        </div>
    }
}
