//! Logout action shared by authenticated pages.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::util::auth::{LOGIN_ROUTE, end_session};

#[component]
pub fn LogoutButton() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        end_session(session);
        navigate(LOGIN_ROUTE, NavigateOptions::default());
    };

    view! {
        <button class="btn btn--danger toolbar__logout" on:click=on_logout title="Logout">
            "Logout"
        </button>
    }
}
