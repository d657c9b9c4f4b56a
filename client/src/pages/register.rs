//! Account registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::error::ApiError;
use crate::pages::login::validate_credentials;

fn register_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Transport(_) => "Error registering.".to_owned(),
        other => other.user_message("Registration failed."),
    }
}

/// Registration form. On success the user is sent to `/login` to sign in.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match validate_credentials(&name.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&credentials).await {
                    Ok(()) => navigate(crate::util::auth::LOGIN_ROUTE, NavigateOptions::default()),
                    Err(err) => {
                        leptos::logging::warn!("registration failed: {err}");
                        error.set(Some(register_error_message(&err)));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (credentials, &navigate);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Register a new account"</h1>
                <p class="login-card__subtitle">
                    "Or " <a href="/login">"log in to your account"</a>
                </p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label">
                        "Name"
                        <input
                            class="login-input"
                            type="text"
                            autocomplete="username"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-label">
                        "Password"
                        <input
                            class="login-input"
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || error.get().is_some()>
                        <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
