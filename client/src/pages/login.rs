//! Login page exchanging name + password for a bearer token.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::error::ApiError;
use crate::net::types::Credentials;
use crate::state::session::SessionState;

/// Trim the name and require both fields.
pub(crate) fn validate_credentials(name: &str, password: &str) -> Result<Credentials, &'static str> {
    let name = name.trim();
    if name.is_empty() || password.is_empty() {
        return Err("Enter both name and password.");
    }
    Ok(Credentials { name: name.to_owned(), password: password.to_owned() })
}

fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Transport(_) => "Error logging in.".to_owned(),
        other => other.user_message("Invalid name or password."),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
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
                match crate::net::api::login(&credentials).await {
                    Ok(token) => {
                        let now = crate::util::time::now_secs();
                        let accepted = session.try_update(|state| state.sign_in(&token, now)).unwrap_or(false);
                        if accepted {
                            crate::util::storage::save_token(&token);
                            navigate(crate::util::auth::HOME_ROUTE, NavigateOptions::default());
                        } else {
                            leptos::logging::warn!("login returned an unusable token");
                            error.set(Some("Invalid name or password.".to_owned()));
                        }
                    }
                    Err(err) => {
                        leptos::logging::warn!("login failed: {err}");
                        error.set(Some(login_error_message(&err)));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (credentials, session, &navigate);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Log in to your account"</h1>
                <p class="login-card__subtitle">
                    "Or " <a href="/register">"register a new account"</a>
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
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || error.get().is_some()>
                        <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Log In" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
