//! Shared session guard for authenticated routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every authenticated page re-validates the stored token on mount and
//! redirects to `/login` when it is absent, malformed, or expired. No error is
//! shown on that path; the redirect is the only signal.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;
use crate::util::{storage, time};

/// Route the login page sends users to after a successful sign-in.
pub const HOME_ROUTE: &str = "/";
/// Route unauthenticated users are redirected to.
pub const LOGIN_ROUTE: &str = "/login";

/// Where a page with this session should go, if anywhere.
pub fn redirect_target(state: &SessionState) -> Option<&'static str> {
    state.should_redirect().then_some(LOGIN_ROUTE)
}

/// Re-read the stored token and validate it against the clock, wiping
/// storage when the token is unusable.
pub fn restore_session(session: RwSignal<SessionState>) {
    let stored = storage::load_token();
    let now = time::now_secs();
    let mut must_clear = false;
    session.update(|state| must_clear = state.refresh(stored.as_deref(), now));
    if must_clear {
        storage::clear_token();
    }
}

/// Drop the session locally and in storage.
pub fn end_session(session: RwSignal<SessionState>) {
    storage::clear_token();
    session.update(SessionState::invalidate);
}

/// Validate on mount and redirect to `/login` whenever the session is gone.
pub fn install_session_guard<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || restore_session(session));
    Effect::new(move || {
        if let Some(target) = redirect_target(&session.get()) {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
