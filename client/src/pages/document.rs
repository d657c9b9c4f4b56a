//! Document detail page: the document beside its chat thread.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads the document and its message history whenever the `:id` route param
//! changes. Sends are optimistic; a successful create is followed by a full
//! history refresh so the assistant's reply shows up. The PDF report is built
//! from whatever is on screen at the moment Download is clicked.
//!
//! Every request carries the page's `ViewScope`, so leaving the page aborts
//! anything still in flight.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::chat_section::ChatSection;
use crate::components::document_section::DocumentSection;
use crate::components::error_view::{DEFAULT_ERROR, ErrorView};
use crate::components::loading::Loading;
use crate::net::error::ApiError;
use crate::report::ReportError;
use crate::state::chat::{ChatState, PendingSend};
use crate::state::documents::{DocumentViewState, LoadState};
use crate::state::session::SessionState;
use crate::util::auth::{end_session, install_session_guard};
use crate::util::scope::ViewScope;

/// Reason shown on a chat entry whose create request failed.
fn send_failure_reason(err: &ApiError) -> String {
    match err {
        ApiError::Transport(_) => "network error".to_owned(),
        other => other.user_message("the server rejected the message"),
    }
}

fn report_error_text(err: &ReportError) -> String {
    match err {
        ReportError::Pdf(_) => "Failed to generate the PDF report.".to_owned(),
    }
}

#[component]
pub fn DocumentPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_session_guard(session, use_navigate());
    let scope = ViewScope::install();
    let params = use_params_map();

    let document_id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));
    let authenticated = Memo::new(move |_| session.with(SessionState::is_authenticated));
    let view_state = RwSignal::new(DocumentViewState::default());
    let chat = RwSignal::new(ChatState::default());
    let download_error = RwSignal::new(None::<String>);

    let on_unauthorized = Callback::new(move |()| end_session(session));
    let refresh_messages = Callback::new({
        let scope = scope.clone();
        move |()| refresh_chat(&scope, session, chat, on_unauthorized)
    });

    Effect::new({
        let scope = scope.clone();
        move || {
            let id = document_id.get();
            if !authenticated.get() {
                return;
            }
            if id.trim().is_empty() {
                view_state.update(|state| state.document = LoadState::Failed(DEFAULT_ERROR.to_owned()));
                return;
            }
            download_error.set(None);
            chat.update(|state| state.reset(&id));
            load_document(&scope, session, view_state, &id, on_unauthorized);
            refresh_messages.run(());
        }
    });

    on_cleanup(move || {
        let _ = view_state.try_update(DocumentViewState::release);
    });

    let on_send = Callback::new({
        let scope = scope.clone();
        move |text: String| {
            let local_id = uuid::Uuid::new_v4().to_string();
            let sent_at = crate::util::time::rfc3339_from_millis(crate::util::time::now_millis());
            let pending = chat.try_update(|state| state.append(&text, local_id, sent_at)).flatten();
            if let Some(pending) = pending {
                submit_message(&scope, session, chat, pending, refresh_messages, on_unauthorized);
            }
        }
    });

    let on_retry = Callback::new({
        let scope = scope.clone();
        move |local_id: String| {
            if let Some(pending) = chat.try_update(|state| state.retry(&local_id)).flatten() {
                submit_message(&scope, session, chat, pending, refresh_messages, on_unauthorized);
            }
        }
    });

    let on_discard = Callback::new(move |local_id: String| {
        chat.update(|state| {
            state.discard(&local_id);
        });
    });

    let on_download = Callback::new(move |()| {
        let Some(document) = view_state.with_untracked(|state| state.document.loaded().cloned()) else {
            return;
        };
        let entries = chat.with_untracked(ChatState::sorted);
        let saved = crate::report::build_report(&document, &entries)
            .map_err(|err| {
                leptos::logging::warn!("report for {} failed: {err}", document.id);
                report_error_text(&err)
            })
            .and_then(|(filename, bytes)| {
                crate::util::download::save_bytes(&bytes, &filename, "application/pdf").map_err(|err| {
                    leptos::logging::warn!("saving {filename} failed: {err}");
                    "Failed to save the PDF report.".to_owned()
                })
            });
        download_error.set(saved.err());
    });

    let entries = Signal::derive(move || chat.with(ChatState::sorted));
    let awaiting_reply = Signal::derive(move || chat.with(ChatState::awaiting_reply));

    view! {
        <Show
            when=move || authenticated.get()
            fallback=|| view! { <Loading message="Checking session..."/> }
        >
            {move || {
                view_state.with(|state| match &state.document {
                    LoadState::Loading => view! { <Loading message="Loading document..."/> }.into_any(),
                    LoadState::Failed(message) => view! { <ErrorView message=message.clone()/> }.into_any(),
                    LoadState::Loaded(document) => {
                        view! {
                            <div class="document-page">
                                <a class="document-page__back" href="/">"← Back to Documents"</a>
                                <div class="document-page__columns">
                                    <DocumentSection
                                        document=document.clone()
                                        on_download=on_download
                                        download_error=download_error
                                    />
                                    <ChatSection
                                        entries=entries
                                        awaiting_reply=awaiting_reply
                                        on_send=on_send
                                        on_retry=on_retry
                                        on_discard=on_discard
                                    />
                                </div>
                            </div>
                        }
                            .into_any()
                    }
                })
            }}
        </Show>
    }
}

fn load_document(
    scope: &ViewScope,
    session: RwSignal<SessionState>,
    view_state: RwSignal<DocumentViewState>,
    id: &str,
    on_unauthorized: Callback<()>,
) {
    let Some(token) = session.get_untracked().token_str() else {
        return;
    };
    let Some(ticket) = view_state.try_update(DocumentViewState::begin_load) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    {
        let scope = scope.clone();
        let id = id.to_owned();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_document(&token, &id, &scope).await;
            if !scope.is_alive() {
                return;
            }
            if let Err(err) = &result {
                leptos::logging::warn!("document {id} failed to load: {err}");
                if err.is_unauthorized() {
                    on_unauthorized.run(());
                    return;
                }
            }
            view_state.update(|state| {
                state.apply(ticket, result);
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (scope, token, id, ticket, on_unauthorized);
}

fn refresh_chat(scope: &ViewScope, session: RwSignal<SessionState>, chat: RwSignal<ChatState>, on_unauthorized: Callback<()>) {
    let Some(token) = session.get_untracked().token_str() else {
        return;
    };
    let Some(document_id) = chat.with_untracked(|state| state.document_id.clone()) else {
        return;
    };
    let Some(ticket) = chat.try_update(ChatState::begin_refresh) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    {
        let scope = scope.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_messages(&token, &document_id, &scope).await;
            if !scope.is_alive() {
                return;
            }
            match result {
                Ok(history) => chat.update(|state| {
                    state.apply_history(ticket, history);
                }),
                Err(err) if err.is_unauthorized() => on_unauthorized.run(()),
                Err(err) => leptos::logging::warn!("messages for {document_id} failed to load: {err}"),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (scope, token, document_id, ticket, on_unauthorized);
}

fn submit_message(
    scope: &ViewScope,
    session: RwSignal<SessionState>,
    chat: RwSignal<ChatState>,
    pending: PendingSend,
    refresh_messages: Callback<()>,
    on_unauthorized: Callback<()>,
) {
    let Some(document_id) = chat.with_untracked(|state| state.document_id.clone()) else {
        return;
    };
    let Some(token) = session.get_untracked().token_str() else {
        chat.update(|state| state.fail(&pending.local_id, "signed out".to_owned()));
        on_unauthorized.run(());
        return;
    };

    #[cfg(feature = "hydrate")]
    {
        let scope = scope.clone();
        leptos::task::spawn_local(async move {
            let result =
                crate::net::api::create_message(&token, &document_id, &pending.content, pending.order, &scope).await;
            if !scope.is_alive() {
                return;
            }
            match result {
                Ok(()) => {
                    chat.update(|state| state.confirm(&pending.local_id));
                    refresh_messages.run(());
                }
                Err(err) => {
                    leptos::logging::warn!("message {} for {document_id} failed: {err}", pending.order);
                    chat.update(|state| state.fail(&pending.local_id, send_failure_reason(&err)));
                    if err.is_unauthorized() {
                        on_unauthorized.run(());
                    }
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (scope, token, document_id, refresh_messages);
}
