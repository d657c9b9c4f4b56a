//! Home page: upload form above the document gallery.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It loads the gallery once the
//! session is confirmed, refetches after uploads and deletions, and hands a
//! 401 from any call back to the session guard.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::document_gallery::DocumentGallery;
use crate::components::file_upload::FileUpload;
use crate::components::loading::Loading;
use crate::components::logout_button::LogoutButton;
use crate::net::error::ApiError;
use crate::state::documents::{GalleryState, LoadState};
use crate::state::session::SessionState;
use crate::util::auth::{end_session, install_session_guard};
use crate::util::scope::ViewScope;

fn delete_error_message(err: &ApiError) -> String {
    err.user_message("Failed to delete document.")
}

/// Gallery page. Redirects to `/login` if the session is missing or expired.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_session_guard(session, use_navigate());
    let scope = ViewScope::install();

    let gallery = RwSignal::new(GalleryState::default());
    let delete_id = RwSignal::new(None::<String>);
    let authenticated = Memo::new(move |_| session.with(SessionState::is_authenticated));

    let on_unauthorized = Callback::new(move |()| end_session(session));
    let reload = Callback::new({
        let scope = scope.clone();
        move |()| load_gallery(&scope, session, gallery, on_unauthorized)
    });

    Effect::new(move || {
        if authenticated.get() {
            reload.run(());
        }
    });

    let on_delete_request = Callback::new(move |id: String| delete_id.set(Some(id)));
    let on_delete_cancel = Callback::new(move |()| delete_id.set(None));
    let on_delete_confirm = Callback::new({
        let scope = scope.clone();
        move |id: String| {
            delete_id.set(None);
            delete_document(&scope, session, gallery, &id, reload, on_unauthorized);
        }
    });

    let documents = Signal::derive(move || gallery.with(|state| state.items.loaded().cloned().unwrap_or_default()));

    view! {
        <Show
            when=move || authenticated.get()
            fallback=|| view! { <Loading message="Checking session..."/> }
        >
            <div class="dashboard-page">
                <header class="dashboard-page__header toolbar">
                    <span class="toolbar__board-name">"Documents"</span>
                    <span class="toolbar__spacer"></span>
                    <LogoutButton/>
                </header>

                <FileUpload scope=scope.clone() on_uploaded=reload on_unauthorized=on_unauthorized/>

                <Show when=move || gallery.with(|state| state.delete_error.is_some())>
                    <p class="dashboard-page__error">
                        {move || gallery.with(|state| state.delete_error.clone().unwrap_or_default())}
                    </p>
                </Show>

                {move || {
                    gallery.with(|state| match &state.items {
                        LoadState::Loading => view! { <Loading message="Loading documents..."/> }.into_any(),
                        LoadState::Failed(message) => {
                            view! { <p class="dashboard-page__error">{message.clone()}</p> }.into_any()
                        }
                        LoadState::Loaded(_) => {
                            view! { <DocumentGallery documents=documents on_delete=on_delete_request/> }.into_any()
                        }
                    })
                }}

                <Show when=move || delete_id.get().is_some()>
                    <DeleteDocumentDialog
                        document_id=delete_id
                        on_cancel=on_delete_cancel
                        on_confirm=on_delete_confirm
                    />
                </Show>
            </div>
        </Show>
    }
}

#[component]
fn DeleteDocumentDialog(
    document_id: RwSignal<Option<String>>,
    on_cancel: Callback<()>,
    on_confirm: Callback<String>,
) -> impl IntoView {
    let submit = Callback::new(move |()| {
        if let Some(id) = document_id.get_untracked() {
            on_confirm.run(id);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Document"</h2>
                <p class="dialog__danger">
                    "This will permanently delete this document and its chat history."
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| submit.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}

fn load_gallery(
    scope: &ViewScope,
    session: RwSignal<SessionState>,
    gallery: RwSignal<GalleryState>,
    on_unauthorized: Callback<()>,
) {
    let Some(token) = session.get_untracked().token_str() else {
        return;
    };
    let Some(ticket) = gallery.try_update(GalleryState::begin_load) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    {
        let scope = scope.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::list_documents(&token, &scope).await;
            if !scope.is_alive() {
                return;
            }
            if let Err(err) = &result {
                leptos::logging::warn!("gallery load failed: {err}");
                if err.is_unauthorized() {
                    on_unauthorized.run(());
                    return;
                }
            }
            gallery.update(|state| {
                state.apply(ticket, result);
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (scope, token, ticket, on_unauthorized);
}

fn delete_document(
    scope: &ViewScope,
    session: RwSignal<SessionState>,
    gallery: RwSignal<GalleryState>,
    id: &str,
    reload: Callback<()>,
    on_unauthorized: Callback<()>,
) {
    let Some(token) = session.get_untracked().token_str() else {
        return;
    };
    gallery.update(|state| state.delete_error = None);

    #[cfg(feature = "hydrate")]
    {
        let scope = scope.clone();
        let id = id.to_owned();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::delete_document(&token, &id, &scope).await;
            if !scope.is_alive() {
                return;
            }
            match result {
                Ok(()) => {
                    gallery.update(|state| state.remove(&id));
                    reload.run(());
                }
                Err(err) if err.is_unauthorized() => on_unauthorized.run(()),
                Err(err) => {
                    leptos::logging::warn!("delete of {id} failed: {err}");
                    gallery.update(|state| state.delete_error = Some(delete_error_message(&err)));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (scope, token, id, reload, on_unauthorized);
}
