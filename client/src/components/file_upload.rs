//! Single-file upload form for the home page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Posts the selected file to the API, shows a transient notice for the
//! outcome, and asks the page to refetch the gallery on success.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::state::upload::UploadState;
#[cfg(feature = "hydrate")]
use crate::state::upload::{NOTICE_DISMISS_MS, UploadOutcome, validate_selection};
use crate::util::scope::ViewScope;

#[component]
pub fn FileUpload(
    scope: ViewScope,
    on_uploaded: Callback<()>,
    on_unauthorized: Callback<()>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let upload = RwSignal::new(UploadState::default());
    let file_ref = NodeRef::<leptos::html::Input>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        submit(&scope, session, upload, file_ref, on_uploaded, on_unauthorized);
        #[cfg(not(feature = "hydrate"))]
        let _ = (&scope, session, file_ref, on_uploaded, on_unauthorized);
    };

    view! {
        <form class="file-upload" on:submit=on_submit>
            <h2 class="file-upload__title">"Upload a document"</h2>
            <input class="file-upload__input" type="file" accept="image/*" node_ref=file_ref/>
            <button
                class="btn btn--primary file-upload__submit"
                type="submit"
                disabled=move || upload.get().uploading
            >
                {move || if upload.get().uploading { "Uploading..." } else { "Upload" }}
            </button>
            <Show when=move || upload.get().notice.is_some()>
                <p class="file-upload__notice" role="status">
                    {move || upload.get().notice.unwrap_or_default()}
                </p>
            </Show>
        </form>
    }
}

#[cfg(feature = "hydrate")]
fn submit(
    scope: &ViewScope,
    session: RwSignal<SessionState>,
    upload: RwSignal<UploadState>,
    file_ref: NodeRef<leptos::html::Input>,
    on_uploaded: Callback<()>,
    on_unauthorized: Callback<()>,
) {
    let Some(input) = file_ref.get_untracked() else {
        return;
    };
    let files = input.files();
    let count = files.as_ref().map_or(0, web_sys::FileList::length);
    if let Err(message) = validate_selection(count) {
        schedule_dismiss(upload, upload.try_update(|state| state.show_notice(message)));
        return;
    }
    let Some(file) = files.and_then(|list| list.get(0)) else {
        return;
    };
    let Some(token) = session.get_untracked().token_str() else {
        on_unauthorized.run(());
        return;
    };
    if !upload.try_update(UploadState::begin).unwrap_or(false) {
        return;
    }

    let scope = scope.clone();
    leptos::task::spawn_local(async move {
        let result = crate::net::api::upload_document(&token, &file, &scope).await;
        if !scope.is_alive() {
            return;
        }
        let outcome = UploadOutcome::from_result(&result);
        if let Err(err) = &result {
            leptos::logging::warn!("upload of {} failed: {err}", file.name());
            if err.is_unauthorized() {
                on_unauthorized.run(());
            }
        }
        schedule_dismiss(upload, upload.try_update(|state| state.finish(outcome)));
        if outcome == UploadOutcome::Success {
            input.set_value("");
            on_uploaded.run(());
        }
    });
}

#[cfg(feature = "hydrate")]
fn schedule_dismiss(upload: RwSignal<UploadState>, ticket: Option<u64>) {
    let Some(ticket) = ticket else {
        return;
    };
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(NOTICE_DISMISS_MS))).await;
        // The signal is gone if the page unmounted first.
        let _ = upload.try_update(|state| state.dismiss(ticket));
    });
}
