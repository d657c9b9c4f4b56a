//! Left column of the detail page: the image and its extracted text.

use leptos::prelude::*;

use crate::state::documents::Document;

#[component]
pub fn DocumentSection(
    document: Document,
    on_download: Callback<()>,
    #[prop(into)] download_error: Signal<Option<String>>,
) -> impl IntoView {
    let image_src = document.image_src();
    let alt = document.filename.clone();
    let created_at = document.created_at_display();
    let summary = or_placeholder(&document.summary, "No summary available");
    let text = or_placeholder(&document.text, "No text available");

    view! {
        <section class="document-section">
            {match image_src {
                Some(src) => view! { <img class="document-section__image" src=src alt=alt/> }.into_any(),
                None => view! { <div class="document-section__image document-section__image--missing">"Image unavailable"</div> }.into_any(),
            }}
            <div class="document-section__meta">
                <h1 class="document-section__filename">{document.filename}</h1>
                <p class="document-section__created">"Created at: " {created_at}</p>
                <button class="btn btn--primary document-section__download" on:click=move |_| on_download.run(())>
                    "Download PDF"
                </button>
                <Show when=move || download_error.get().is_some()>
                    <p class="document-section__error">{move || download_error.get().unwrap_or_default()}</p>
                </Show>
            </div>
            <h2 class="document-section__heading">"Summary"</h2>
            <p class="document-section__summary">{summary}</p>
            <h2 class="document-section__heading">"Full Text"</h2>
            <pre class="document-section__text">{text}</pre>
        </section>
    }
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.trim().is_empty() { placeholder.to_owned() } else { value.to_owned() }
}
