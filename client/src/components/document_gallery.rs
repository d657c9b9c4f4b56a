//! Grid of document cards on the home page.

use leptos::prelude::*;

use crate::components::document_card::DocumentCard;
use crate::net::types::DocumentSummary;

#[component]
pub fn DocumentGallery(
    #[prop(into)] documents: Signal<Vec<DocumentSummary>>,
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <section class="document-gallery">
            <h2 class="document-gallery__title">"Document Gallery"</h2>
            <Show
                when=move || !documents.get().is_empty()
                fallback=|| view! { <p class="document-gallery__empty">"No documents yet. Upload an image to start."</p> }
            >
                <div class="document-gallery__grid">
                    <For
                        each=move || documents.get()
                        key=|doc| doc.id.clone()
                        children=move |doc| {
                            view! { <DocumentCard id=doc.id image_url=doc.image_url on_delete=on_delete/> }
                        }
                    />
                </div>
            </Show>
        </section>
    }
}
