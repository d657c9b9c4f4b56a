//! Gallery card for one uploaded document.
//!
//! DESIGN
//! ======
//! The whole card is a link to the detail route; the delete affordance stops
//! propagation so it never doubles as navigation.

use leptos::prelude::*;

/// A clickable thumbnail representing a document.
#[component]
pub fn DocumentCard(
    id: String,
    image_url: String,
    #[prop(optional)] on_delete: Option<Callback<String>>,
) -> impl IntoView {
    let href = format!("/document/{id}");
    let alt = format!("Document {id}");
    let on_delete_click = Callback::new({
        let id = id.clone();
        move |()| {
            if let Some(on_delete) = on_delete.as_ref() {
                on_delete.run(id.clone());
            }
        }
    });
    let can_delete = on_delete.is_some();

    view! {
        <a class="document-card" href=href>
            <span class="document-card__frame">
                <img class="document-card__image" src=image_url alt=alt loading="lazy"/>
            </span>
            <span class="document-card__hint">"Click to view"</span>
            <Show when=move || can_delete>
                <button
                    class="document-card__delete"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        ev.stop_propagation();
                        on_delete_click.run(());
                    }
                    title="Delete document"
                    aria-label="Delete document"
                >
                    "✕"
                </button>
            </Show>
        </a>
    }
}
