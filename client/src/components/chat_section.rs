//! Chat thread beside the document.
//!
//! DESIGN
//! ======
//! The section only renders and collects input. Sending, retrying, and
//! discarding are delegated to the page, which owns the `ChatState`.

#[cfg(test)]
#[path = "chat_section_test.rs"]
mod chat_section_test;

use leptos::prelude::*;

use crate::net::types::Role;
use crate::state::chat::{ChatEntry, Delivery};
use crate::util::time::format_chat_time;

/// Whether the composer holds something worth sending.
fn can_send(text: &str) -> bool {
    !text.trim().is_empty()
}

/// CSS modifier classes for one bubble.
fn bubble_class(entry: &ChatEntry) -> String {
    let side = match entry.role {
        Role::User => "chat-bubble--user",
        Role::Assistant => "chat-bubble--assistant",
    };
    let state = match entry.delivery {
        Delivery::Confirmed => "",
        Delivery::Pending => " chat-bubble--pending",
        Delivery::Failed(_) => " chat-bubble--failed",
    };
    format!("chat-bubble {side}{state}")
}

#[component]
pub fn ChatSection(
    #[prop(into)] entries: Signal<Vec<ChatEntry>>,
    #[prop(into)] awaiting_reply: Signal<bool>,
    on_send: Callback<String>,
    on_retry: Callback<String>,
    on_discard: Callback<String>,
) -> impl IntoView {
    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = entries.with(Vec::len);
        let _ = awaiting_reply.get();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let text = input.get_untracked();
        if !can_send(&text) {
            return;
        }
        input.set(String::new());
        on_send.run(text);
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <section class="chat-section">
            <h2 class="chat-section__title">"Chat"</h2>
            <div class="chat-section__messages" node_ref=messages_ref>
                <Show when=move || !entries.with(Vec::is_empty)>
                    <For
                        each=move || entries.get()
                        key=|entry| (entry.id.clone(), entry.delivery.clone())
                        children=move |entry| view! { <ChatBubble entry=entry on_retry=on_retry on_discard=on_discard/> }
                    />
                </Show>
                <Show when=move || entries.with(Vec::is_empty)>
                    <p class="chat-section__empty">"Ask a question about this document."</p>
                </Show>
                <Show when=move || awaiting_reply.get()>
                    <div class="chat-section__typing">
                        <span class="spinner" aria-hidden="true"></span>
                        "Assistant is responding..."
                    </div>
                </Show>
            </div>
            <div class="chat-section__composer">
                <input
                    class="chat-section__input"
                    type="text"
                    placeholder="Type your question..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button
                    class="btn btn--primary chat-section__send"
                    disabled=move || !can_send(&input.get())
                    on:click=move |_| do_send()
                >
                    "Send"
                </button>
            </div>
        </section>
    }
}

#[component]
fn ChatBubble(entry: ChatEntry, on_retry: Callback<String>, on_discard: Callback<String>) -> impl IntoView {
    let class = bubble_class(&entry);
    let time = entry.sent_at.as_deref().map(format_chat_time).unwrap_or_default();
    let failure = match &entry.delivery {
        Delivery::Failed(reason) => Some(reason.clone()),
        _ => None,
    };
    let retry_id = entry.id.clone();
    let discard_id = entry.id;

    view! {
        <div class=class>
            <p class="chat-bubble__content">{entry.content}</p>
            <span class="chat-bubble__time">{time}</span>
            {failure.map(|reason| {
                view! {
                    <div class="chat-bubble__failure">
                        <span class="chat-bubble__reason">"Not sent: " {reason}</span>
                        <button class="btn chat-bubble__retry" on:click=move |_| on_retry.run(retry_id.clone())>
                            "Retry"
                        </button>
                        <button class="btn btn--danger chat-bubble__discard" on:click=move |_| on_discard.run(discard_id.clone())>
                            "Discard"
                        </button>
                    </div>
                }
            })}
        </div>
    }
}
