//! Open conversations with the selected thread and a message composer.

use leptos::prelude::*;

use crate::state::chat::ChatState;

/// Conversation list plus the active thread.
///
/// The owning page performs the fetch/send calls through `on_select` and
/// `on_send`; this component only edits the draft.
#[component]
pub fn ConversationPanel(chat: RwSignal<ChatState>, on_select: Callback<i64>, on_send: Callback<()>) -> impl IntoView {
    let can_send = move || chat.with(|c| c.outgoing().is_some());

    view! {
        <section class="conversation-panel">
            <h2 class="conversation-panel__title">"Conversations"</h2>
            <div class="conversation-panel__list">
                {move || {
                    let state = chat.get();
                    if state.conversations.is_empty() {
                        return view! { <p class="conversation-panel__empty">"No open conversations."</p> }.into_any();
                    }
                    state
                        .conversations
                        .into_iter()
                        .map(|conversation| {
                            let id = conversation.id;
                            let class = if state.selected == Some(id) {
                                "conversation-card conversation-card--active"
                            } else {
                                "conversation-card"
                            };
                            let summary = conversation.last_message.unwrap_or_default();
                            view! {
                                <div class=class>
                                    <p>"Last Message: " {summary}</p>
                                    <button class="btn btn--primary" on:click=move |_| on_select.run(id)>
                                        "Chat"
                                    </button>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>

            <Show when=move || chat.with(|c| c.selected.is_some())>
                <div class="conversation-panel__thread">
                    <h2 class="conversation-panel__title">"Messages"</h2>
                    <div class="conversation-panel__messages">
                        {move || {
                            chat.get()
                                .messages
                                .into_iter()
                                .map(|message| view! { <div class="message-card"><p>{message.content}</p></div> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                    <div class="conversation-panel__composer">
                        <textarea
                            class="conversation-panel__input"
                            placeholder="Type your message"
                            prop:value=move || chat.with(|c| c.draft.clone())
                            on:input=move |ev| {
                                let text = event_target_value(&ev);
                                chat.update(|c| c.draft = text);
                            }
                        ></textarea>
                        <button
                            class="btn btn--primary"
                            on:click=move |_| on_send.run(())
                            disabled=move || !can_send()
                        >
                            "Send"
                        </button>
                    </div>
                </div>
            </Show>
        </section>
    }
}
