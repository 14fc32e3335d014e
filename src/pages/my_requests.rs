//! "My Requests" page: the mentor's bookings and open conversations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated route. Whenever the session identity changes it issues two
//! independent fetches (bookings by user id, conversations by token). A
//! failure of one leaves only that list empty and is logged.
//!
//! Results are discarded once the page is torn down or the identity has
//! changed again, via `CancelToken`s scoped to the page and to each run of
//! the identity effect.

#[cfg(test)]
#[path = "my_requests_test.rs"]
mod my_requests_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::booking_list::BookingList;
use crate::components::conversation_panel::ConversationPanel;
use crate::components::navbar::Navbar;
use crate::state::bookings::{BookingsState, Decision};
use crate::state::chat::{ChatState, NewMessage};
use crate::state::session::use_session;
use crate::util::auth::install_unauth_redirect;
use crate::util::cancel::CancelToken;
#[cfg(any(test, feature = "hydrate"))]
use crate::{
    net::api::ApiError,
    state::{bookings::Booking, chat::Conversation, chat::Message},
};

#[component]
pub fn MyRequestsPage() -> impl IntoView {
    let session = use_session();
    install_unauth_redirect(session, use_navigate());

    let bookings = RwSignal::new(BookingsState::default());
    let chat = RwSignal::new(ChatState::default());
    let page_alive = CancelToken::for_owner();

    let identity = Memo::new(move |_| {
        let current = session.get();
        (current.user.id.clone(), current.bearer().map(str::to_owned))
    });

    Effect::new(move || {
        let (user_id, token) = identity.get();
        // Cancelled when this effect re-runs for a new identity.
        let run = CancelToken::for_owner();
        load_bookings(bookings, user_id, run.clone());
        load_conversations(chat, token, run);
    });

    let on_decide = {
        let page_alive = page_alive.clone();
        Callback::new(move |(id, decision): (i64, Decision)| {
            let Some(token) = session.get_untracked().bearer().map(str::to_owned) else {
                leptos::logging::warn!("booking {id}: no session token");
                crate::util::notify::alert(decision.failure_message());
                return;
            };
            decide(bookings, id, decision, token, page_alive.clone());
        })
    };

    let on_select = {
        let page_alive = page_alive.clone();
        Callback::new(move |conversation_id: i64| {
            chat.update(|c| c.select(conversation_id));
            let Some(token) = session.get_untracked().bearer().map(str::to_owned) else {
                return;
            };
            load_messages(chat, conversation_id, token, page_alive.clone());
        })
    };

    let on_send = Callback::new(move |()| {
        let Some(outgoing) = chat.with_untracked(ChatState::outgoing) else {
            return;
        };
        let Some(token) = session.get_untracked().bearer().map(str::to_owned) else {
            leptos::logging::warn!("send message: no session token");
            return;
        };
        send_message(chat, outgoing, token, page_alive.clone());
    });

    view! {
        <main class="my-requests-page">
            <Navbar page="My Requests"/>
            <Show
                when=move || session.get().is_authenticated()
                fallback=move || {
                    view! {
                        <p class="my-requests-page__status">
                            {move || if session.is_restored() { "Redirecting to login..." } else { "Loading..." }}
                        </p>
                    }
                }
            >
                <div class="my-requests-page__content">
                    <Show when=move || bookings.with(|b| b.loading)>
                        <p class="my-requests-page__status">"Loading bookings..."</p>
                    </Show>
                    <BookingList bookings=bookings on_decide=on_decide/>
                    <ConversationPanel chat=chat on_select=on_select on_send=on_send/>
                </div>
            </Show>
        </main>
    }
}

// =============================================================
// Result handling
// =============================================================

/// Store a bookings fetch. A failure leaves the list empty.
#[cfg(any(test, feature = "hydrate"))]
fn settle_bookings(state: &mut BookingsState, result: Result<Vec<Booking>, ApiError>) {
    match result {
        Ok(items) => state.set_items(items),
        Err(e) => {
            leptos::logging::error!("Failed to fetch bookings: {e}");
            state.set_items(Vec::new());
        }
    }
}

/// Store a conversations fetch. A failure leaves the list empty.
#[cfg(any(test, feature = "hydrate"))]
fn settle_conversations(chat: &mut ChatState, result: Result<Vec<Conversation>, ApiError>) {
    match result {
        Ok(conversations) => chat.set_conversations(conversations),
        Err(e) => {
            leptos::logging::error!("Failed to fetch conversations: {e}");
            chat.set_conversations(Vec::new());
        }
    }
}

/// Patch booking `id` only if the backend confirmed the decision.
/// Returns the alert text for the mentor.
#[cfg(any(test, feature = "hydrate"))]
fn settle_decision(
    state: &mut BookingsState,
    id: i64,
    decision: Decision,
    result: Result<(), ApiError>,
) -> &'static str {
    match result {
        Ok(()) => {
            if !state.apply_decision(id, decision) {
                leptos::logging::warn!("booking {id} confirmed but no longer listed");
            }
            decision.success_message()
        }
        Err(e) => {
            leptos::logging::error!("{} {id}: {e}", decision.failure_message());
            decision.failure_message()
        }
    }
}

/// Show fetched messages if their conversation is still selected.
#[cfg(any(test, feature = "hydrate"))]
fn settle_messages(chat: &mut ChatState, conversation_id: i64, result: Result<Vec<Message>, ApiError>) -> bool {
    match result {
        Ok(messages) => {
            let applied = chat.receive_messages(conversation_id, messages);
            if !applied {
                leptos::logging::log!("dropped messages for deselected conversation {conversation_id}");
            }
            applied
        }
        Err(e) => {
            leptos::logging::error!("Failed to fetch messages: {e}");
            false
        }
    }
}

/// Append a confirmed message. On failure the draft is kept for a retry.
#[cfg(any(test, feature = "hydrate"))]
fn settle_send(chat: &mut ChatState, conversation_id: i64, result: Result<Message, ApiError>) -> bool {
    match result {
        Ok(message) => chat.message_sent(conversation_id, message),
        Err(e) => {
            leptos::logging::error!("Failed to send message: {e}");
            false
        }
    }
}

// =============================================================
// Requests
// =============================================================

fn load_bookings(bookings: RwSignal<BookingsState>, user_id: Option<String>, cancel: CancelToken) {
    let Some(user_id) = user_id else {
        bookings.update(|s| s.set_items(Vec::new()));
        return;
    };
    bookings.update(|s| s.loading = true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_bookings(&user_id).await;
        if !cancel.is_cancelled() {
            bookings.update(|s| settle_bookings(s, result));
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (user_id, cancel);
}

fn load_conversations(chat: RwSignal<ChatState>, token: Option<String>, cancel: CancelToken) {
    let Some(token) = token else {
        chat.set(ChatState::default());
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_conversations(&token).await;
        if !cancel.is_cancelled() {
            chat.update(|c| settle_conversations(c, result));
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (token, cancel);
}

fn decide(bookings: RwSignal<BookingsState>, id: i64, decision: Decision, token: String, cancel: CancelToken) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::decide_booking(id, decision, &token).await;
        if cancel.is_cancelled() {
            return;
        }
        if let Some(message) = bookings.try_update(|s| settle_decision(s, id, decision, result)) {
            crate::util::notify::alert(message);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (bookings, id, decision, token, cancel);
}

fn load_messages(chat: RwSignal<ChatState>, conversation_id: i64, token: String, cancel: CancelToken) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_messages(conversation_id, &token).await;
        if !cancel.is_cancelled() {
            chat.update(|c| {
                settle_messages(c, conversation_id, result);
            });
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (chat, conversation_id, token, cancel);
}

fn send_message(chat: RwSignal<ChatState>, outgoing: NewMessage, token: String, cancel: CancelToken) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::create_message(&outgoing, &token).await;
        if !cancel.is_cancelled() {
            chat.update(|c| {
                settle_send(c, outgoing.conversation_id, result);
            });
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (chat, outgoing, token, cancel);
}
