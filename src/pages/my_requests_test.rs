use super::*;
use crate::state::bookings::{BookedBy, BookingStatus};

// =============================================================
// Helpers
// =============================================================

fn make_booking(id: i64, status: BookingStatus) -> Booking {
    Booking {
        id,
        start_time: "2026-03-01T09:00:00".to_owned(),
        status,
        user: Some(BookedBy {
            fullname: Some(format!("Mentee {id}")),
        }),
    }
}

fn loaded_bookings() -> BookingsState {
    let mut state = BookingsState::default();
    state.set_items(vec![
        make_booking(7, BookingStatus::Pending),
        make_booking(8, BookingStatus::Pending),
    ]);
    state
}

fn make_message(conversation_id: i64, content: &str) -> Message {
    Message {
        id: Some(99),
        conversation_id: Some(conversation_id),
        sender_id: Some(1),
        content: content.to_owned(),
        created_at: None,
    }
}

fn chat_with_draft(conversation_id: i64, draft: &str) -> ChatState {
    let mut chat = ChatState::default();
    chat.select(conversation_id);
    chat.draft = draft.to_owned();
    chat
}

// =============================================================
// Fetches
// =============================================================

#[test]
fn failed_bookings_fetch_leaves_list_empty() {
    let mut state = loaded_bookings();
    state.loading = true;
    settle_bookings(&mut state, Err(ApiError::Status(500)));
    assert!(state.items.is_empty());
    assert!(!state.loading);
}

#[test]
fn successful_bookings_fetch_replaces_list() {
    let mut state = BookingsState::default();
    settle_bookings(&mut state, Ok(vec![make_booking(1, BookingStatus::Accepted)]));
    assert_eq!(state.items.len(), 1);
}

#[test]
fn failed_conversations_fetch_leaves_list_empty() {
    let mut chat = ChatState::default();
    chat.set_conversations(vec![Conversation {
        id: 1,
        last_message: None,
        is_close: false,
    }]);
    settle_conversations(&mut chat, Err(ApiError::Network("offline".to_owned())));
    assert!(chat.conversations.is_empty());
}

// =============================================================
// Accept / reject
// =============================================================

#[test]
fn confirmed_reject_patches_only_that_booking() {
    let mut state = loaded_bookings();
    let alert = settle_decision(&mut state, 7, Decision::Reject, Ok(()));
    assert_eq!(alert, "Booking rejected successfully!");
    assert_eq!(state.items[0].status, BookingStatus::Declined);
    assert_eq!(state.items[1].status, BookingStatus::Pending);
}

#[test]
fn failed_accept_leaves_bookings_unchanged() {
    let mut state = loaded_bookings();
    let before = state.clone();
    let alert = settle_decision(&mut state, 7, Decision::Accept, Err(ApiError::Status(409)));
    assert_eq!(alert, "Failed to accept booking");
    assert_eq!(state, before);
}

#[test]
fn failed_reject_leaves_bookings_unchanged() {
    let mut state = loaded_bookings();
    let before = state.clone();
    let alert = settle_decision(&mut state, 8, Decision::Reject, Err(ApiError::Network("offline".to_owned())));
    assert_eq!(alert, "Failed to reject booking");
    assert_eq!(state, before);
}

// =============================================================
// Messages
// =============================================================

#[test]
fn failed_send_keeps_draft_and_thread() {
    let mut chat = chat_with_draft(3, "see you at nine");
    assert!(!settle_send(&mut chat, 3, Err(ApiError::Status(500))));
    assert_eq!(chat.draft, "see you at nine");
    assert!(chat.messages.is_empty());
}

#[test]
fn confirmed_send_appends_and_clears_draft() {
    let mut chat = chat_with_draft(3, "see you at nine");
    assert!(settle_send(&mut chat, 3, Ok(make_message(3, "see you at nine"))));
    assert!(chat.draft.is_empty());
    assert_eq!(chat.messages.len(), 1);
}

#[test]
fn failed_message_fetch_keeps_current_thread() {
    let mut chat = chat_with_draft(3, "");
    chat.messages.push(make_message(3, "earlier"));
    assert!(!settle_messages(&mut chat, 3, Err(ApiError::Decode("bad json".to_owned()))));
    assert_eq!(chat.messages.len(), 1);
}

#[test]
fn messages_for_deselected_conversation_are_dropped() {
    let mut chat = chat_with_draft(3, "");
    assert!(!settle_messages(&mut chat, 4, Ok(vec![make_message(4, "other")])));
    assert!(chat.messages.is_empty());
}
