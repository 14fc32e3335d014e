//! Conversation list and message thread state.
//!
//! DESIGN
//! ======
//! Only open conversations are kept. The message list always belongs to
//! `selected`; results for any other conversation are dropped on arrival,
//! so a slow fetch for A cannot overwrite B's thread.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use serde::{Deserialize, Serialize};

/// A chat thread between mentor and mentee.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: i64,
    #[serde(default)]
    pub last_message: Option<String>,
    #[serde(default)]
    pub is_close: bool,
}

/// A single chat message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub conversation_id: Option<i64>,
    #[serde(default)]
    pub sender_id: Option<i64>,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of the create-message request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMessage {
    pub conversation_id: i64,
    pub content: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatState {
    pub conversations: Vec<Conversation>,
    pub selected: Option<i64>,
    pub messages: Vec<Message>,
    pub draft: String,
}

impl ChatState {
    /// Store the fetched conversations, dropping closed ones.
    pub fn set_conversations(&mut self, conversations: Vec<Conversation>) {
        self.conversations = conversations.into_iter().filter(|c| !c.is_close).collect();
    }

    /// Make `id` the active thread. Switching threads drops the draft and
    /// the previous thread's messages.
    pub fn select(&mut self, id: i64) {
        if self.selected != Some(id) {
            self.draft.clear();
            self.messages.clear();
        }
        self.selected = Some(id);
    }

    /// Replace the thread with fetched messages if `conversation_id` is
    /// still selected. Returns whether the result was applied.
    pub fn receive_messages(&mut self, conversation_id: i64, messages: Vec<Message>) -> bool {
        if self.selected != Some(conversation_id) {
            return false;
        }
        self.messages = messages;
        true
    }

    /// Request body for the current draft, or `None` when there is nothing
    /// to send.
    pub fn outgoing(&self) -> Option<NewMessage> {
        let conversation_id = self.selected?;
        if self.draft.trim().is_empty() {
            return None;
        }
        Some(NewMessage {
            conversation_id,
            content: self.draft.clone(),
        })
    }

    /// Append a server-confirmed message and clear the draft.
    pub fn message_sent(&mut self, conversation_id: i64, message: Message) -> bool {
        if self.selected != Some(conversation_id) {
            return false;
        }
        self.messages.push(message);
        self.draft.clear();
        true
    }
}
