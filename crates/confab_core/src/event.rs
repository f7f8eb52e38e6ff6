//! Events delivered over a conversation subscription.
//!
//! The backend pushes full snapshots rather than deltas: every change to a
//! conversation arrives as the complete message list. Status and error
//! events are advisory and carry no conversation state.

use serde::{Deserialize, Serialize};

use crate::conversation::Message;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConversationEvent {
    /// Full state of the subscribed conversation after a change.
    Snapshot {
        conversation_id: String,
        messages: Vec<Message>,
    },
    /// Human-readable progress note (e.g. "agent is thinking").
    Status { message: String },
    /// The subscription hit a problem; the conversation itself may be fine.
    Error { error: String },
}

impl ConversationEvent {
    pub fn snapshot(conversation_id: impl Into<String>, messages: Vec<Message>) -> Self {
        Self::Snapshot {
            conversation_id: conversation_id.into(),
            messages,
        }
    }

    pub fn status(message: impl Into<String>) -> Self {
        Self::Status {
            message: message.into(),
        }
    }

    pub fn error(error: impl Into<String>) -> Self {
        Self::Error {
            error: error.into(),
        }
    }
}
