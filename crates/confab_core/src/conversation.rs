//! Conversation and message records as the backend delivers them.
//!
//! These are deserialized from the external agent backend and never mutated
//! locally; the frontend only projects them into display state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::tool_call::ToolCall;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

/// A file reference attached to a message (produced by `upload_file`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub name: String,
    pub file_url: String,
}

/// One message in a conversation. Tool calls and attachments are optional
/// and default to empty when the backend omits them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_calls: Vec<ToolCall>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            tool_calls: Vec::new(),
            attachments: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            tool_calls: Vec::new(),
            attachments: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn with_attachments(mut self, attachments: Vec<Attachment>) -> Self {
        self.attachments = attachments;
        self
    }

    pub fn with_tool_calls(mut self, tool_calls: Vec<ToolCall>) -> Self {
        self.tool_calls = tool_calls;
        self
    }
}

/// A conversation as listed or fetched from the backend. `messages` is empty
/// in list results; `get_conversation` and snapshots carry the full list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub agent_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<Message>,
}

impl Conversation {
    pub fn new(agent_name: impl Into<String>, title: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            agent_name: agent_name.into(),
            title,
            created_at: now,
            updated_at: now,
            messages: Vec::new(),
        }
    }

    /// Title for display; untitled conversations fall back to a default.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("New Conversation")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            r#""assistant""#
        );
    }

    #[test]
    fn message_minimal_json_deserializes() {
        let msg: Message =
            serde_json::from_str(r#"{"role":"user","content":"hi"}"#).unwrap();
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "hi");
        assert!(msg.tool_calls.is_empty());
        assert!(msg.attachments.is_empty());
    }

    #[test]
    fn message_with_attachments() {
        let msg = Message::user("(attached files)").with_attachments(vec![Attachment {
            name: "notes.txt".into(),
            file_url: "https://files.example/notes.txt".into(),
        }]);
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("notes.txt"));
    }

    #[test]
    fn conversation_display_title_falls_back() {
        let conv = Conversation::new("assistant", None);
        assert_eq!(conv.display_title(), "New Conversation");
        let conv = Conversation::new("assistant", Some("Planning".into()));
        assert_eq!(conv.display_title(), "Planning");
    }

    #[test]
    fn conversation_roundtrip() {
        let mut conv = Conversation::new("assistant", Some("Test".into()));
        conv.messages.push(Message::user("hello"));
        let json = serde_json::to_string(&conv).unwrap();
        let decoded: Conversation = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.id, conv.id);
        assert_eq!(decoded.messages.len(), 1);
    }

    #[test]
    fn conversation_list_json_has_no_messages_key() {
        let conv = Conversation::new("assistant", None);
        let json = serde_json::to_string(&conv).unwrap();
        assert!(!json.contains("\"messages\""));
    }
}
