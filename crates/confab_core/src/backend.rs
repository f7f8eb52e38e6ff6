//! Seam between the frontend and the agent platform.
//!
//! Everything the UI knows about conversations goes through [AgentBackend].
//! Implementations own persistence, agent execution and file storage; the
//! frontend treats them as opaque and only reacts to the data they return.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::conversation::{Conversation, Message};
use crate::error::Result;
use crate::event::ConversationEvent;

/// Parameters for creating a conversation.
#[derive(Debug, Clone)]
pub struct NewConversation {
    pub agent_name: String,
    pub title: Option<String>,
}

impl NewConversation {
    pub fn for_agent(agent_name: impl Into<String>) -> Self {
        Self {
            agent_name: agent_name.into(),
            title: None,
        }
    }
}

/// Result of a file upload: where the backend stored the file.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub name: String,
    pub file_url: String,
}

/// Live feed of [ConversationEvent]s for one conversation. Dropping the
/// receiver ends the subscription.
pub type Subscription = mpsc::Receiver<ConversationEvent>;

#[async_trait]
pub trait AgentBackend: Send + Sync {
    /// Conversations for an agent, most recently updated first. Entries
    /// carry metadata only; fetch messages via [get_conversation].
    ///
    /// [get_conversation]: AgentBackend::get_conversation
    async fn list_conversations(&self, agent_name: &str) -> Result<Vec<Conversation>>;

    /// A single conversation with its full message list.
    async fn get_conversation(&self, conversation_id: &str) -> Result<Conversation>;

    async fn create_conversation(&self, params: NewConversation) -> Result<Conversation>;

    async fn delete_conversation(&self, conversation_id: &str) -> Result<()>;

    /// Append a message. The backend decides whether and how the agent
    /// responds; replies surface on the subscription as new snapshots.
    async fn add_message(&self, conversation_id: &str, message: Message) -> Result<()>;

    /// Subscribe to changes. The first event is a snapshot of the current
    /// state, so a subscriber never renders from stale data.
    async fn subscribe(&self, conversation_id: &str) -> Result<Subscription>;

    /// Store file bytes and return a URL usable as a message attachment.
    async fn upload_file(&self, name: &str, bytes: Vec<u8>) -> Result<UploadedFile>;
}
