//! In-memory backend with a scripted agent.
//!
//! Conversations live in a shared map; each stored conversation keeps the
//! senders of its active subscriptions. Every mutation broadcasts a full
//! snapshot to subscribers, which is the contract the frontend renders from.
//! A subscriber that stops draining its channel is disconnected, never
//! awaited.
//! Adding a user message triggers a scripted assistant reply that walks a
//! tool call from running to completed, so the UI's full lifecycle can be
//! exercised without a real agent platform.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::{Mutex, mpsc};
use tracing::debug;

use confab_core::{
    AgentBackend, ConfabError, Conversation, ConversationEvent, Message, NewConversation,
    Result, Subscription, ToolCall, UploadedFile,
};

const SUBSCRIPTION_BUFFER: usize = 32;
const TITLE_MAX_CHARS: usize = 40;

struct StoredConversation {
    conversation: Conversation,
    subscribers: Vec<mpsc::Sender<ConversationEvent>>,
}

#[derive(Default)]
struct Store {
    conversations: HashMap<String, StoredConversation>,
}

/// Agent backend backed by process memory. Cheap to clone; clones share
/// the same store.
#[derive(Clone)]
pub struct MemoryBackend {
    store: Arc<Mutex<Store>>,
    reply_delay: Duration,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::with_reply_delay(Duration::from_millis(600))
    }

    /// Delay between the scripted reply's stages. Tests use zero.
    pub fn with_reply_delay(reply_delay: Duration) -> Self {
        Self {
            store: Arc::new(Mutex::new(Store::default())),
            reply_delay,
        }
    }

    // Must not await while the store lock is held: a subscriber that stops
    // draining would wedge every other backend operation. try_send instead,
    // and disconnect subscribers whose channel is full or closed.
    fn broadcast(store: &mut Store, conversation_id: &str) {
        let Some(stored) = store.conversations.get_mut(conversation_id) else {
            return;
        };
        let event = ConversationEvent::snapshot(
            conversation_id,
            stored.conversation.messages.clone(),
        );
        stored
            .subscribers
            .retain(|sender| sender.try_send(event.clone()).is_ok());
    }

    /// The scripted agent: acknowledge with a running tool call, then flip
    /// it to completed and fill in the answer.
    async fn run_scripted_reply(self, conversation_id: String, prompt: String) {
        tokio::time::sleep(self.reply_delay).await;

        let tool_call = ToolCall {
            name: Some("agent.respond".to_string()),
            status: Some("running".to_string()),
            arguments_payload: Some(json!({ "prompt": prompt }).to_string()),
            results: None,
        };
        {
            let mut store = self.store.lock().await;
            let Some(stored) = store.conversations.get_mut(&conversation_id) else {
                return;
            };
            stored
                .conversation
                .messages
                .push(Message::assistant("").with_tool_calls(vec![tool_call]));
            stored.conversation.updated_at = chrono::Utc::now();
            Self::broadcast(&mut store, &conversation_id);
        }

        tokio::time::sleep(self.reply_delay).await;

        let mut store = self.store.lock().await;
        let Some(stored) = store.conversations.get_mut(&conversation_id) else {
            return;
        };
        if let Some(last) = stored.conversation.messages.last_mut() {
            last.content = scripted_answer(&prompt);
            if let Some(call) = last.tool_calls.last_mut() {
                call.status = Some("completed".to_string());
                call.results = Some(json!({ "success": true }));
            }
        }
        stored.conversation.updated_at = chrono::Utc::now();
        Self::broadcast(&mut store, &conversation_id);
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn scripted_answer(prompt: &str) -> String {
    format!(
        "Here is what I found for **{}**:\n\n- the request was handled locally\n- no external tools were reached\n\n```text\nechoed: {}\n```",
        truncate_title(prompt),
        prompt
    )
}

fn truncate_title(content: &str) -> String {
    let trimmed = content.trim();
    if trimmed.chars().count() <= TITLE_MAX_CHARS {
        trimmed.to_string()
    } else {
        let cut: String = trimmed.chars().take(TITLE_MAX_CHARS).collect();
        format!("{cut}…")
    }
}

fn not_found(conversation_id: &str) -> ConfabError {
    ConfabError::Backend(format!("conversation not found: {conversation_id}"))
}

#[async_trait]
impl AgentBackend for MemoryBackend {
    async fn list_conversations(&self, agent_name: &str) -> Result<Vec<Conversation>> {
        let store = self.store.lock().await;
        let mut listed: Vec<Conversation> = store
            .conversations
            .values()
            .filter(|s| s.conversation.agent_name == agent_name)
            .map(|s| {
                let mut conv = s.conversation.clone();
                conv.messages.clear();
                conv
            })
            .collect();
        listed.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(listed)
    }

    async fn get_conversation(&self, conversation_id: &str) -> Result<Conversation> {
        let store = self.store.lock().await;
        store
            .conversations
            .get(conversation_id)
            .map(|s| s.conversation.clone())
            .ok_or_else(|| not_found(conversation_id))
    }

    async fn create_conversation(&self, params: NewConversation) -> Result<Conversation> {
        let conversation = Conversation::new(params.agent_name, params.title);
        debug!(conversation_id = %conversation.id, "created conversation");
        let mut store = self.store.lock().await;
        store.conversations.insert(
            conversation.id.clone(),
            StoredConversation {
                conversation: conversation.clone(),
                subscribers: Vec::new(),
            },
        );
        Ok(conversation)
    }

    async fn delete_conversation(&self, conversation_id: &str) -> Result<()> {
        let mut store = self.store.lock().await;
        store
            .conversations
            .remove(conversation_id)
            .map(|_| ())
            .ok_or_else(|| not_found(conversation_id))
    }

    async fn add_message(&self, conversation_id: &str, message: Message) -> Result<()> {
        let prompt = message.content.clone();
        let from_user = message.role == confab_core::Role::User;
        {
            let mut store = self.store.lock().await;
            let stored = store
                .conversations
                .get_mut(conversation_id)
                .ok_or_else(|| not_found(conversation_id))?;
            if stored.conversation.title.is_none() && from_user && !prompt.trim().is_empty() {
                stored.conversation.title = Some(truncate_title(&prompt));
            }
            stored.conversation.messages.push(message);
            stored.conversation.updated_at = chrono::Utc::now();
            Self::broadcast(&mut store, conversation_id);
        }
        if from_user {
            tokio::spawn(
                self.clone()
                    .run_scripted_reply(conversation_id.to_string(), prompt),
            );
        }
        Ok(())
    }

    async fn subscribe(&self, conversation_id: &str) -> Result<Subscription> {
        let (tx, rx) = mpsc::channel(SUBSCRIPTION_BUFFER);
        let mut store = self.store.lock().await;
        let stored = store
            .conversations
            .get_mut(conversation_id)
            .ok_or_else(|| not_found(conversation_id))?;
        let snapshot = ConversationEvent::snapshot(
            conversation_id,
            stored.conversation.messages.clone(),
        );
        // Fresh channel, cannot be full; only fails if the receiver is gone.
        tx.try_send(snapshot)
            .map_err(|_| ConfabError::Backend("subscriber gone before first snapshot".into()))?;
        stored.subscribers.push(tx);
        Ok(rx)
    }

    async fn upload_file(&self, name: &str, bytes: Vec<u8>) -> Result<UploadedFile> {
        if bytes.is_empty() {
            return Err(ConfabError::Upload(format!("empty file: {name}")));
        }
        Ok(UploadedFile {
            name: name.to_string(),
            file_url: format!("memory://uploads/{}/{}", uuid::Uuid::new_v4(), name),
        })
    }
}
