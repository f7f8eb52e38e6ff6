//! Bridge between the TUI and an [AgentBackend].
//!
//! Runs on the tokio runtime while the TUI blocks on the terminal. Commands
//! arrive on a channel, backend events flow back as [UiEvent]s. The
//! controller tracks which conversation is open and holds its subscription;
//! switching conversations drops the old one.

use std::sync::Arc;

use tracing::{debug, warn};

use confab_core::{AgentBackend, ConversationEvent, Message, NewConversation, Subscription};
use confab_tui::{UiCommand, UiEvent};
use tokio::sync::mpsc;

pub struct Controller {
    backend: Arc<dyn AgentBackend>,
    agent_name: String,
    event_tx: mpsc::Sender<UiEvent>,
    command_rx: mpsc::Receiver<UiCommand>,
    subscription: Option<Subscription>,
    active_id: Option<String>,
}

impl Controller {
    pub fn new(
        backend: Arc<dyn AgentBackend>,
        agent_name: String,
        event_tx: mpsc::Sender<UiEvent>,
        command_rx: mpsc::Receiver<UiCommand>,
    ) -> Self {
        Self {
            backend,
            agent_name,
            event_tx,
            command_rx,
            subscription: None,
            active_id: None,
        }
    }

    /// Run until the command channel closes (TUI exit).
    pub async fn run(mut self) {
        if let Err(e) = self.startup().await {
            let _ = self.event_tx.send(UiEvent::Error(e.to_string())).await;
        }

        loop {
            let subscription_event = async {
                match self.subscription.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            };
            tokio::select! {
                command = self.command_rx.recv() => {
                    let Some(command) = command else { break };
                    if let Err(e) = self.handle_command(command).await {
                        warn!(error = %e, "command failed");
                        let _ = self.event_tx.send(UiEvent::Error(e.to_string())).await;
                    }
                }
                event = subscription_event => {
                    match event {
                        Some(event) => self.forward_event(event).await,
                        None => {
                            debug!("subscription closed");
                            self.subscription = None;
                        }
                    }
                }
            }
        }
    }

    /// Load the conversation list and open the most recent one, creating a
    /// fresh conversation when the agent has none.
    async fn startup(&mut self) -> confab_core::Result<()> {
        let conversations = self.backend.list_conversations(&self.agent_name).await?;
        let first_id = conversations.first().map(|c| c.id.clone());
        let _ = self
            .event_tx
            .send(UiEvent::Conversations(conversations))
            .await;
        match first_id {
            Some(id) => self.open(&id).await,
            None => self.create_and_open().await,
        }
    }

    async fn handle_command(&mut self, command: UiCommand) -> confab_core::Result<()> {
        match command {
            UiCommand::SendMessage {
                content,
                attachments,
            } => {
                let Some(id) = self.active_id.clone() else {
                    return Ok(());
                };
                let message = Message::user(content).with_attachments(attachments);
                self.backend.add_message(&id, message).await?;
                // First message sets the conversation title
                self.refresh_list().await?;
            }
            UiCommand::NewConversation => {
                self.create_and_open().await?;
            }
            UiCommand::SelectConversation(id) => {
                self.open(&id).await?;
            }
            UiCommand::DeleteConversation(id) => {
                self.backend.delete_conversation(&id).await?;
                let remaining = self.refresh_list().await?;
                if self.active_id.as_deref() == Some(id.as_str()) {
                    self.subscription = None;
                    self.active_id = None;
                    match remaining.first() {
                        Some(next) => self.open(&next.clone()).await?,
                        None => self.create_and_open().await?,
                    }
                }
            }
            UiCommand::AttachFile(path) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "file".to_string());
                match tokio::fs::read(&path).await {
                    Ok(bytes) => match self.backend.upload_file(&name, bytes).await {
                        Ok(file) => {
                            let _ = self.event_tx.send(UiEvent::Uploaded(file)).await;
                        }
                        Err(e) => {
                            let _ = self
                                .event_tx
                                .send(UiEvent::UploadFailed(e.to_string()))
                                .await;
                        }
                    },
                    Err(e) => {
                        let _ = self
                            .event_tx
                            .send(UiEvent::UploadFailed(format!(
                                "{}: {e}",
                                path.display()
                            )))
                            .await;
                    }
                }
            }
        }
        Ok(())
    }

    async fn forward_event(&mut self, event: ConversationEvent) {
        let ui_event = match event {
            ConversationEvent::Snapshot {
                conversation_id,
                messages,
            } => {
                // Replies bump updated_at and may retitle; keep the sidebar fresh
                let _ = self.refresh_list().await;
                UiEvent::Snapshot {
                    conversation_id,
                    messages,
                }
            }
            ConversationEvent::Status { message } => UiEvent::Status(message),
            ConversationEvent::Error { error } => UiEvent::Error(error),
        };
        let _ = self.event_tx.send(ui_event).await;
    }

    async fn open(&mut self, conversation_id: &str) -> confab_core::Result<()> {
        let conversation = self.backend.get_conversation(conversation_id).await?;
        self.subscription = Some(self.backend.subscribe(conversation_id).await?);
        self.active_id = Some(conversation.id.clone());
        debug!(conversation_id = %conversation.id, "conversation opened");
        let _ = self.event_tx.send(UiEvent::Opened(conversation)).await;
        Ok(())
    }

    async fn create_and_open(&mut self) -> confab_core::Result<()> {
        let created = self
            .backend
            .create_conversation(NewConversation::for_agent(&self.agent_name))
            .await?;
        self.refresh_list().await?;
        self.open(&created.id).await
    }

    /// Re-fetch the conversation list and push it to the TUI. Returns the
    /// ids, newest first, for callers that need a fallback conversation.
    async fn refresh_list(&mut self) -> confab_core::Result<Vec<String>> {
        let conversations = self.backend.list_conversations(&self.agent_name).await?;
        let ids: Vec<String> = conversations.iter().map(|c| c.id.clone()).collect();
        let _ = self
            .event_tx
            .send(UiEvent::Conversations(conversations))
            .await;
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confab_backend::MemoryBackend;
    use std::time::Duration;

    fn spawn_controller() -> (mpsc::Sender<UiCommand>, mpsc::Receiver<UiEvent>) {
        let backend: Arc<dyn AgentBackend> =
            Arc::new(MemoryBackend::with_reply_delay(Duration::ZERO));
        let (event_tx, event_rx) = mpsc::channel(64);
        let (command_tx, command_rx) = mpsc::channel(16);
        let controller =
            Controller::new(backend, "assistant".to_string(), event_tx, command_rx);
        tokio::spawn(controller.run());
        (command_tx, event_rx)
    }

    async fn next_event(rx: &mut mpsc::Receiver<UiEvent>) -> UiEvent {
        tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .expect("event within timeout")
            .expect("channel open")
    }

    #[tokio::test]
    async fn startup_creates_and_opens_conversation() {
        let (_command_tx, mut event_rx) = spawn_controller();
        // empty list, then refreshed list with the created conversation, then Opened
        let mut opened = None;
        for _ in 0..4 {
            if let UiEvent::Opened(c) = next_event(&mut event_rx).await {
                opened = Some(c);
                break;
            }
        }
        assert!(opened.is_some());
    }

    #[tokio::test]
    async fn send_message_produces_reply_snapshot() {
        let (command_tx, mut event_rx) = spawn_controller();
        command_tx
            .send(UiCommand::SendMessage {
                content: "hello".to_string(),
                attachments: vec![],
            })
            .await
            .expect("send");

        // Snapshots arrive until the assistant reply lands
        let mut saw_reply = false;
        for _ in 0..20 {
            if let UiEvent::Snapshot { messages, .. } = next_event(&mut event_rx).await {
                if messages
                    .iter()
                    .any(|m| m.role == confab_core::Role::Assistant && !m.content.is_empty())
                {
                    saw_reply = true;
                    break;
                }
            }
        }
        assert!(saw_reply);
    }

    #[tokio::test]
    async fn delete_active_conversation_opens_replacement() {
        let (command_tx, mut event_rx) = spawn_controller();
        let mut first_id = None;
        for _ in 0..4 {
            if let UiEvent::Opened(c) = next_event(&mut event_rx).await {
                first_id = Some(c.id);
                break;
            }
        }
        let first_id = first_id.expect("opened");

        command_tx
            .send(UiCommand::DeleteConversation(first_id.clone()))
            .await
            .expect("send");

        let mut replacement = None;
        for _ in 0..6 {
            if let UiEvent::Opened(c) = next_event(&mut event_rx).await {
                replacement = Some(c.id);
                break;
            }
        }
        assert!(replacement.is_some());
        assert_ne!(replacement, Some(first_id));
    }

    #[tokio::test]
    async fn attach_file_uploads_and_reports_url() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"hello").expect("write");

        let (command_tx, mut event_rx) = spawn_controller();
        command_tx
            .send(UiCommand::AttachFile(path))
            .await
            .expect("send");

        let mut uploaded = None;
        for _ in 0..8 {
            if let UiEvent::Uploaded(file) = next_event(&mut event_rx).await {
                uploaded = Some(file);
                break;
            }
        }
        let file = uploaded.expect("uploaded event");
        assert_eq!(file.name, "notes.txt");
        assert!(file.file_url.contains("notes.txt"));
    }

    #[tokio::test]
    async fn attach_missing_file_reports_failure() {
        let (command_tx, mut event_rx) = spawn_controller();
        command_tx
            .send(UiCommand::AttachFile("/no/such/file.txt".into()))
            .await
            .expect("send");

        let mut failed = false;
        for _ in 0..8 {
            if let UiEvent::UploadFailed(reason) = next_event(&mut event_rx).await {
                assert!(reason.contains("file.txt"));
                failed = true;
                break;
            }
        }
        assert!(failed);
    }
}
