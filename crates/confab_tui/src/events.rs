//! Events between the backend controller and the TUI loop.
//!
//! [UiEvent] flows controller → TUI (conversation lists, snapshots, upload
//! results). [UiCommand] flows TUI → controller (send, select, delete,
//! attach). The TUI never talks to the backend directly; [apply_ui_event]
//! is the single place state is mutated from backend data.

use std::path::PathBuf;

use confab_core::{Attachment, Conversation, Message, UploadedFile};

use crate::state::TuiState;

/// Backend-originated event applied to the TUI state.
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Fresh conversation list for the sidebar.
    Conversations(Vec<Conversation>),
    /// A conversation was opened (selected or newly created).
    Opened(Conversation),
    /// Full message list of the subscribed conversation.
    Snapshot {
        conversation_id: String,
        messages: Vec<Message>,
    },
    /// A staged file finished uploading.
    Uploaded(UploadedFile),
    /// A staged file failed to upload.
    UploadFailed(String),
    /// Transient status text for the header.
    Status(String),
    /// Backend error, shown inline in the chat.
    Error(String),
}

/// TUI-originated command handled by the backend controller.
#[derive(Debug, Clone)]
pub enum UiCommand {
    /// Send a message in the active conversation.
    SendMessage {
        content: String,
        attachments: Vec<Attachment>,
    },
    /// Create and open a new conversation.
    NewConversation,
    /// Open an existing conversation by id.
    SelectConversation(String),
    /// Delete a conversation by id.
    DeleteConversation(String),
    /// Read a local file and upload it for attachment.
    AttachFile(PathBuf),
}

/// Apply a backend event to the TUI state.
pub fn apply_ui_event(state: &mut TuiState, event: UiEvent) {
    match event {
        UiEvent::Conversations(conversations) => {
            state.set_conversations(conversations);
        }
        UiEvent::Opened(conversation) => {
            let id = conversation.id.clone();
            if !state.conversations.iter().any(|c| c.id == id) {
                state.conversations.insert(0, conversation.clone());
            }
            state.active_id = Some(id);
            state.set_messages(&conversation.messages);
            state.scroll = 0;
            state.auto_scroll = true;
        }
        UiEvent::Snapshot {
            conversation_id,
            messages,
        } => {
            // A stale subscription can still emit after switching away.
            if state.active_id.as_deref() == Some(conversation_id.as_str()) {
                state.set_messages(&messages);
            }
        }
        UiEvent::Uploaded(file) => {
            state.uploading = false;
            state.set_status(format!("Attached {}", file.name));
            state.staged_attachments.push(Attachment {
                name: file.name,
                file_url: file.file_url,
            });
        }
        UiEvent::UploadFailed(reason) => {
            state.uploading = false;
            state.push_error(format!("Upload failed: {reason}"));
        }
        UiEvent::Status(text) => {
            state.set_status(text);
        }
        UiEvent::Error(text) => {
            state.awaiting_reply = false;
            state.push_error(text);
        }
    }
}
