pub mod backend;
pub mod conversation;
pub mod error;
pub mod event;
pub mod tool_call;

pub use backend::{AgentBackend, NewConversation, Subscription, UploadedFile};
pub use conversation::{Attachment, Conversation, Message, Role};
pub use error::{ConfabError, Result};
pub use event::ConversationEvent;
pub use tool_call::{DisplayStatus, StatusIcon, StatusTone, ToolCall, ToolResults, resolve};
