//! TUI state: conversation list, chat items, composer, scroll, theme.
//!
//! [TuiState] holds everything the view needs to render. [ChatItem] wraps
//! message types from [crate::messages] so the chat body is a single list.
//! Chat items are rebuilt from backend snapshots; only expansion state
//! survives a rebuild (matched by tool position).

use chrono::{DateTime, Utc};

use confab_core::{Attachment, Conversation, Message, Role};

use crate::messages::{
    assistant::AssistantMessage, error::ErrorMessage, tool::ToolCallItem, user::UserMessage,
};
use crate::theme::{Appearance, ChatPalette};
use crate::utils::MAX_LOG_LINES;

/// Which screen is currently shown (main chat vs debug log).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Main,
    DebugLog,
}

/// Which pane receives keyboard input on the main screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Composer,
    Sidebar,
}

/// One item in the chat body.
#[derive(Debug, Clone)]
pub enum ChatItem {
    User(UserMessage),
    Assistant(AssistantMessage),
    Tool(ToolCallItem),
    Error(ErrorMessage),
}

/// TUI application state.
#[derive(Debug)]
pub struct TuiState {
    /// Sidebar entries, most recently updated first.
    pub conversations: Vec<Conversation>,
    /// Id of the open conversation.
    pub active_id: Option<String>,
    /// Keyboard cursor in the sidebar (index into conversations).
    pub sidebar_selected: usize,
    /// Sidebar shown (Ctrl+B toggles).
    pub sidebar_visible: bool,
    /// Which pane has keyboard focus.
    pub focus: Focus,
    /// Ordered chat items of the open conversation.
    pub items: Vec<ChatItem>,
    /// Current composer line.
    pub input_buffer: String,
    /// Cursor position within input_buffer (0..=len).
    pub input_cursor: usize,
    /// Uploaded files staged for the next message.
    pub staged_attachments: Vec<Attachment>,
    /// An upload is in flight; Enter is a no-op until it settles.
    pub uploading: bool,
    /// A message was sent and no assistant reply has landed yet.
    pub awaiting_reply: bool,
    /// Vertical scroll offset (lines scrolled up from bottom; 0 = bottom).
    pub scroll: usize,
    /// When true, keep scroll at bottom on new content.
    pub auto_scroll: bool,
    /// Current appearance (dark/light), toggled with Ctrl+T.
    pub appearance: Appearance,
    /// Theme palette derived from appearance.
    pub palette: ChatPalette,
    /// Transient status text for the header right side.
    pub status: String,
    /// When set, status auto-clears after a timeout.
    pub status_set_at: Option<std::time::Instant>,
    /// Incremented each draw for spinner/typing animation.
    pub frame_count: u64,
    /// When true, next loop iteration draws; cleared after draw.
    pub needs_redraw: bool,
    /// Cached chat lines; invalidated by item changes / resize.
    pub cached_lines: Vec<ratatui::text::Line<'static>>,
    /// True when cached_lines is stale.
    pub cache_dirty: bool,
    /// Current screen (main chat or debug log).
    pub screen: Screen,
    /// Debug log lines (tracing output). Newest at end.
    pub log_lines: Vec<String>,
    /// Scroll offset for the debug log view.
    pub log_scroll: usize,
    /// Agent whose conversations are shown.
    pub agent_name: String,
}

impl Default for TuiState {
    fn default() -> Self {
        Self {
            conversations: Vec::new(),
            active_id: None,
            sidebar_selected: 0,
            sidebar_visible: true,
            focus: Focus::Composer,
            items: Vec::new(),
            input_buffer: String::new(),
            input_cursor: 0,
            staged_attachments: Vec::new(),
            uploading: false,
            awaiting_reply: false,
            scroll: 0,
            auto_scroll: true,
            appearance: Appearance::Dark,
            palette: ChatPalette::confab_dark(),
            status: String::new(),
            status_set_at: None,
            frame_count: 0,
            needs_redraw: true,
            cached_lines: Vec::new(),
            cache_dirty: true,
            screen: Screen::Main,
            log_lines: Vec::new(),
            log_scroll: 0,
            agent_name: "assistant".to_string(),
        }
    }
}

fn short_time(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&chrono::Local).format("%H:%M").to_string()
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_appearance(appearance: Appearance) -> Self {
        Self {
            appearance,
            palette: ChatPalette::for_appearance(appearance),
            ..Self::default()
        }
    }

    /// Switch between dark and light palettes.
    pub fn toggle_appearance(&mut self) {
        self.appearance = self.appearance.toggled();
        self.palette = ChatPalette::for_appearance(self.appearance);
        self.cache_dirty = true;
        self.needs_redraw = true;
    }

    /// Title of the open conversation for the header.
    pub fn active_title(&self) -> &str {
        self.active_id
            .as_deref()
            .and_then(|id| self.conversations.iter().find(|c| c.id == id))
            .map(|c| c.display_title())
            .unwrap_or("confab")
    }

    fn touch(&mut self) {
        self.cache_dirty = true;
        self.needs_redraw = true;
        if self.auto_scroll {
            self.scroll = 0;
        }
    }

    /// Replace chat items from a snapshot's message list. Expansion state of
    /// tool items carries over by position.
    pub fn set_messages(&mut self, messages: &[Message]) {
        let expanded: Vec<bool> = self
            .items
            .iter()
            .filter_map(|item| match item {
                ChatItem::Tool(t) => Some(t.expanded),
                _ => None,
            })
            .collect();

        let mut items = Vec::new();
        let mut tool_idx = 0;
        for message in messages {
            match message.role {
                Role::User => items.push(ChatItem::User(UserMessage {
                    text: message.content.clone(),
                    attachment_names: message
                        .attachments
                        .iter()
                        .map(|a| a.name.clone())
                        .collect(),
                    timestamp: Some(short_time(message.created_at)),
                })),
                Role::Assistant => {
                    for call in &message.tool_calls {
                        let mut item = ToolCallItem::new(call.clone());
                        if expanded.get(tool_idx).copied().unwrap_or(false) {
                            item.toggle();
                        }
                        tool_idx += 1;
                        items.push(ChatItem::Tool(item));
                    }
                    if !message.content.is_empty() {
                        items.push(ChatItem::Assistant(AssistantMessage {
                            text: message.content.clone(),
                            timestamp: Some(short_time(message.created_at)),
                        }));
                    }
                }
            }
        }
        self.items = items;

        if let Some(Message {
            role: Role::Assistant,
            ..
        }) = messages.last()
        {
            self.awaiting_reply = false;
        }
        self.touch();
    }

    /// Echo a just-sent user message before the snapshot confirms it.
    pub fn push_user_echo(&mut self, text: String, attachments: &[Attachment]) {
        self.items.push(ChatItem::User(UserMessage {
            text,
            attachment_names: attachments.iter().map(|a| a.name.clone()).collect(),
            timestamp: Some(short_time(Utc::now())),
        }));
        self.awaiting_reply = true;
        self.touch();
    }

    /// Push an inline error item.
    pub fn push_error(&mut self, text: String) {
        self.items.push(ChatItem::Error(ErrorMessage { text }));
        self.touch();
    }

    /// Toggle expansion of the last expandable tool item (key `e`).
    pub fn toggle_last_tool(&mut self) {
        for item in self.items.iter_mut().rev() {
            if let ChatItem::Tool(t) = item {
                if t.call.is_expandable() {
                    t.toggle();
                    self.cache_dirty = true;
                    self.needs_redraw = true;
                    return;
                }
            }
        }
    }

    /// True while any tool call in the chat is spinning.
    pub fn has_running_tool(&self) -> bool {
        self.items.iter().any(|item| {
            matches!(item, ChatItem::Tool(t) if t.call.display().spinning)
        })
    }

    // --- Sidebar ---

    /// Replace the conversation list, keeping the selection in range.
    pub fn set_conversations(&mut self, conversations: Vec<Conversation>) {
        self.conversations = conversations;
        self.sidebar_selected = self
            .sidebar_selected
            .min(self.conversations.len().saturating_sub(1));
        self.needs_redraw = true;
    }

    pub fn sidebar_select_up(&mut self) {
        self.sidebar_selected = self.sidebar_selected.saturating_sub(1);
        self.needs_redraw = true;
    }

    pub fn sidebar_select_down(&mut self) {
        if self.sidebar_selected + 1 < self.conversations.len() {
            self.sidebar_selected += 1;
        }
        self.needs_redraw = true;
    }

    /// Id under the sidebar cursor.
    pub fn selected_conversation_id(&self) -> Option<&str> {
        self.conversations
            .get(self.sidebar_selected)
            .map(|c| c.id.as_str())
    }

    // --- Composer ---

    /// Input buffer: insert character at cursor.
    pub fn input_insert(&mut self, c: char) {
        self.input_buffer.insert(self.input_cursor, c);
        self.input_cursor += c.len_utf8();
        self.needs_redraw = true;
    }

    /// Input buffer: delete character before cursor (UTF-8 safe).
    pub fn input_backspace(&mut self) {
        if self.input_cursor == 0 {
            return;
        }
        let mut start = self.input_cursor - 1;
        while start > 0 && (self.input_buffer.as_bytes()[start] & 0xC0) == 0x80 {
            start -= 1;
        }
        self.input_buffer.drain(start..self.input_cursor);
        self.input_cursor = start;
        self.needs_redraw = true;
    }

    /// Input buffer: delete character at cursor (forward delete, UTF-8 safe).
    pub fn input_delete(&mut self) {
        if self.input_cursor >= self.input_buffer.len() {
            return;
        }
        let mut end = self.input_cursor + 1;
        while end < self.input_buffer.len() && (self.input_buffer.as_bytes()[end] & 0xC0) == 0x80 {
            end += 1;
        }
        self.input_buffer.drain(self.input_cursor..end);
        self.needs_redraw = true;
    }

    /// Move cursor left one character (UTF-8 safe).
    pub fn input_cursor_left(&mut self) {
        if self.input_cursor == 0 {
            return;
        }
        let mut start = self.input_cursor - 1;
        while start > 0 && (self.input_buffer.as_bytes()[start] & 0xC0) == 0x80 {
            start -= 1;
        }
        self.input_cursor = start;
        self.needs_redraw = true;
    }

    /// Move cursor right one character (UTF-8 safe).
    pub fn input_cursor_right(&mut self) {
        if self.input_cursor >= self.input_buffer.len() {
            return;
        }
        let mut end = self.input_cursor + 1;
        while end < self.input_buffer.len() && (self.input_buffer.as_bytes()[end] & 0xC0) == 0x80 {
            end += 1;
        }
        self.input_cursor = end;
        self.needs_redraw = true;
    }

    pub fn input_cursor_home(&mut self) {
        self.input_cursor = 0;
        self.needs_redraw = true;
    }

    pub fn input_cursor_end(&mut self) {
        self.input_cursor = self.input_buffer.len();
        self.needs_redraw = true;
    }

    /// Clear entire input buffer (Ctrl+U).
    pub fn input_clear_line(&mut self) {
        self.input_buffer.clear();
        self.input_cursor = 0;
        self.needs_redraw = true;
    }

    /// Delete from cursor to end of line (Ctrl+K).
    pub fn input_kill_to_end(&mut self) {
        self.input_buffer.truncate(self.input_cursor);
        self.needs_redraw = true;
    }

    /// Input buffer: clear and return current line (for submit).
    pub fn input_take(&mut self) -> String {
        let line = std::mem::take(&mut self.input_buffer);
        self.input_cursor = 0;
        self.needs_redraw = true;
        line
    }

    // --- Scroll ---

    /// Scroll up (increase offset); disables auto_scroll.
    pub fn scroll_up(&mut self, delta: usize) {
        self.auto_scroll = false;
        self.scroll = self.scroll.saturating_add(delta);
        self.needs_redraw = true;
    }

    /// Scroll down (decrease offset); re-enables auto_scroll at bottom.
    pub fn scroll_down(&mut self, delta: usize) {
        self.scroll = self.scroll.saturating_sub(delta);
        if self.scroll == 0 {
            self.auto_scroll = true;
        }
        self.needs_redraw = true;
    }

    // --- Status / debug log ---

    /// Set a transient status (auto-clears after a few seconds).
    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = text.into();
        self.status_set_at = Some(std::time::Instant::now());
        self.needs_redraw = true;
    }

    /// Append a line to the debug log (Ctrl+D screen). Drops oldest over capacity.
    pub fn push_log_line(&mut self, line: String) {
        self.log_lines.push(line);
        if self.log_lines.len() > MAX_LOG_LINES {
            let excess = self.log_lines.len() - MAX_LOG_LINES;
            self.log_lines.drain(0..excess);
        }
        self.needs_redraw = true;
    }

    pub fn log_scroll_up(&mut self, delta: usize) {
        self.log_scroll = self.log_scroll.saturating_add(delta);
        self.needs_redraw = true;
    }

    pub fn log_scroll_down(&mut self, delta: usize) {
        self.log_scroll = self.log_scroll.saturating_sub(delta);
        self.needs_redraw = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confab_core::ToolCall;
    use serde_json::json;

    fn assistant_with_tool(status: &str) -> Message {
        Message::assistant("done").with_tool_calls(vec![ToolCall {
            name: Some("tool.search".into()),
            status: Some(status.into()),
            arguments_payload: Some(r#"{"q":1}"#.into()),
            results: Some(json!({ "success": true })),
        }])
    }

    #[test]
    fn input_insert_ascii() {
        let mut s = TuiState::new();
        s.input_insert('a');
        s.input_insert('b');
        assert_eq!(s.input_buffer, "ab");
        assert_eq!(s.input_cursor, 2);
    }

    #[test]
    fn input_insert_utf8_emoji() {
        let mut s = TuiState::new();
        s.input_insert('é');
        s.input_insert('🎉');
        assert_eq!(s.input_buffer, "é🎉");
        assert_eq!(s.input_cursor, "é🎉".len());
    }

    #[test]
    fn input_backspace_at_end() {
        let mut s = TuiState::new();
        s.input_buffer = "hi".to_string();
        s.input_cursor = 2;
        s.input_backspace();
        assert_eq!(s.input_buffer, "h");
        assert_eq!(s.input_cursor, 1);
    }

    #[test]
    fn input_backspace_at_zero_no_op() {
        let mut s = TuiState::new();
        s.input_buffer = "x".to_string();
        s.input_cursor = 0;
        s.input_backspace();
        assert_eq!(s.input_buffer, "x");
    }

    #[test]
    fn input_cursor_multibyte() {
        let mut s = TuiState::new();
        s.input_insert('你');
        s.input_insert('好');
        s.input_cursor_left();
        assert_eq!(s.input_cursor, "你".len());
        s.input_cursor_left();
        assert_eq!(s.input_cursor, 0);
        s.input_cursor_right();
        assert_eq!(s.input_cursor, "你".len());
    }

    #[test]
    fn input_delete_multibyte() {
        let mut s = TuiState::new();
        s.input_buffer = "你好".to_string();
        s.input_cursor = 0;
        s.input_delete();
        assert_eq!(s.input_buffer, "好");
    }

    #[test]
    fn input_take_returns_and_resets() {
        let mut s = TuiState::new();
        s.input_buffer = "hello".to_string();
        s.input_cursor = 5;
        assert_eq!(s.input_take(), "hello");
        assert!(s.input_buffer.is_empty());
        assert_eq!(s.input_cursor, 0);
    }

    #[test]
    fn input_kill_to_end() {
        let mut s = TuiState::new();
        s.input_buffer = "hello world".to_string();
        s.input_cursor = 5;
        s.input_kill_to_end();
        assert_eq!(s.input_buffer, "hello");
    }

    #[test]
    fn scroll_up_disables_auto_scroll() {
        let mut s = TuiState::new();
        s.scroll_up(3);
        assert!(!s.auto_scroll);
        assert_eq!(s.scroll, 3);
    }

    #[test]
    fn scroll_down_to_zero_enables_auto_scroll() {
        let mut s = TuiState::new();
        s.auto_scroll = false;
        s.scroll = 1;
        s.scroll_down(1);
        assert_eq!(s.scroll, 0);
        assert!(s.auto_scroll);
    }

    #[test]
    fn set_messages_builds_items() {
        let mut s = TuiState::new();
        s.set_messages(&[Message::user("hi"), assistant_with_tool("completed")]);
        assert_eq!(s.items.len(), 3);
        assert!(matches!(&s.items[0], ChatItem::User(_)));
        assert!(matches!(&s.items[1], ChatItem::Tool(_)));
        assert!(matches!(&s.items[2], ChatItem::Assistant(_)));
    }

    #[test]
    fn set_messages_clears_awaiting_on_assistant_reply() {
        let mut s = TuiState::new();
        s.awaiting_reply = true;
        s.set_messages(&[Message::user("hi")]);
        assert!(s.awaiting_reply);
        s.set_messages(&[Message::user("hi"), Message::assistant("hello")]);
        assert!(!s.awaiting_reply);
    }

    #[test]
    fn set_messages_preserves_expansion_by_position() {
        let mut s = TuiState::new();
        s.set_messages(&[assistant_with_tool("completed")]);
        s.toggle_last_tool();
        assert!(matches!(&s.items[0], ChatItem::Tool(t) if t.expanded));

        // Same tool plus a new one in the next snapshot
        s.set_messages(&[assistant_with_tool("completed"), assistant_with_tool("running")]);
        assert!(matches!(&s.items[0], ChatItem::Tool(t) if t.expanded));
        assert!(matches!(&s.items[2], ChatItem::Tool(t) if !t.expanded));
    }

    #[test]
    fn toggle_last_tool_skips_running() {
        let mut s = TuiState::new();
        s.set_messages(&[assistant_with_tool("running")]);
        s.toggle_last_tool();
        assert!(matches!(&s.items[0], ChatItem::Tool(t) if !t.expanded));
    }

    #[test]
    fn has_running_tool() {
        let mut s = TuiState::new();
        s.set_messages(&[assistant_with_tool("running")]);
        assert!(s.has_running_tool());
        s.set_messages(&[assistant_with_tool("completed")]);
        assert!(!s.has_running_tool());
    }

    #[test]
    fn push_user_echo_sets_awaiting() {
        let mut s = TuiState::new();
        s.push_user_echo("hello".into(), &[]);
        assert!(s.awaiting_reply);
        assert_eq!(s.items.len(), 1);
    }

    #[test]
    fn sidebar_selection_stays_in_range() {
        let mut s = TuiState::new();
        s.set_conversations(vec![
            Conversation::new("assistant", None),
            Conversation::new("assistant", None),
        ]);
        s.sidebar_select_down();
        assert_eq!(s.sidebar_selected, 1);
        s.sidebar_select_down();
        assert_eq!(s.sidebar_selected, 1);
        s.set_conversations(vec![Conversation::new("assistant", None)]);
        assert_eq!(s.sidebar_selected, 0);
    }

    #[test]
    fn active_title_falls_back() {
        let s = TuiState::new();
        assert_eq!(s.active_title(), "confab");
    }

    #[test]
    fn toggle_appearance_swaps_palette() {
        let mut s = TuiState::new();
        let dark_bg = s.palette.background;
        s.toggle_appearance();
        assert_eq!(s.appearance, Appearance::Light);
        assert_ne!(s.palette.background, dark_bg);
        assert!(s.cache_dirty);
    }

    #[test]
    fn log_lines_capped() {
        let mut s = TuiState::new();
        for i in 0..2500 {
            s.push_log_line(format!("line {i}"));
        }
        assert!(s.log_lines.len() <= MAX_LOG_LINES);
    }

    #[test]
    fn auto_scroll_off_preserves_scroll() {
        let mut s = TuiState::new();
        s.auto_scroll = false;
        s.scroll = 10;
        s.push_user_echo("hi".into(), &[]);
        assert_eq!(s.scroll, 10);
    }

    #[test]
    fn cache_dirty_on_snapshot() {
        let mut s = TuiState::new();
        s.cache_dirty = false;
        s.set_messages(&[Message::user("x")]);
        assert!(s.cache_dirty);
    }
}
