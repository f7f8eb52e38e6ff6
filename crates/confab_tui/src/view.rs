//! TUI view: header (fixed top), sidebar + scrollable chat body, composer +
//! shortcut line (fixed bottom). Ctrl+D switches to a runtime log screen.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::animation::typing_indicator_frame;
use crate::layouts::{
    ChatsLayout, FOOTER_BASE_HEIGHT, HEADER_STATUS_READY, INPUT_ICON, background_style,
    block_for_composer, body_split, border_style, main_splits, render_header, render_sidebar,
    rgb_to_color, shortcut_inner_rect, shortcut_line, text_muted_style, text_style,
    vertical_split,
};
use crate::messages::{assistant, error, tool, user};
use crate::state::{ChatItem, Focus, Screen, TuiState};
use crate::utils::{LEFT_PADDING, MESSAGE_SPACING_LINES, clamp_scroll};

/// Draw the full TUI: main chat or runtime logs depending on state.screen.
pub fn draw(frame: &mut Frame, state: &mut TuiState, area: Rect) {
    match state.screen {
        Screen::DebugLog => draw_debug_log(frame, state, area),
        Screen::Main => draw_main(frame, state, area),
    }
}

/// Runtime logs screen: scrollable list of tracing output. Ctrl+D to close.
fn draw_debug_log(frame: &mut Frame, state: &mut TuiState, area: Rect) {
    use ratatui::widgets::{Block, Borders};

    let palette = &state.palette;
    let block = Block::default()
        .title(" Runtime logs (Ctrl+D to close) ")
        .borders(Borders::ALL)
        .border_style(border_style(palette.border))
        .style(background_style(palette.background));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let viewport_height = inner.height as usize;
    state.log_scroll = clamp_scroll(state.log_scroll, state.log_lines.len(), viewport_height);
    let max_scroll = state.log_lines.len().saturating_sub(viewport_height);
    let offset_from_top = max_scroll.saturating_sub(state.log_scroll);

    let lines: Vec<Line> = state
        .log_lines
        .iter()
        .skip(offset_from_top)
        .take(viewport_height)
        .map(|s| {
            Line::from(Span::styled(
                s.clone(),
                text_muted_style(palette.text_muted),
            ))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

/// Build the chat body lines from items, one blank spacer line between items.
fn build_chat_lines(state: &TuiState, width: usize) -> Vec<Line<'static>> {
    let palette = &state.palette;
    let spacer = Line::from("");
    let mut lines = Vec::new();
    for item in &state.items {
        if !lines.is_empty() {
            for _ in 0..MESSAGE_SPACING_LINES {
                lines.push(spacer.clone());
            }
        }
        match item {
            ChatItem::User(m) => lines.extend(user::user_message_lines(m, palette, width)),
            ChatItem::Assistant(m) => {
                lines.extend(assistant::assistant_message_lines(m, palette, width))
            }
            ChatItem::Tool(t) => lines.extend(tool::tool_call_lines(t, palette, state.frame_count)),
            ChatItem::Error(m) => lines.extend(error::error_message_lines(m, palette, width)),
        }
    }
    lines
}

/// Main chat view: header, sidebar + chat body, composer + shortcut footer.
fn draw_main(frame: &mut Frame, state: &mut TuiState, area: Rect) {
    let attachments_row: u16 = if state.staged_attachments.is_empty() { 0 } else { 1 };
    let splits = main_splits(area, FOOTER_BASE_HEIGHT + attachments_row);

    frame.render_widget(
        ratatui::widgets::Block::default().style(background_style(state.palette.background)),
        area,
    );

    // ---- Header ----
    let status = if state.status.is_empty() {
        HEADER_STATUS_READY
    } else {
        state.status.as_str()
    };
    let lowered = state.status.to_lowercase();
    let has_error = lowered.contains("error") || lowered.contains("failed");
    let title = state.active_title().to_string();
    render_header(
        frame,
        splits.header,
        &state.palette,
        &title,
        status,
        state.awaiting_reply || state.uploading,
        has_error,
    );

    // ---- Body: sidebar + chat ----
    let (sidebar_rect, chat_rect) = body_split(splits.body, state.sidebar_visible);
    if let Some(rect) = sidebar_rect {
        render_sidebar(
            frame,
            rect,
            &state.palette,
            &state.conversations,
            state.active_id.as_deref(),
            state.sidebar_selected,
            state.focus == Focus::Sidebar,
        );
    }

    let chat = ChatsLayout::new(chat_rect);
    let width = chat.inner.width as usize;
    let viewport_height = chat.viewport_height();

    // Spinner frames advance, so cached lines go stale while a tool runs.
    if state.cache_dirty || state.has_running_tool() {
        state.cached_lines = build_chat_lines(state, width);
        state.cache_dirty = false;
    }
    let mut all_lines = state.cached_lines.clone();

    if state.awaiting_reply && !state.has_running_tool() {
        if !all_lines.is_empty() {
            all_lines.push(Line::from(""));
        }
        all_lines.push(Line::from(vec![
            Span::raw(LEFT_PADDING),
            Span::styled(
                typing_indicator_frame(state.frame_count).to_string(),
                text_style(state.palette.accent),
            ),
        ]));
    }

    let content_height = all_lines.len();
    state.scroll = clamp_scroll(state.scroll, content_height, viewport_height);
    let max_scroll = content_height.saturating_sub(viewport_height);
    let offset_from_top = max_scroll.saturating_sub(state.scroll);

    if state.items.is_empty() && !state.awaiting_reply {
        let para = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "confab".to_string(),
                text_style(state.palette.text),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "How can I help you today?".to_string(),
                text_muted_style(state.palette.text_muted),
            )),
        ])
        .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(para, chat.inner);
    } else {
        let visible: Vec<Line> = all_lines
            .into_iter()
            .skip(offset_from_top)
            .take(viewport_height)
            .collect();
        frame.render_widget(Paragraph::new(visible).wrap(Wrap { trim: false }), chat.inner);
    }

    // Scrollbar when content exceeds viewport
    if content_height > viewport_height && chat.inner.width > 0 {
        let thumb_height = (((viewport_height as f64) * (viewport_height as f64)
            / (content_height as f64).max(1.0))
            .ceil() as u16)
            .max(1);
        let scroll_ratio = if max_scroll == 0 {
            1.0
        } else {
            offset_from_top as f64 / max_scroll as f64
        };
        let thumb_y =
            (scroll_ratio * (viewport_height as f64 - thumb_height as f64)).round() as u16;
        let track_rect = Rect {
            x: chat.inner.x + chat.inner.width.saturating_sub(1),
            y: chat.inner.y,
            width: 1,
            height: chat.inner.height,
        };
        frame.render_widget(
            ratatui::widgets::Block::default().style(
                ratatui::style::Style::default()
                    .bg(rgb_to_color(state.palette.scrollbar_track)),
            ),
            track_rect,
        );
        let thumb_rect = Rect {
            x: track_rect.x,
            y: track_rect.y + thumb_y,
            width: 1,
            height: thumb_height,
        };
        frame.render_widget(
            ratatui::widgets::Block::default().style(
                ratatui::style::Style::default()
                    .bg(rgb_to_color(state.palette.scrollbar_thumb)),
            ),
            thumb_rect,
        );
    }

    // ---- Footer: attachments line, composer block, shortcut line ----
    let mut footer = splits.footer;
    if attachments_row > 0 {
        let (attach_rect, rest) = vertical_split(footer, 1);
        footer = rest;
        let names: Vec<String> = state
            .staged_attachments
            .iter()
            .map(|a| a.name.clone())
            .collect();
        let attach_line = Line::from(vec![
            Span::raw(LEFT_PADDING),
            Span::styled(
                format!("⎙ {}", names.join(", ")),
                text_muted_style(state.palette.text_muted),
            ),
        ]);
        frame.render_widget(Paragraph::new(attach_line), attach_rect);
    }
    let (input_rect, shortcut_rect) = vertical_split(footer, 3);

    let composer_focused = state.focus == Focus::Composer;
    let block = block_for_composer(&state.palette, composer_focused);
    let inner = block.inner(input_rect);
    frame.render_widget(block, input_rect);

    let placeholder = "Ask anything…";
    let (icon_style, content_style) = if state.input_buffer.is_empty() {
        (
            text_style(state.palette.accent),
            text_style(state.palette.text_placeholder),
        )
    } else {
        (
            text_style(state.palette.success),
            text_style(state.palette.text),
        )
    };
    let input_line = Line::from(vec![
        Span::styled(INPUT_ICON.to_string(), icon_style),
        Span::styled(
            if state.input_buffer.is_empty() {
                placeholder.to_string()
            } else {
                state.input_buffer.clone()
            },
            content_style,
        ),
    ]);
    frame.render_widget(Paragraph::new(input_line), inner);

    if composer_focused {
        let icon_width = INPUT_ICON.width();
        let before_cursor =
            &state.input_buffer[..state.input_cursor.min(state.input_buffer.len())];
        let cursor_col = (inner.x + icon_width as u16 + before_cursor.width() as u16)
            .min(inner.x + inner.width);
        frame.set_cursor_position((cursor_col, inner.y));
    }

    frame.render_widget(
        Paragraph::new(shortcut_line(
            &state.palette,
            state.focus == Focus::Sidebar,
            !state.input_buffer.is_empty(),
        )),
        shortcut_inner_rect(shortcut_rect),
    );
}
