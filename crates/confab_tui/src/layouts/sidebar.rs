//! Conversation sidebar: list panel on the left with selection highlight.
//!
//! Each conversation takes two lines (title, then created date in muted).
//! The active conversation is marked with an accent bar; the selected row
//! (keyboard cursor) gets a background highlight when the sidebar has focus.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use confab_core::Conversation;

use super::style::{background_style, border_focused_style, border_style, text_muted_style, text_style};
use crate::theme::ChatPalette;
use crate::utils::{format_day, truncate_ellipsis};

const ITEM_HEIGHT: usize = 2;

/// Build the two lines for one sidebar entry.
pub fn sidebar_item_line(
    conversation: &Conversation,
    palette: &ChatPalette,
    width: usize,
    active: bool,
    selected: bool,
) -> Vec<Line<'static>> {
    let marker = if active { "▎" } else { " " };
    let title = truncate_ellipsis(conversation.display_title(), width.saturating_sub(2));
    let date = format_day(conversation.created_at);

    let mut title_style = text_style(palette.text);
    let mut date_style = text_muted_style(palette.text_muted);
    if selected {
        let bg = background_style(palette.selection_background);
        title_style = title_style.patch(bg);
        date_style = date_style.patch(bg);
    }

    vec![
        Line::from(vec![
            Span::styled(marker.to_string(), text_style(palette.accent)),
            Span::styled(title, title_style),
        ]),
        Line::from(vec![
            Span::raw(" "),
            Span::styled(date, date_style),
        ]),
    ]
}

/// Draw the sidebar: bordered panel with conversation entries, keeping the
/// selected entry in view.
pub fn render_sidebar(
    frame: &mut Frame,
    area: Rect,
    palette: &ChatPalette,
    conversations: &[Conversation],
    active_id: Option<&str>,
    selected: usize,
    focused: bool,
) {
    let border = if focused {
        border_focused_style(palette.border_focused)
    } else {
        border_style(palette.border)
    };
    let block = Block::default()
        .title(" Conversations ")
        .borders(Borders::RIGHT)
        .border_style(border)
        .style(background_style(palette.surface_background));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if conversations.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                " No conversations yet".to_string(),
                text_muted_style(palette.text_muted),
            )),
        ]);
        frame.render_widget(empty, inner);
        return;
    }

    let visible_items = (inner.height as usize / ITEM_HEIGHT).max(1);
    let first = selected.saturating_sub(visible_items.saturating_sub(1));

    let mut lines = Vec::new();
    for (idx, conv) in conversations
        .iter()
        .enumerate()
        .skip(first)
        .take(visible_items)
    {
        let active = active_id == Some(conv.id.as_str());
        let is_selected = focused && idx == selected;
        lines.extend(sidebar_item_line(
            conv,
            palette,
            inner.width as usize,
            active,
            is_selected,
        ));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conv(title: Option<&str>) -> Conversation {
        Conversation::new("assistant", title.map(str::to_string))
    }

    #[test]
    fn item_shows_title_and_date() {
        let palette = ChatPalette::confab_dark();
        let lines = sidebar_item_line(&conv(Some("Planning")), &palette, 30, false, false);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].spans.iter().any(|s| s.content.contains("Planning")));
    }

    #[test]
    fn untitled_item_shows_fallback() {
        let palette = ChatPalette::confab_dark();
        let lines = sidebar_item_line(&conv(None), &palette, 30, false, false);
        assert!(
            lines[0]
                .spans
                .iter()
                .any(|s| s.content.contains("New Conversation"))
        );
    }

    #[test]
    fn long_title_truncated() {
        let palette = ChatPalette::confab_dark();
        let long = "a".repeat(80);
        let lines = sidebar_item_line(&conv(Some(&long)), &palette, 20, false, false);
        let title: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(title.chars().count() <= 20);
        assert!(title.contains('…'));
    }

    #[test]
    fn active_item_has_marker() {
        let palette = ChatPalette::confab_dark();
        let lines = sidebar_item_line(&conv(Some("x")), &palette, 30, true, false);
        assert!(lines[0].spans.iter().any(|s| s.content.contains("▎")));
    }
}
