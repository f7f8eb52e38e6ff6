//! Shortcut hint layout: fixed line below the composer (muted style), context-aware hints.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use super::input::INPUT_PADDING_H;
use super::style::text_muted_style;
use crate::theme::ChatPalette;
use crate::utils::horizontal_padding_with;

/// Horizontal inset so the hint aligns with composer content (border + padding).
const SHORTCUT_INSET_H: u16 = 1 + INPUT_PADDING_H;

/// Rect for the shortcut line, padded to align with the composer content above.
pub fn shortcut_inner_rect(area: Rect) -> Rect {
    horizontal_padding_with(area, SHORTCUT_INSET_H)
}

/// Build the shortcut line for the footer. Dynamic based on state:
/// - Sidebar focused: navigation and conversation management hints
/// - Input has text: send/clear hints
/// - Otherwise: scroll, expand, new chat, quit hints
pub fn shortcut_line(
    palette: &ChatPalette,
    sidebar_focused: bool,
    input_has_text: bool,
) -> Line<'static> {
    let hint = if sidebar_focused {
        "↑↓: select  ·  Enter: open  ·  n: new  ·  d: delete  ·  Tab: back  ·  Ctrl+C: quit"
    } else if input_has_text {
        "Enter: send  ·  Ctrl+U: clear  ·  /attach <path>  ·  Ctrl+C: quit"
    } else {
        "↑↓: scroll  ·  e: expand tool  ·  Tab: sidebar  ·  Ctrl+N: new chat  ·  q: quit"
    };
    Line::from(vec![Span::styled(
        hint.to_string(),
        text_muted_style(palette.text_muted),
    )])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortcut_inner_rect_zero_width() {
        let area = Rect::new(0, 0, 0, 1);
        let inner = shortcut_inner_rect(area);
        assert_eq!(inner.width, 0);
    }

    #[test]
    fn shortcut_line_sidebar() {
        let palette = ChatPalette::confab_dark();
        let line = shortcut_line(&palette, true, false);
        assert!(line.spans.iter().any(|s| s.content.contains("delete")));
    }

    #[test]
    fn shortcut_line_typing() {
        let palette = ChatPalette::confab_dark();
        let line = shortcut_line(&palette, false, true);
        assert!(line.spans.iter().any(|s| s.content.contains("Enter: send")));
    }

    #[test]
    fn shortcut_line_idle() {
        let palette = ChatPalette::confab_dark();
        let line = shortcut_line(&palette, false, false);
        assert!(line.spans.iter().any(|s| s.content.contains("scroll")));
    }
}
