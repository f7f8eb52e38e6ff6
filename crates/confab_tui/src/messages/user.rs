//! User message rendering.
//!
//! Layout:
//! - First line: left border (accent) + indicator (»), optional timestamp, text start
//! - Continuation: same border + 2-space indent
//! - Attachments: one muted line per file below the text

use ratatui::text::{Line, Span};

use crate::layouts::{text_muted_style, text_style};
use crate::theme::ChatPalette;
use crate::utils::{LEFT_PADDING, wrap_lines};

/// User message for display.
#[derive(Debug, Clone)]
pub struct UserMessage {
    pub text: String,
    /// Names of attached files, shown below the text.
    pub attachment_names: Vec<String>,
    /// Optional short timestamp (e.g. "10:32"). Shown in muted style.
    pub timestamp: Option<String>,
}

/// Indicator shown before user message (accent color).
pub const USER_INDICATOR: &str = "»";

/// Left border (2-char) for user messages.
const USER_LEFT_BORDER: &str = "│ ";

/// Build lines for a user message.
pub fn user_message_lines(
    msg: &UserMessage,
    palette: &ChatPalette,
    width: usize,
) -> Vec<Line<'static>> {
    let indent_len = LEFT_PADDING.len() + USER_LEFT_BORDER.len();
    let wrap_width = width.saturating_sub(indent_len).max(1);
    let wrapped = wrap_lines(msg.text.trim(), wrap_width);
    let border_span = Span::styled(USER_LEFT_BORDER.to_string(), text_style(palette.accent));

    let mut first_line = vec![
        border_span.clone(),
        Span::styled(USER_INDICATOR.to_string(), text_style(palette.accent)),
        Span::raw(" "),
    ];
    if let Some(t) = &msg.timestamp {
        first_line.push(Span::styled(
            format!("{t} "),
            text_muted_style(palette.text_muted),
        ));
    }

    let mut lines = Vec::with_capacity(wrapped.len() + msg.attachment_names.len());
    if wrapped.is_empty() {
        lines.push(Line::from(first_line));
    } else {
        first_line.push(Span::styled(wrapped[0].clone(), text_style(palette.text)));
        lines.push(Line::from(first_line));
        for seg in wrapped.iter().skip(1) {
            lines.push(Line::from(vec![
                border_span.clone(),
                Span::raw(LEFT_PADDING),
                Span::styled(seg.clone(), text_style(palette.text)),
            ]));
        }
    }

    for name in &msg.attachment_names {
        lines.push(Line::from(vec![
            border_span.clone(),
            Span::styled(
                format!("⎙ {name}"),
                text_muted_style(palette.text_muted),
            ),
        ]));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(text: &str) -> UserMessage {
        UserMessage {
            text: text.into(),
            attachment_names: Vec::new(),
            timestamp: None,
        }
    }

    #[test]
    fn first_line_has_indicator() {
        let palette = ChatPalette::confab_dark();
        let lines = user_message_lines(&msg("Hello world"), &palette, 40);
        assert!(!lines.is_empty());
        assert!(
            lines[0]
                .spans
                .iter()
                .any(|s| s.content.as_ref() == USER_INDICATOR)
        );
    }

    #[test]
    fn wraps_long_text() {
        let palette = ChatPalette::confab_dark();
        let lines = user_message_lines(&msg("one two three four five six seven"), &palette, 12);
        assert!(lines.len() > 1);
    }

    #[test]
    fn empty_text_still_renders() {
        let palette = ChatPalette::confab_dark();
        let lines = user_message_lines(&msg(""), &palette, 40);
        assert!(!lines.is_empty());
    }

    #[test]
    fn timestamp_shown() {
        let palette = ChatPalette::confab_dark();
        let mut m = msg("hi");
        m.timestamp = Some("09:15".into());
        let lines = user_message_lines(&m, &palette, 40);
        assert!(lines[0].spans.iter().any(|s| s.content.contains("09:15")));
    }

    #[test]
    fn attachments_listed() {
        let palette = ChatPalette::confab_dark();
        let mut m = msg("(attached files)");
        m.attachment_names = vec!["notes.txt".into(), "plan.md".into()];
        let lines = user_message_lines(&m, &palette, 40);
        assert_eq!(lines.len(), 3);
        assert!(lines[1].spans.iter().any(|s| s.content.contains("notes.txt")));
        assert!(lines[2].spans.iter().any(|s| s.content.contains("plan.md")));
    }
}
