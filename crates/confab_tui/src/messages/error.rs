//! Inline errors in the chat transcript (✗ icon, danger style).

use ratatui::text::{Line, Span};

use crate::layouts::danger_style;
use crate::theme::ChatPalette;
use crate::utils::{LEFT_PADDING, wrap_lines};

/// Error surfaced inline in the conversation (subscription or command failures).
#[derive(Debug, Clone)]
pub struct ErrorMessage {
    pub text: String,
}

/// ✗ icon on the first line, continuations indented to align.
pub fn error_message_lines(
    msg: &ErrorMessage,
    palette: &ChatPalette,
    width: usize,
) -> Vec<Line<'static>> {
    let style = danger_style(palette.danger);
    let wrap_width = width.saturating_sub(LEFT_PADDING.len()).max(1);
    let segments = wrap_lines(msg.text.trim(), wrap_width);
    if segments.is_empty() {
        return vec![Line::from(Span::styled("✗", style))];
    }
    segments
        .into_iter()
        .enumerate()
        .map(|(n, seg)| {
            let lead = if n == 0 {
                Span::styled("✗ ", style)
            } else {
                Span::raw(LEFT_PADDING)
            };
            Line::from(vec![lead, Span::styled(seg, style)])
        })
        .collect()
}
