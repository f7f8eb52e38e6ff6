//! Assistant message rendering.
//!
//! Layout: indicator line (▸ + optional timestamp), then body lines behind a
//! muted left border. Block markdown (code fences, headers, lists) goes
//! through [crate::messages::markdown]; plain text is word-wrapped.

use ratatui::text::{Line, Span};

use super::markdown::{
    has_block_markdown, has_inline_markdown, parse_blocks, parse_inline_markdown,
    render_blocks_to_lines,
};
use crate::layouts::{text_muted_style, text_style};
use crate::theme::ChatPalette;
use crate::utils::{LEFT_PADDING, wrap_lines};

/// Assistant message for display.
#[derive(Debug, Clone)]
pub struct AssistantMessage {
    pub text: String,
    /// Optional short timestamp (e.g. "10:32"). Shown in muted style.
    pub timestamp: Option<String>,
}

/// Indicator shown before assistant messages (accent color).
pub const ASSISTANT_INDICATOR: &str = "▸";

/// Left border (2-char) for assistant body lines (muted).
const ASSISTANT_LEFT_BORDER: &str = "│ ";

/// Build lines for an assistant message: indicator line, then bordered body.
pub fn assistant_message_lines(
    msg: &AssistantMessage,
    palette: &ChatPalette,
    width: usize,
) -> Vec<Line<'static>> {
    let border_span = Span::styled(
        ASSISTANT_LEFT_BORDER.to_string(),
        text_muted_style(palette.text_muted),
    );
    let indent_len = LEFT_PADDING.len() + ASSISTANT_LEFT_BORDER.len();

    let mut head = vec![Span::styled(
        ASSISTANT_INDICATOR.to_string(),
        text_style(palette.accent),
    )];
    if let Some(t) = &msg.timestamp {
        head.push(Span::styled(
            format!(" {t}"),
            text_muted_style(palette.text_muted),
        ));
    }
    let mut lines = vec![Line::from(head)];

    let text = msg.text.trim();
    if text.is_empty() {
        return lines;
    }

    if has_block_markdown(text) {
        lines.extend(render_blocks_to_lines(
            &parse_blocks(text),
            palette,
            width,
            indent_len,
            &border_span,
        ));
        return lines;
    }

    let wrap_width = width.saturating_sub(indent_len).max(1);
    for seg in &wrap_lines(text, wrap_width) {
        let mut spans = vec![border_span.clone()];
        if has_inline_markdown(seg) {
            spans.extend(parse_inline_markdown(seg, palette));
        } else {
            spans.push(Span::styled(seg.clone(), text_style(palette.text)));
        }
        lines.push(Line::from(spans));
    }
    lines
}
