//! Header bar: conversation title left, status with a colored dot right.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::style::{
    background_style, border_style, danger_style, success_style, text_muted_style, text_style,
    warning_style,
};
use crate::theme::ChatPalette;
use crate::utils::{horizontal_padding, truncate_ellipsis};

/// Default status when none is set.
pub const HEADER_STATUS_READY: &str = "Ready";

fn dot_style(palette: &ChatPalette, busy: bool, has_error: bool) -> Style {
    if has_error {
        danger_style(palette.danger)
    } else if busy {
        warning_style(palette.warning)
    } else {
        success_style(palette.success)
    }
}

/// One-line header: bold title, gap, then "● status" right-aligned. The
/// title is truncated when the status would not fit beside it.
pub fn header_line(
    title: &str,
    right: &str,
    busy: bool,
    has_error: bool,
    palette: &ChatPalette,
    width: u16,
) -> Line<'static> {
    let width = width as usize;
    let right_len = 2 + right.chars().count();
    let title_max = width.saturating_sub(right_len + 1).max(1);
    let title = truncate_ellipsis(title, title_max);
    let gap = width.saturating_sub(title.chars().count() + right_len);
    Line::from(vec![
        Span::styled(title, text_style(palette.text).add_modifier(Modifier::BOLD)),
        Span::raw(" ".repeat(gap)),
        Span::styled("● ".to_string(), dot_style(palette, busy, has_error)),
        Span::styled(right.to_string(), text_muted_style(palette.text_muted)),
    ])
}

/// Draw the two-line header strip: content line, then bottom border.
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    palette: &ChatPalette,
    title: &str,
    status: &str,
    busy: bool,
    has_error: bool,
) {
    let bg = background_style(palette.status_bar_background);
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(border_style(palette.border))
        .style(bg);
    let inner = horizontal_padding(area);
    let line = header_line(title, status, busy, has_error, palette, inner.width);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(line).style(bg), inner);
}
