//! Composer bar layout: bottom strip for the message input line.

use ratatui::widgets::{Block, BorderType, Borders, Padding};

use super::style::{background_style, border_focused_style, border_style};
use crate::theme::ChatPalette;

/// Horizontal padding inside the composer block (each side).
pub const INPUT_PADDING_H: u16 = 2;

/// Icon shown at the start of the input line.
pub const INPUT_ICON: &str = "▸ ";

/// Block for the composer with full rounded border and horizontal padding.
/// When focused is true, the border uses the focus color.
pub fn block_for_composer(palette: &ChatPalette, focused: bool) -> Block<'static> {
    let border = if focused {
        border_focused_style(palette.border_focused)
    } else {
        border_style(palette.border)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
        .style(background_style(palette.status_bar_background))
        .padding(Padding::new(INPUT_PADDING_H, INPUT_PADDING_H, 0, 0))
}
