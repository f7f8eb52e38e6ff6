//! Palette-to-ratatui style helpers.
//!
//! Layout chrome and message renderers build styles through these helpers so
//! every color passes through [ChatPalette] roles.
//!
//! [ChatPalette]: crate::theme::ChatPalette

use ratatui::style::{Color, Style};

use crate::theme::Rgb;

/// Convert theme [Rgb] to ratatui [Color].
#[inline]
pub fn rgb_to_color(rgb: Rgb) -> Color {
    rgb.into()
}

#[inline]
fn fg(rgb: Rgb) -> Style {
    Style::default().fg(rgb.into())
}

/// Border color for unfocused panels.
pub fn border_style(border: Rgb) -> Style {
    fg(border)
}

/// Border color for the focused panel.
pub fn border_focused_style(border_focused: Rgb) -> Style {
    fg(border_focused)
}

/// Background fill for a panel.
pub fn background_style(bg: Rgb) -> Style {
    Style::default().bg(bg.into())
}

/// Primary text.
pub fn text_style(text: Rgb) -> Style {
    fg(text)
}

/// Secondary/muted text.
pub fn text_muted_style(text_muted: Rgb) -> Style {
    fg(text_muted)
}

/// Success state (completed tool calls).
pub fn success_style(success: Rgb) -> Style {
    fg(success)
}

/// Error state (failed tool calls, inline errors).
pub fn danger_style(danger: Rgb) -> Style {
    fg(danger)
}

/// Warning state (busy indicator).
pub fn warning_style(warning: Rgb) -> Style {
    fg(warning)
}
