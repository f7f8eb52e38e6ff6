//! Screen region splits: header / body / footer, and sidebar / chat columns.

use ratatui::layout::{Constraint, Layout, Rect};

use crate::utils::SIDEBAR_WIDTH;

/// Fixed height for the header (title line + border).
pub const HEADER_HEIGHT: u16 = 2;

/// Base footer height: composer block (3 lines) + shortcut line. An extra
/// line is added when staged attachments are shown.
pub const FOOTER_BASE_HEIGHT: u16 = 4;

/// Regions for the main app layout.
#[derive(Debug, Clone)]
pub struct MainSplits {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

/// Split `area` into header (fixed top), body (flexible), footer (fixed bottom).
pub fn main_splits(area: Rect, footer_height: u16) -> MainSplits {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(footer_height),
    ])
    .areas(area);
    MainSplits {
        header,
        body,
        footer,
    }
}

/// Split the body into an optional sidebar column (left) and the chat area.
/// With the sidebar hidden, or on terminals too narrow for it, the chat
/// takes the full body.
pub fn body_split(body: Rect, sidebar_visible: bool) -> (Option<Rect>, Rect) {
    if !sidebar_visible || body.width <= SIDEBAR_WIDTH {
        return (None, body);
    }
    let [sidebar, chat] =
        Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)]).areas(body);
    (Some(sidebar), chat)
}

/// Split a vertical strip into top and bottom with a given top height.
pub fn vertical_split(area: Rect, top_height: u16) -> (Rect, Rect) {
    let [top, bottom] =
        Layout::vertical([Constraint::Length(top_height), Constraint::Min(0)]).areas(area);
    (top, bottom)
}
