//! Layout components built from [crate::utils] and [crate::theme].
//!
//! - **[split]** — Split the screen into header, sidebar, chat body, footer.
//! - **[style]** — Map palette [Rgb] to ratatui [Style]/[Color] for borders and text.
//! - **[head]** — Header strip layout and styled header line.
//! - **[sidebar]** — Conversation list panel (left column).
//! - **[chats]** — Chat area layout and scroll helpers.
//! - **[input]** — Composer bar layout and block.
//! - **[shortcut]** — Shortcut hint line (below composer).
//!
//! [Rgb]: crate::theme::Rgb

mod chats;
mod head;
mod input;
mod shortcut;
mod sidebar;
mod split;
mod style;

pub use chats::ChatsLayout;
pub use head::{HEADER_STATUS_READY, header_line, render_header};
pub use input::{INPUT_ICON, INPUT_PADDING_H, block_for_composer};
pub use shortcut::{shortcut_inner_rect, shortcut_line};
pub use sidebar::{render_sidebar, sidebar_item_line};
pub use split::{
    FOOTER_BASE_HEIGHT, HEADER_HEIGHT, MainSplits, body_split, main_splits, vertical_split,
};
pub use style::{
    background_style, border_focused_style, border_style, danger_style, rgb_to_color,
    success_style, text_muted_style, text_style, warning_style,
};
