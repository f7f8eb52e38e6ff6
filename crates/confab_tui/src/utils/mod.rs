//! Shared utilities for the confab TUI.
//!
//! - **[constants]** — Spacing, padding, and sizing constants.
//! - **[layout]** — Rect padding and scroll clamping.
//! - **[format]** — Wrapping, truncation and timestamp formatting.

mod constants;
mod format;
mod layout;

pub use constants::*;
pub use format::{format_day, truncate_ellipsis, truncate_with_suffix, wrap_lines};
pub use layout::{clamp_scroll, horizontal_padding, horizontal_padding_with, padding};
