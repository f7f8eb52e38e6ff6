//! Message rendering for the TUI. Uses crate::theme for colors.
//!
//! - **user** — User message lines (with attachment names).
//! - **assistant** — Assistant message lines (markdown-aware).
//! - **tool** — Tool call status line and expanded detail panels.
//! - **error** — Inline error lines.
//! - **markdown** — Inline and block markdown parsing and rendering.

pub mod assistant;
pub mod error;
pub mod markdown;
pub mod tool;
pub mod user;
