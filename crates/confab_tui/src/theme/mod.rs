//! Confab theme: semantic color palette for the chat TUI.
//!
//! Colors are named by role (surfaces, borders, text, semantic states, code)
//! rather than by value; everything that draws goes through [ChatPalette].
//!
//! # Example
//!
//! ```ignore
//! use confab_tui::theme::{Appearance, ChatPalette};
//!
//! let palette = ChatPalette::confab_dark();
//! let text = palette.text.tuple(); // (r, g, b) for ratatui
//!
//! let palette = ChatPalette::for_appearance(Appearance::Light);
//! ```

mod appearance;
mod palette;
mod rgb;

pub use appearance::Appearance;
pub use palette::ChatPalette;
pub use rgb::Rgb;
