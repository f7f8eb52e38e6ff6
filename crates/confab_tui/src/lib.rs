//! Terminal chat frontend for confab.
//!
//! Layout: header (conversation title + status), conversation sidebar,
//! scrollable chat body, composer with shortcut hints. Messages render
//! markdown (code fences with line numbers, headers, lists); tool calls show
//! a status line that expands into parameter and result panels.
//!
//! The TUI owns no business logic. It applies [UiEvent]s from a backend
//! controller to [TuiState] and emits [UiCommand]s on user actions; see
//! [run_tui] for the loop.

pub mod animation;
pub mod events;
pub mod layouts;
pub mod messages;
pub mod run;
pub mod state;
pub mod theme;
pub mod utils;
pub mod view;

pub use events::{UiCommand, UiEvent, apply_ui_event};
pub use run::run_tui;
pub use state::{ChatItem, Focus, Screen, TuiState};
pub use theme::Appearance;
