//! TUI spacing and sizing constants.

/// Horizontal padding in characters (each side).
pub const HORIZONTAL_PADDING: u16 = 2;

/// Left indent for continuation lines and indented content (two spaces).
pub const LEFT_PADDING: &str = "  ";

/// Width of the conversation sidebar including its border.
pub const SIDEBAR_WIDTH: u16 = 32;

/// Blank lines between message blocks.
pub const MESSAGE_SPACING_LINES: usize = 1;

/// Max lines of an expanded tool result panel before truncation.
pub const TOOL_RESULT_MAX_LINES: usize = 12;

/// Debug log lines to keep (older lines dropped).
pub const MAX_LOG_LINES: usize = 2000;
