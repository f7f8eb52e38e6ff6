//! Confab palette: semantic color roles (surfaces, borders, text, states, code).
//!
//! The dark palette leans on slate surfaces with a violet accent, matching
//! the product's visual language; light is slate-on-white with a blue accent.

use super::Appearance;
use super::rgb::Rgb;

/// One full palette for an appearance (dark or light). All colors are semantic roles.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatPalette {
    // --- Surfaces
    /// App / window background.
    pub background: Rgb,
    /// Sidebar and footer surfaces.
    pub surface_background: Rgb,
    /// Inline code and expanded tool panels.
    pub element_background: Rgb,

    // --- Borders
    pub border: Rgb,
    pub border_focused: Rgb,

    // --- Selection
    pub selection_background: Rgb,

    // --- Text
    pub text: Rgb,
    pub text_muted: Rgb,
    pub text_placeholder: Rgb,

    // --- Semantic
    pub accent: Rgb,
    pub danger: Rgb,
    pub success: Rgb,
    pub warning: Rgb,

    // --- Chrome
    pub status_bar_background: Rgb,
    pub scrollbar_thumb: Rgb,
    pub scrollbar_track: Rgb,

    // --- Code blocks
    pub code_foreground: Rgb,
    pub code_line_number: Rgb,
}

impl ChatPalette {
    /// Default Confab dark palette.
    pub fn confab_dark() -> Self {
        Self {
            background: Rgb(15, 17, 23),
            surface_background: Rgb(22, 25, 34),
            element_background: Rgb(33, 38, 51),
            border: Rgb(39, 44, 60),
            border_focused: Rgb(167, 139, 250),
            selection_background: Rgb(42, 48, 66),
            text: Rgb(226, 232, 240),
            text_muted: Rgb(120, 130, 155),
            text_placeholder: Rgb(100, 110, 135),
            accent: Rgb(167, 139, 250),
            danger: Rgb(248, 113, 113),
            success: Rgb(74, 222, 128),
            warning: Rgb(250, 204, 21),
            status_bar_background: Rgb(22, 25, 34),
            scrollbar_thumb: Rgb(71, 80, 105),
            scrollbar_track: Rgb(24, 27, 37),
            code_foreground: Rgb(203, 213, 225),
            code_line_number: Rgb(90, 100, 125),
        }
    }

    /// Default Confab light palette.
    pub fn confab_light() -> Self {
        Self {
            background: Rgb(255, 255, 255),
            surface_background: Rgb(248, 250, 252),
            element_background: Rgb(241, 245, 249),
            border: Rgb(226, 232, 240),
            border_focused: Rgb(99, 102, 241),
            selection_background: Rgb(241, 245, 249),
            text: Rgb(30, 41, 59),
            text_muted: Rgb(100, 116, 139),
            text_placeholder: Rgb(148, 163, 184),
            accent: Rgb(99, 102, 241),
            danger: Rgb(220, 38, 38),
            success: Rgb(22, 163, 74),
            warning: Rgb(202, 138, 4),
            status_bar_background: Rgb(248, 250, 252),
            scrollbar_thumb: Rgb(186, 196, 210),
            scrollbar_track: Rgb(248, 250, 252),
            code_foreground: Rgb(51, 65, 85),
            code_line_number: Rgb(148, 163, 184),
        }
    }

    /// Palette for the given appearance.
    pub fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Dark => Self::confab_dark(),
            Appearance::Light => Self::confab_light(),
        }
    }
}
