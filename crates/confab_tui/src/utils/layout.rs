//! Rect helpers built on ratatui margins.

use ratatui::layout::{Margin, Rect};

use crate::utils::constants::HORIZONTAL_PADDING;

/// Default horizontal padding (symmetric left/right).
#[inline]
pub fn horizontal_padding(area: Rect) -> Rect {
    horizontal_padding_with(area, HORIZONTAL_PADDING)
}

/// Horizontal padding with a custom amount.
#[inline]
pub fn horizontal_padding_with(area: Rect, pad: u16) -> Rect {
    area.inner(Margin::new(pad, 0))
}

/// Padding on all four sides.
#[inline]
pub fn padding(area: Rect, horizontal: u16, vertical: u16) -> Rect {
    area.inner(Margin::new(horizontal, vertical))
}

/// Clamp a scroll offset so content never scrolls past its end.
pub fn clamp_scroll(offset: usize, content_height: usize, viewport_height: usize) -> usize {
    offset.min(content_height.saturating_sub(viewport_height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_padding_shrinks_width_only() {
        let inner = horizontal_padding(Rect::new(0, 0, 80, 20));
        assert_eq!(inner, Rect::new(2, 0, 76, 20));
    }

    #[test]
    fn padding_saturates_on_tiny_rects() {
        let inner = padding(Rect::new(0, 0, 1, 1), 2, 2);
        assert_eq!(inner.width, 0);
        assert_eq!(inner.height, 0);
    }

    #[test]
    fn clamp_scroll_when_content_fits() {
        assert_eq!(clamp_scroll(5, 10, 20), 0);
    }

    #[test]
    fn clamp_scroll_caps_at_max_offset() {
        assert_eq!(clamp_scroll(100, 50, 20), 30);
    }
}
