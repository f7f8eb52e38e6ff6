//! Chat column layout.

use ratatui::layout::Rect;

use crate::utils::horizontal_padding;

/// Chat column: outer area plus the padded content rect message lines draw
/// into.
#[derive(Debug, Clone)]
pub struct ChatsLayout {
    pub area: Rect,
    pub inner: Rect,
}

impl ChatsLayout {
    pub fn new(area: Rect) -> Self {
        Self {
            area,
            inner: horizontal_padding(area),
        }
    }

    /// Content rows available for message lines.
    pub fn viewport_height(&self) -> usize {
        self.inner.height as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inner_is_padded_horizontally() {
        let layout = ChatsLayout::new(Rect::new(0, 0, 80, 20));
        assert!(layout.inner.width < layout.area.width);
        assert_eq!(layout.viewport_height(), 20);
    }

    #[test]
    fn degenerate_area() {
        let layout = ChatsLayout::new(Rect::new(0, 0, 0, 0));
        assert_eq!(layout.inner.width, 0);
        assert_eq!(layout.viewport_height(), 0);
    }
}
