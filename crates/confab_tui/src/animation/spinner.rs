//! Spinner and typing-indicator frames, indexed by the draw loop's frame count.

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const TYPING_FRAMES: &[&str] = &["·  ", "·· ", "···", " ··", "  ·", "   "];

/// Current spinner glyph for a running tool call.
pub fn spinner_frame(frame_count: u64) -> &'static str {
    SPINNER_FRAMES[(frame_count / 2) as usize % SPINNER_FRAMES.len()]
}

/// Current glyphs for the "assistant is typing" indicator.
pub fn typing_indicator_frame(frame_count: u64) -> &'static str {
    TYPING_FRAMES[(frame_count / 3) as usize % TYPING_FRAMES.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_cycles() {
        let first = spinner_frame(0);
        let later = spinner_frame(2 * SPINNER_FRAMES.len() as u64);
        assert_eq!(first, later);
        assert_ne!(spinner_frame(0), spinner_frame(2));
    }

    #[test]
    fn typing_indicator_in_range() {
        for f in 0..100 {
            assert!(!typing_indicator_frame(f).is_empty());
        }
    }
}
