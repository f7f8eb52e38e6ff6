//! Text formatting helpers (wrapping, truncation, dates).

use chrono::{DateTime, Utc};

/// Truncate to at most `max_width` characters, appending `suffix` when cut.
/// Counts chars, not display columns; good enough for titles and hints.
pub fn truncate_with_suffix(s: &str, max_width: usize, suffix: &str) -> String {
    let len = s.chars().count();
    if len <= max_width {
        return s.to_string();
    }
    let suffix_len = suffix.chars().count();
    if max_width <= suffix_len {
        return suffix.chars().take(max_width).collect();
    }
    let mut out: String = s.chars().take(max_width - suffix_len).collect();
    out.push_str(suffix);
    out
}

/// Truncate to `max_width` with a trailing ellipsis when needed.
#[inline]
pub fn truncate_ellipsis(s: &str, max_width: usize) -> String {
    truncate_with_suffix(s, max_width, "…")
}

/// Short date for the sidebar (e.g. "Aug 28").
pub fn format_day(ts: DateTime<Utc>) -> String {
    ts.format("%b %-d").to_string()
}

/// Word-wrap to lines of at most `width` characters. Words longer than the
/// width get a line of their own rather than being split mid-word. Empty or
/// whitespace-only input yields no lines.
pub fn wrap_lines(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut out: Vec<String> = Vec::new();
    let mut line = String::new();
    let mut line_chars = 0usize;
    for word in s.split_whitespace() {
        let word_chars = word.chars().count();
        let sep = usize::from(line_chars > 0);
        if line_chars + sep + word_chars <= width {
            if sep == 1 {
                line.push(' ');
            }
            line.push_str(word);
            line_chars += sep + word_chars;
            continue;
        }
        if line_chars > 0 {
            out.push(std::mem::take(&mut line));
            line_chars = 0;
        }
        if word_chars <= width {
            line.push_str(word);
            line_chars = word_chars;
        } else {
            out.push(word.to_string());
        }
    }
    if line_chars > 0 {
        out.push(line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate_ellipsis("hi", 10), "hi");
        assert_eq!(truncate_ellipsis("hello", 5), "hello");
    }

    #[test]
    fn truncate_cuts_with_ellipsis() {
        assert_eq!(truncate_ellipsis("hello world", 8), "hello w…");
        assert_eq!(truncate_ellipsis("ab", 1), "…");
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate_ellipsis("日本語のタイトル", 4), "日本語…");
    }

    #[test]
    fn wrap_breaks_on_word_boundaries() {
        let lines = wrap_lines("one two three four", 8);
        assert_eq!(lines, vec!["one two", "three", "four"]);
    }

    #[test]
    fn wrap_gives_long_words_their_own_line() {
        let lines = wrap_lines("a veryveryverylongword b", 6);
        assert_eq!(lines, vec!["a", "veryveryverylongword", "b"]);
    }

    #[test]
    fn wrap_counts_chars_not_bytes() {
        // 4 CJK chars fit a width of 4 even though they are 12 bytes
        let lines = wrap_lines("你好 世界", 5);
        assert_eq!(lines, vec!["你好 世界"]);
    }

    #[test]
    fn wrap_empty_input() {
        assert!(wrap_lines("", 10).is_empty());
        assert!(wrap_lines("   ", 10).is_empty());
        assert!(wrap_lines("text", 0).is_empty());
    }
}
