//! Markdown for assistant messages: inline (**bold**, `code`), blocks
//! (# Header, - list, 1. list, ``` code, ---).
//!
//! No external crate. Used by [crate::messages::assistant] to style message text.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::layouts::{text_muted_style, text_style};
use crate::theme::ChatPalette;
use crate::utils::wrap_lines;

// --- Inline ---

#[derive(Debug, PartialEq)]
enum Inline<'a> {
    Plain(&'a str),
    Bold(&'a str),
    Code(&'a str),
}

/// Split a line at `` ` `` and `**` markers. Unclosed `` ` `` styles the
/// remainder as code; unclosed `**` falls back to plain text.
fn scan_inline(mut rest: &str) -> Vec<Inline<'_>> {
    let mut out = Vec::new();
    while !rest.is_empty() {
        let marker = match (rest.find('`'), rest.find("**")) {
            (Some(t), Some(s)) => t.min(s),
            (Some(t), None) => t,
            (None, Some(s)) => s,
            (None, None) => {
                out.push(Inline::Plain(rest));
                break;
            }
        };
        if marker > 0 {
            out.push(Inline::Plain(&rest[..marker]));
            rest = &rest[marker..];
        }
        if let Some(body) = rest.strip_prefix('`') {
            match body.find('`') {
                Some(end) => {
                    out.push(Inline::Code(&body[..end]));
                    rest = &body[end + 1..];
                }
                None => {
                    out.push(Inline::Code(body));
                    rest = "";
                }
            }
        } else if let Some(end) = rest[2..].find("**") {
            out.push(Inline::Bold(&rest[2..2 + end]));
            rest = &rest[end + 4..];
        } else {
            // Unclosed bold: keep the ** and the rest as plain text
            out.push(Inline::Plain(rest));
            rest = "";
        }
    }
    out
}

/// Parse a single line for inline markdown: **bold** and `code`. Returns styled spans.
pub fn parse_inline_markdown(line: &str, palette: &ChatPalette) -> Vec<Span<'static>> {
    let normal = text_style(palette.text);
    let bold = text_style(palette.text).add_modifier(Modifier::BOLD);
    let code = Style::default()
        .fg(crate::layouts::rgb_to_color(palette.accent))
        .bg(crate::layouts::rgb_to_color(palette.element_background));

    let mut spans: Vec<Span<'static>> = scan_inline(line)
        .into_iter()
        .map(|piece| match piece {
            Inline::Plain(s) => Span::styled(s.to_string(), normal),
            Inline::Bold(s) => Span::styled(s.to_string(), bold),
            Inline::Code(s) => Span::styled(s.to_string(), code),
        })
        .collect();
    if spans.is_empty() {
        spans.push(Span::styled(line.to_string(), normal));
    }
    spans
}

pub fn has_inline_markdown(line: &str) -> bool {
    line.contains('`') || line.contains("**")
}

// --- Block parsing ---

/// Block-level markdown element.
#[derive(Debug, Clone)]
pub enum Block {
    Paragraph(String),
    Header(String),
    ListItem(String),
    NumberedItem(u32, String),
    CodeBlock { lang: Option<String>, code: String },
    HorizontalRule,
}

enum LineKind<'a> {
    Fence(&'a str),
    Rule,
    Header(&'a str),
    Bullet(&'a str),
    Numbered(u32, &'a str),
    Blank,
    Text,
}

fn parse_numbered(trimmed: &str) -> Option<(u32, &str)> {
    let dot = trimmed.find(". ")?;
    let num: u32 = trimmed[..dot].parse().ok()?;
    Some((num, trimmed[dot + 2..].trim()))
}

fn classify(trimmed: &str) -> LineKind<'_> {
    if let Some(tail) = trimmed.strip_prefix("```") {
        return LineKind::Fence(tail.trim());
    }
    if trimmed == "---" || trimmed == "***" || trimmed == "___" {
        return LineKind::Rule;
    }
    if let Some(rest) = trimmed.strip_prefix('#') {
        return LineKind::Header(rest.trim_start_matches('#').trim());
    }
    if trimmed.starts_with("- ") || trimmed.starts_with("* ") {
        return LineKind::Bullet(trimmed[2..].trim());
    }
    if let Some((num, rest)) = parse_numbered(trimmed) {
        return LineKind::Numbered(num, rest);
    }
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    LineKind::Text
}

fn flush_paragraph(buf: &mut Vec<&str>, out: &mut Vec<Block>) {
    if buf.is_empty() {
        return;
    }
    let joined = buf.join("\n").trim().to_string();
    buf.clear();
    if !joined.is_empty() {
        out.push(Block::Paragraph(joined));
    }
}

/// Parse full message text into blocks (code fences, headers, lists, rules, paragraphs).
pub fn parse_blocks(text: &str) -> Vec<Block> {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let kind = classify(lines[i].trim());
        if !matches!(kind, LineKind::Text) {
            flush_paragraph(&mut paragraph, &mut blocks);
        }
        match kind {
            LineKind::Fence(tail) => {
                let lang = (!tail.is_empty()).then(|| tail.to_string());
                let mut body: Vec<&str> = Vec::new();
                i += 1;
                while i < lines.len() && !lines[i].trim().starts_with("```") {
                    body.push(lines[i]);
                    i += 1;
                }
                if i < lines.len() {
                    i += 1; // skip closing ```
                }
                blocks.push(Block::CodeBlock {
                    lang,
                    code: body.join("\n"),
                });
                continue;
            }
            LineKind::Rule => blocks.push(Block::HorizontalRule),
            LineKind::Header(h) => {
                if !h.is_empty() {
                    blocks.push(Block::Header(h.to_string()));
                }
            }
            LineKind::Bullet(item) => blocks.push(Block::ListItem(item.to_string())),
            LineKind::Numbered(num, item) => {
                blocks.push(Block::NumberedItem(num, item.to_string()));
            }
            LineKind::Blank => {}
            LineKind::Text => paragraph.push(lines[i]),
        }
        i += 1;
    }
    flush_paragraph(&mut paragraph, &mut blocks);
    blocks
}

/// True if text contains block-level markdown we parse.
pub fn has_block_markdown(text: &str) -> bool {
    text.contains("```")
        || text.trim_start().starts_with('#')
        || text.lines().any(|l| {
            let t = l.trim();
            t == "---"
                || t.starts_with("- ")
                || t.starts_with("* ")
                || parse_numbered(t).is_some()
        })
}

// --- Code block syntax highlighting ---

fn keywords_for_lang(lang: &str) -> &'static [&'static str] {
    match lang.to_lowercase().as_str() {
        "rust" => &[
            "fn", "let", "mut", "impl", "pub", "use", "mod", "struct", "enum", "if", "else",
            "match", "for", "in", "while", "return", "async", "await", "self", "Self", "true",
            "false",
        ],
        "python" => &[
            "def", "class", "if", "else", "elif", "for", "in", "while", "return", "import",
            "from", "True", "False", "None", "and", "or", "not", "with", "async", "await",
        ],
        "javascript" | "js" | "jsx" => &[
            "function", "const", "let", "var", "return", "if", "else", "for", "while", "async",
            "await", "true", "false", "null", "undefined", "class", "extends", "import", "export",
        ],
        "typescript" | "ts" | "tsx" => &[
            "function", "const", "let", "var", "return", "if", "else", "for", "while", "async",
            "await", "true", "false", "null", "undefined", "class", "extends", "import", "export",
            "interface", "type", "enum",
        ],
        _ => &[],
    }
}

/// Byte length of a quoted string at the start of `rest`, both quotes
/// included when closed, honoring backslash escapes.
fn quoted_len(rest: &str, quote: char) -> usize {
    let mut chars = rest.char_indices().skip(1);
    while let Some((i, c)) = chars.next() {
        if c == '\\' {
            chars.next();
        } else if c == quote {
            return i + quote.len_utf8();
        }
    }
    rest.len()
}

fn ident_len(rest: &str) -> usize {
    rest.find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(rest.len())
}

fn number_len(rest: &str) -> usize {
    rest.find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(rest.len())
}

fn highlight_code_line(line: &str, lang: &str, palette: &ChatPalette) -> Vec<Span<'static>> {
    let keywords = keywords_for_lang(lang);
    let keyword_style = text_style(palette.accent);
    let string_style = text_style(palette.success);
    let comment_style = text_muted_style(palette.text_muted);
    let number_style = text_style(palette.warning);
    let normal = text_style(palette.code_foreground);

    let mut spans = Vec::new();
    let mut rest = line;
    // Tracks whether a '#' would start a comment (line start or after a space)
    let mut boundary = true;
    while let Some(first) = rest.chars().next() {
        if rest.starts_with("//") || (boundary && first == '#') {
            spans.push(Span::styled(rest.to_string(), comment_style));
            break;
        }
        let (len, style) = if first == '"' || first == '\'' {
            (quoted_len(rest, first), string_style)
        } else if first.is_ascii_alphabetic() || first == '_' {
            let len = ident_len(rest);
            let style = if keywords.contains(&&rest[..len]) {
                keyword_style
            } else {
                normal
            };
            (len, style)
        } else if first.is_ascii_digit() {
            (number_len(rest), number_style)
        } else {
            (first.len_utf8(), normal)
        };
        let token = &rest[..len];
        spans.push(Span::styled(token.to_string(), style));
        boundary = token.ends_with(' ');
        rest = &rest[len..];
    }
    if spans.is_empty() {
        spans.push(Span::styled(line.to_string(), normal));
    }
    spans
}

// --- Block rendering to lines ---

const BORDER_H: char = '─';

fn inline_spans(seg: &str, palette: &ChatPalette, normal: Style) -> Vec<Span<'static>> {
    if has_inline_markdown(seg) {
        parse_inline_markdown(seg, palette)
    } else {
        vec![Span::styled(seg.to_string(), normal)]
    }
}

/// List item with a hanging indent: marker on the first wrapped line,
/// marker-width spaces on continuations.
fn push_hanging_item(
    lines: &mut Vec<Line<'static>>,
    body: &str,
    marker: &str,
    wrap_width: usize,
    palette: &ChatPalette,
    normal: Style,
    muted: Style,
    border_span: &Span<'static>,
) {
    let marker_width = marker.chars().count();
    for (n, seg) in wrap_lines(body, wrap_width.saturating_sub(marker_width))
        .iter()
        .enumerate()
    {
        let lead = if n == 0 {
            marker.to_string()
        } else {
            " ".repeat(marker_width)
        };
        let mut spans = vec![border_span.clone(), Span::styled(lead, muted)];
        spans.extend(inline_spans(seg, palette, normal));
        lines.push(Line::from(spans));
    }
}

/// Render blocks to lines, each prefixed with `border_span`. Indent length is
/// used for wrap width. Code blocks get a language header rule and line numbers.
pub fn render_blocks_to_lines(
    blocks: &[Block],
    palette: &ChatPalette,
    width: usize,
    indent_len: usize,
    border_span: &Span<'static>,
) -> Vec<Line<'static>> {
    let wrap_width = width.saturating_sub(indent_len).max(1);
    let mut lines = Vec::new();
    let normal = text_style(palette.text);
    let muted = text_muted_style(palette.text_muted);
    let header_style = text_style(palette.text).add_modifier(Modifier::BOLD);

    for block in blocks {
        match block {
            Block::Paragraph(s) => {
                for seg in &wrap_lines(s, wrap_width) {
                    let mut spans = vec![border_span.clone()];
                    spans.extend(inline_spans(seg, palette, normal));
                    lines.push(Line::from(spans));
                }
            }
            Block::Header(s) => {
                lines.push(Line::from(vec![
                    border_span.clone(),
                    Span::styled(s.clone(), header_style),
                ]));
            }
            Block::ListItem(s) => {
                push_hanging_item(
                    &mut lines, s, "• ", wrap_width, palette, normal, muted, border_span,
                );
            }
            Block::NumberedItem(num, s) => {
                push_hanging_item(
                    &mut lines,
                    s,
                    &format!("{num}. "),
                    wrap_width,
                    palette,
                    normal,
                    muted,
                    border_span,
                );
            }
            Block::CodeBlock { lang, code } => {
                let lang_str = lang.as_deref().unwrap_or("").to_string();
                // Header rule with the language label, like "─ rust ────"
                let label = if lang_str.is_empty() {
                    "─".repeat(wrap_width.min(24))
                } else {
                    let tail_len = wrap_width.saturating_sub(lang_str.len() + 3).min(20);
                    format!(
                        "{BORDER_H} {} {}",
                        lang_str,
                        BORDER_H.to_string().repeat(tail_len)
                    )
                };
                lines.push(Line::from(vec![
                    border_span.clone(),
                    Span::styled(label, muted),
                ]));

                let code_lines: Vec<&str> = code.lines().collect();
                let num_w = code_lines.len().max(1).to_string().len();
                for (i, code_line) in code_lines.iter().enumerate() {
                    let line_num = (i + 1).to_string();
                    let pad = " ".repeat(num_w.saturating_sub(line_num.len()));
                    let mut spans = vec![
                        border_span.clone(),
                        Span::styled(
                            format!("{pad}{line_num} │ "),
                            text_muted_style(palette.code_line_number),
                        ),
                    ];
                    spans.extend(highlight_code_line(code_line, &lang_str, palette));
                    lines.push(Line::from(spans));
                }
            }
            Block::HorizontalRule => {
                let rule: String = (0..wrap_width).map(|_| BORDER_H).collect();
                lines.push(Line::from(vec![
                    border_span.clone(),
                    Span::styled(rule, muted),
                ]));
            }
        }
    }
    lines
}
