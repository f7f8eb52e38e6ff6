//! Tool call rendering: one status line, plus expanded detail panels.
//!
//! The status line is derived fresh from the call on every build via
//! [confab_core::resolve]; nothing about presentation is stored. Expanded
//! calls show their formatted arguments under "Parameters" and formatted
//! results under "Result", behind a muted left border.

use ratatui::text::{Line, Span};

use confab_core::{StatusIcon, StatusTone, ToolCall};

use crate::animation::spinner_frame;
use crate::layouts::{danger_style, success_style, text_muted_style, text_style};
use crate::theme::ChatPalette;
use crate::utils::{LEFT_PADDING, TOOL_RESULT_MAX_LINES};

/// One tool call in the chat list, with UI-only expansion state.
#[derive(Debug, Clone)]
pub struct ToolCallItem {
    pub call: ToolCall,
    pub expanded: bool,
}

impl ToolCallItem {
    pub fn new(call: ToolCall) -> Self {
        Self {
            call,
            expanded: false,
        }
    }

    /// Toggle expansion; no-op while the call is not expandable.
    pub fn toggle(&mut self) {
        if self.call.is_expandable() {
            self.expanded = !self.expanded;
        } else {
            self.expanded = false;
        }
    }
}

const DETAIL_BORDER: &str = "│ ";

fn tone_style(tone: StatusTone, palette: &ChatPalette) -> ratatui::style::Style {
    match tone {
        StatusTone::Muted => text_muted_style(palette.text_muted),
        StatusTone::Success => success_style(palette.success),
        StatusTone::Danger => danger_style(palette.danger),
    }
}

fn icon_glyph(icon: StatusIcon, frame_count: u64) -> String {
    match icon {
        StatusIcon::Clock => "◷".to_string(),
        StatusIcon::Spinner => spinner_frame(frame_count).to_string(),
        StatusIcon::Check => "✓".to_string(),
        StatusIcon::Alert => "⚠".to_string(),
    }
}

/// Build lines for a tool call: status line, then detail panels when expanded.
pub fn tool_call_lines(
    item: &ToolCallItem,
    palette: &ChatPalette,
    frame_count: u64,
) -> Vec<Line<'static>> {
    let display = item.call.display();
    let status_style = tone_style(display.tone, palette);

    let mut head = vec![
        Span::raw(LEFT_PADDING),
        Span::styled(
            format!("{} ", icon_glyph(display.icon, frame_count)),
            status_style,
        ),
        Span::styled(item.call.display_name(), text_style(palette.text)),
    ];
    if !display.label.is_empty() {
        head.push(Span::styled(
            format!(" • {}", display.label),
            status_style,
        ));
    }
    if item.call.is_expandable() {
        let chevron = if item.expanded { " ▾" } else { " ▸" };
        head.push(Span::styled(
            chevron.to_string(),
            text_muted_style(palette.text_muted),
        ));
    }
    let mut lines = vec![Line::from(head)];

    if !item.expanded {
        return lines;
    }

    let border = Span::styled(
        format!("{LEFT_PADDING}{DETAIL_BORDER}"),
        text_muted_style(palette.text_muted),
    );
    let detail_style = text_style(palette.code_foreground);
    let heading = text_muted_style(palette.text_muted);

    if let Some(arguments) = item.call.format_arguments() {
        lines.push(Line::from(vec![
            border.clone(),
            Span::styled("Parameters".to_string(), heading),
        ]));
        for l in arguments.lines() {
            lines.push(Line::from(vec![
                border.clone(),
                Span::styled(l.to_string(), detail_style),
            ]));
        }
    }

    if let Some(results) = item.call.format_results() {
        lines.push(Line::from(vec![
            border.clone(),
            Span::styled("Result".to_string(), heading),
        ]));
        let result_lines: Vec<&str> = results.lines().collect();
        for l in result_lines.iter().take(TOOL_RESULT_MAX_LINES) {
            lines.push(Line::from(vec![
                border.clone(),
                Span::styled((*l).to_string(), detail_style),
            ]));
        }
        if result_lines.len() > TOOL_RESULT_MAX_LINES {
            lines.push(Line::from(vec![
                border,
                Span::styled(
                    format!("… ({} more lines)", result_lines.len() - TOOL_RESULT_MAX_LINES),
                    heading,
                ),
            ]));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn completed_call() -> ToolCall {
        ToolCall {
            name: Some("tool.search".into()),
            status: Some("completed".into()),
            arguments_payload: Some(r#"{"query":"cats"}"#.into()),
            results: Some(json!({ "success": true, "hits": 3 })),
        }
    }

    #[test]
    fn collapsed_line_shows_name_and_label() {
        let palette = ChatPalette::confab_dark();
        let item = ToolCallItem::new(completed_call());
        let lines = tool_call_lines(&item, &palette, 0);
        assert_eq!(lines.len(), 1);
        let text: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("search tool"));
        assert!(text.contains("Success"));
        assert!(text.contains("▸"));
    }

    #[test]
    fn running_call_has_no_chevron() {
        let palette = ChatPalette::confab_dark();
        let mut call = completed_call();
        call.status = Some("running".into());
        let lines = tool_call_lines(&ToolCallItem::new(call), &palette, 0);
        let text: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("Running..."));
        assert!(!text.contains("▸"));
    }

    #[test]
    fn expanded_shows_parameters_and_result() {
        let palette = ChatPalette::confab_dark();
        let mut item = ToolCallItem::new(completed_call());
        item.toggle();
        assert!(item.expanded);
        let lines = tool_call_lines(&item, &palette, 0);
        let all: Vec<String> = lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        assert!(all.iter().any(|l| l.contains("Parameters")));
        assert!(all.iter().any(|l| l.contains("\"query\": \"cats\"")));
        assert!(all.iter().any(|l| l.contains("Result")));
        assert!(all.iter().any(|l| l.contains("\"hits\": 3")));
    }

    #[test]
    fn toggle_is_noop_while_running() {
        let mut call = completed_call();
        call.status = Some("running".into());
        let mut item = ToolCallItem::new(call);
        item.toggle();
        assert!(!item.expanded);
    }

    #[test]
    fn long_result_is_capped() {
        let palette = ChatPalette::confab_dark();
        let long: String = (0..40).map(|i| format!("line {i}\n")).collect();
        let call = ToolCall {
            name: Some("files.read".into()),
            status: Some("completed".into()),
            arguments_payload: None,
            results: Some(json!(long)),
        };
        let mut item = ToolCallItem::new(call);
        item.toggle();
        let lines = tool_call_lines(&item, &palette, 0);
        // status + Result heading + capped lines + overflow note
        assert_eq!(lines.len(), 1 + 1 + TOOL_RESULT_MAX_LINES + 1);
        let last: String = lines
            .last()
            .unwrap()
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert!(last.contains("more lines"));
    }

    #[test]
    fn failed_call_shows_alert() {
        let palette = ChatPalette::confab_dark();
        let call = ToolCall {
            name: None,
            status: Some("failed".into()),
            arguments_payload: None,
            results: None,
        };
        let lines = tool_call_lines(&ToolCallItem::new(call), &palette, 0);
        let text: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("⚠"));
        assert!(text.contains("Function"));
        assert!(text.contains("Failed"));
    }
}
