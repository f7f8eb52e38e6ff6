//! Tool call status resolution and detail formatting.
//!
//! A [ToolCall] is an opaque record from the backend describing an agent's
//! invocation of an external capability. [resolve] projects it into a
//! [DisplayStatus] the UI can render directly; the formatting helpers build
//! the expanded Parameters/Result panels. Everything here is pure: no I/O,
//! no mutation of the input, and no failure surfaces to the caller —
//! malformed payloads degrade to raw text, unknown statuses to a neutral
//! pending look.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A tool/function call as delivered inside a message. All fields may be
/// absent; `arguments_payload` is expected to be JSON but is not trusted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments_payload: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Value>,
}

/// Shape of a tool call's `results`, resolved once so the rest of the logic
/// never probes the dynamic type again.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolResults {
    Absent,
    RawText(String),
    Structured(Value),
}

impl ToolResults {
    pub fn classify(results: Option<&Value>) -> Self {
        match results {
            None => ToolResults::Absent,
            Some(Value::String(s)) => ToolResults::RawText(s.clone()),
            Some(v) => ToolResults::Structured(v.clone()),
        }
    }

    /// Structured view of the results. Raw text that happens to be valid
    /// JSON is inspected in parsed form (for the `success` flag); text that
    /// fails to parse stays raw.
    fn structured(&self) -> Option<Value> {
        match self {
            ToolResults::Absent => None,
            ToolResults::Structured(v) => Some(v.clone()),
            ToolResults::RawText(s) => serde_json::from_str(s).ok(),
        }
    }

    /// Failure heuristic: string results matching "error"/"failed" anywhere
    /// (case-insensitive), or a structured `success: false` flag.
    ///
    /// The substring test is a documented source of false positives (a
    /// successful result quoting the word "error" reads as failure); it is
    /// preserved as-is rather than second-guessed.
    pub fn is_error(&self) -> bool {
        let success_false = self
            .structured()
            .and_then(|v| v.get("success").and_then(Value::as_bool))
            == Some(false);
        match self {
            ToolResults::Absent => false,
            ToolResults::RawText(s) => contains_failure_pattern(s) || success_false,
            ToolResults::Structured(_) => success_false,
        }
    }
}

fn contains_failure_pattern(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains("error") || lower.contains("failed")
}

/// Icon the UI should draw for a tool call's lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIcon {
    Clock,
    Spinner,
    Check,
    Alert,
}

/// Semantic color for the icon: neutral while pending/running, green on
/// success, red on failure. The theme maps tones to concrete colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Muted,
    Success,
    Danger,
}

/// Presentation-ready projection of a tool call's state. Derived fresh on
/// every render; never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayStatus {
    pub icon: StatusIcon,
    pub tone: StatusTone,
    pub label: &'static str,
    pub spinning: bool,
    pub is_error: bool,
}

impl DisplayStatus {
    fn pending(is_error: bool) -> Self {
        Self {
            icon: StatusIcon::Clock,
            tone: StatusTone::Muted,
            label: "Pending",
            spinning: false,
            is_error,
        }
    }

    fn running(is_error: bool) -> Self {
        Self {
            icon: StatusIcon::Spinner,
            tone: StatusTone::Muted,
            label: "Running...",
            spinning: true,
            is_error,
        }
    }

    fn success() -> Self {
        Self {
            icon: StatusIcon::Check,
            tone: StatusTone::Success,
            label: "Success",
            spinning: false,
            is_error: false,
        }
    }

    fn failed() -> Self {
        Self {
            icon: StatusIcon::Alert,
            tone: StatusTone::Danger,
            label: "Failed",
            spinning: false,
            is_error: true,
        }
    }

    fn unknown(is_error: bool) -> Self {
        Self {
            icon: StatusIcon::Clock,
            tone: StatusTone::Muted,
            label: "",
            spinning: false,
            is_error,
        }
    }
}

/// Derive the display status for a tool call. An absent call resolves to the
/// default pending look of an unnamed call.
pub fn resolve(tool_call: Option<&ToolCall>) -> DisplayStatus {
    let status = tool_call
        .and_then(|t| t.status.as_deref())
        .unwrap_or("pending");
    let results = ToolResults::classify(tool_call.and_then(|t| t.results.as_ref()));
    let is_error = results.is_error();

    match status {
        "pending" => DisplayStatus::pending(is_error),
        "running" | "in_progress" => DisplayStatus::running(is_error),
        "completed" => {
            if is_error {
                DisplayStatus::failed()
            } else {
                DisplayStatus::success()
            }
        }
        "success" => DisplayStatus::success(),
        "failed" | "error" => DisplayStatus::failed(),
        _ => DisplayStatus::unknown(is_error),
    }
}

/// Display form of a tool name: dot-separated segments reversed, joined with
/// spaces, lowercased ("tool.search" reads as "search tool"). Display-only;
/// the underlying name is never changed.
pub fn display_name(name: Option<&str>) -> String {
    match name {
        Some(n) if !n.is_empty() => n
            .split('.')
            .rev()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase(),
        _ => "Function".to_string(),
    }
}

impl ToolCall {
    pub fn display(&self) -> DisplayStatus {
        resolve(Some(self))
    }

    pub fn display_name(&self) -> String {
        display_name(self.name.as_deref())
    }

    /// A call can be expanded when it is not spinning and carries something
    /// to show: a non-empty arguments payload or any results.
    pub fn is_expandable(&self) -> bool {
        !self.display().spinning
            && (self.arguments_payload.as_deref().is_some_and(|s| !s.is_empty())
                || self.results.is_some())
    }

    /// Parameters panel text: the arguments payload pretty-printed as JSON
    /// (2-space indent), or the raw string when it does not parse. None when
    /// there is no payload to show.
    pub fn format_arguments(&self) -> Option<String> {
        let raw = self.arguments_payload.as_deref().filter(|s| !s.is_empty())?;
        let formatted = serde_json::from_str::<Value>(raw)
            .ok()
            .and_then(|v| serde_json::to_string_pretty(&v).ok())
            .unwrap_or_else(|| raw.to_string());
        Some(formatted)
    }

    /// Result panel text: structured results pretty-printed as JSON (2-space
    /// indent), string results verbatim. None when absent.
    pub fn format_results(&self) -> Option<String> {
        match ToolResults::classify(self.results.as_ref()) {
            ToolResults::Absent => None,
            ToolResults::RawText(s) => Some(s),
            ToolResults::Structured(v) => {
                Some(serde_json::to_string_pretty(&v).unwrap_or_else(|_| v.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn call(status: Option<&str>, results: Option<Value>) -> ToolCall {
        ToolCall {
            name: Some("tool.search".into()),
            status: status.map(str::to_string),
            arguments_payload: None,
            results,
        }
    }

    #[test]
    fn absent_call_resolves_to_default_pending() {
        let display = resolve(None);
        assert_eq!(display.icon, StatusIcon::Clock);
        assert_eq!(display.label, "Pending");
        assert!(!display.spinning);
        assert!(!display.is_error);
        assert_eq!(display_name(None), "Function");
    }

    #[test]
    fn missing_status_is_pending() {
        let display = call(None, None).display();
        assert_eq!(display.label, "Pending");
        assert_eq!(display.tone, StatusTone::Muted);
    }

    #[test]
    fn running_spins_regardless_of_results() {
        for status in ["running", "in_progress"] {
            let display = call(status.into(), Some(json!("Error: partial"))).display();
            assert!(display.spinning, "{status} should spin");
            assert_eq!(display.label, "Running...");
        }
    }

    #[test]
    fn completed_with_success_false_fails() {
        let display = call(Some("completed"), Some(json!({ "success": false }))).display();
        assert_eq!(display.icon, StatusIcon::Alert);
        assert_eq!(display.label, "Failed");
        assert_eq!(display.tone, StatusTone::Danger);
    }

    #[test]
    fn completed_without_results_succeeds() {
        let display = call(Some("completed"), None).display();
        assert_eq!(display.icon, StatusIcon::Check);
        assert_eq!(display.label, "Success");
        assert_eq!(display.tone, StatusTone::Success);
    }

    #[test]
    fn completed_with_success_true_succeeds() {
        let display = call(Some("completed"), Some(json!({ "success": true }))).display();
        assert_eq!(display.label, "Success");
        let display = call(Some("completed"), Some(json!({ "count": 3 }))).display();
        assert_eq!(display.label, "Success");
    }

    #[test]
    fn completed_with_error_text_fails() {
        let display =
            call(Some("completed"), Some(json!("Error: failed to connect"))).display();
        assert!(display.is_error);
        assert_eq!(display.label, "Failed");
    }

    #[test]
    fn failure_pattern_is_case_insensitive() {
        for text in ["FAILED to fetch", "Internal ERROR", "request failed"] {
            let display = call(Some("completed"), Some(json!(text))).display();
            assert_eq!(display.label, "Failed", "{text}");
        }
    }

    #[test]
    fn explicit_terminal_statuses() {
        assert_eq!(call(Some("success"), None).display().label, "Success");
        assert_eq!(call(Some("failed"), None).display().label, "Failed");
        assert_eq!(call(Some("error"), None).display().label, "Failed");
    }

    #[test]
    fn unknown_status_has_empty_label() {
        let display = call(Some("queued"), None).display();
        assert_eq!(display.icon, StatusIcon::Clock);
        assert_eq!(display.label, "");
        assert!(!display.spinning);
    }

    #[test]
    fn raw_text_that_parses_to_success_false_is_error() {
        let display = call(Some("completed"), Some(json!(r#"{"success":false}"#))).display();
        assert_eq!(display.label, "Failed");
    }

    #[test]
    fn display_name_reverses_segments() {
        assert_eq!(display_name(Some("a.b.c")), "c b a");
        assert_eq!(display_name(Some("tool.search")), "search tool");
        assert_eq!(display_name(Some("Deploy")), "deploy");
        assert_eq!(display_name(Some("")), "Function");
    }

    #[test]
    fn display_name_does_not_mutate() {
        let tc = ToolCall {
            name: Some("tool.search".into()),
            ..Default::default()
        };
        let _ = tc.display_name();
        assert_eq!(tc.name.as_deref(), Some("tool.search"));
    }

    #[test]
    fn expandable_requires_content_and_no_spin() {
        let mut tc = call(Some("running"), Some(json!("out")));
        assert!(!tc.is_expandable());
        tc.status = Some("completed".into());
        assert!(tc.is_expandable());

        let bare = call(Some("completed"), None);
        assert!(!bare.is_expandable());

        let mut with_args = call(Some("pending"), None);
        with_args.arguments_payload = Some(r#"{"x":1}"#.into());
        assert!(with_args.is_expandable());
        with_args.arguments_payload = Some(String::new());
        assert!(!with_args.is_expandable());
    }

    #[test]
    fn format_arguments_pretty_prints_json() {
        let mut tc = ToolCall::default();
        tc.arguments_payload = Some(r#"{"x":1}"#.into());
        assert_eq!(tc.format_arguments().unwrap(), "{\n  \"x\": 1\n}");
    }

    #[test]
    fn format_arguments_keeps_malformed_payload_verbatim() {
        let mut tc = ToolCall::default();
        tc.arguments_payload = Some("not json".into());
        assert_eq!(tc.format_arguments().unwrap(), "not json");
        tc.arguments_payload = None;
        assert!(tc.format_arguments().is_none());
    }

    #[test]
    fn format_results_structured_and_raw() {
        let tc = call(Some("completed"), Some(json!({ "ok": true })));
        assert_eq!(tc.format_results().unwrap(), "{\n  \"ok\": true\n}");

        let tc = call(Some("completed"), Some(json!("plain output")));
        assert_eq!(tc.format_results().unwrap(), "plain output");

        assert!(call(Some("completed"), None).format_results().is_none());
    }

    #[test]
    fn classify_tags_each_shape() {
        assert_eq!(ToolResults::classify(None), ToolResults::Absent);
        assert_eq!(
            ToolResults::classify(Some(&json!("text"))),
            ToolResults::RawText("text".into())
        );
        assert!(matches!(
            ToolResults::classify(Some(&json!({ "a": 1 }))),
            ToolResults::Structured(_)
        ));
    }

    #[test]
    fn resolve_is_pure() {
        let tc = call(Some("completed"), Some(json!({ "success": false })));
        let a = resolve(Some(&tc));
        let b = resolve(Some(&tc));
        assert_eq!(a, b);
    }

    #[test]
    fn tool_call_deserializes_from_backend_json() {
        let tc: ToolCall = serde_json::from_str(
            r#"{"name":"files.read","status":"completed","arguments_payload":"{\"path\":\"a.txt\"}","results":{"success":true}}"#,
        )
        .unwrap();
        assert_eq!(tc.display_name(), "read files");
        assert_eq!(tc.display().label, "Success");
    }
}
