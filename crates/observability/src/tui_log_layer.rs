//! Tracing layer that forwards each event as one formatted line to a sink
//! (feeds the TUI debug traces screen).

use std::fmt::Write;

use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context, Layer};

use crate::config::LogSink;

// Cap so a pathological event cannot flood the sink.
const MAX_LINE_LEN: usize = 32_000;

/// Collects an event's fields, message first, then "key=value" pairs.
#[derive(Default)]
struct FieldLine {
    message: String,
    fields: String,
}

impl FieldLine {
    fn push_field(&mut self, name: &str, value: &dyn std::fmt::Debug) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        write!(self.fields, "{name}={value:?}").ok();
    }

    fn into_body(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (false, false) => format!("{} {}", self.message, self.fields),
            (false, true) => self.message,
            (true, _) => self.fields,
        }
    }
}

impl Visit for FieldLine {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            self.push_field(field.name(), &value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            write!(self.message, "{value:?}").ok();
        } else {
            self.push_field(field.name(), value);
        }
    }
}

/// Layer that sends each formatted event to the sink when one is set.
/// The sink must not block.
pub(crate) fn tui_log_layer(sink: Option<LogSink>) -> TuiLogLayer {
    TuiLogLayer { sink }
}

#[derive(Clone)]
pub(crate) struct TuiLogLayer {
    sink: Option<LogSink>,
}

fn render(level: tracing::Level, target: &str, body: &str) -> String {
    let mut line = format!("[{level}] {target}");
    if !body.is_empty() {
        line.push_str(": ");
        line.push_str(body);
    }
    if line.len() > MAX_LINE_LEN {
        let keep: String = line.chars().take(MAX_LINE_LEN).collect();
        return format!("{keep}… ({} chars)", line.len());
    }
    line
}

impl<S> Layer<S> for TuiLogLayer
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        if let Some(sink) = &self.sink {
            let mut fields = FieldLine::default();
            event.record(&mut fields);
            let meta = event.metadata();
            sink(render(*meta.level(), meta.target(), &fields.into_body()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_without_fields_omits_colon() {
        let line = render(tracing::Level::INFO, "confab::controller", "");
        assert_eq!(line, "[INFO] confab::controller");
    }

    #[test]
    fn line_with_fields() {
        let line = render(tracing::Level::WARN, "confab", "upload failed path=\"a\"");
        assert_eq!(line, "[WARN] confab: upload failed path=\"a\"");
    }

    #[test]
    fn oversize_line_is_truncated() {
        let body = "x".repeat(MAX_LINE_LEN * 2);
        let line = render(tracing::Level::DEBUG, "t", &body);
        assert!(line.len() < MAX_LINE_LEN + 64);
        assert!(line.contains("chars)"));
    }

    #[test]
    fn body_orders_message_before_fields() {
        let collected = FieldLine {
            message: "upload failed".to_string(),
            fields: "path=\"a\"".to_string(),
        };
        assert_eq!(collected.into_body(), "upload failed path=\"a\"");
    }
}
