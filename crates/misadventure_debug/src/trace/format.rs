//! Trace output formatters.
//!
//! Provides human-readable and JSON formatters for trace records.

use std::fmt::Write;

use super::record::{DispatchEvent, TraceRecord};

// =============================================================================
// Trace Formatter Trait
// =============================================================================

/// Trait for formatting trace records.
pub trait TraceFormatter {
    /// Formats a single trace record to a string.
    fn format(&self, record: &TraceRecord) -> String;

    /// Formats multiple records.
    fn format_many(&self, records: &[&TraceRecord]) -> String {
        records
            .iter()
            .map(|r| self.format(r))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// =============================================================================
// Human-Readable Formatter
// =============================================================================

/// Formats trace records in human-readable form.
#[derive(Clone, Debug, Default)]
pub struct HumanFormatter {
    /// Whether to include timestamps.
    pub show_timestamps: bool,
    /// Whether to include record IDs.
    pub show_ids: bool,
}

impl HumanFormatter {
    /// Creates a new human formatter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to show timestamps.
    #[must_use]
    pub fn with_timestamps(mut self) -> Self {
        self.show_timestamps = true;
        self
    }

    /// Builder method to show record IDs.
    #[must_use]
    pub fn with_ids(mut self) -> Self {
        self.show_ids = true;
        self
    }

    /// Formats timestamp in microseconds.
    #[allow(clippy::cast_precision_loss)]
    fn format_timestamp(ns: u64) -> String {
        let us = ns / 1000;
        if us >= 1_000_000 {
            format!("{:.3}s", us as f64 / 1_000_000.0)
        } else if us >= 1000 {
            format!("{:.3}ms", us as f64 / 1000.0)
        } else {
            format!("{us}us")
        }
    }

    fn context_name(context: Option<&String>) -> &str {
        context.map_or("(global)", String::as_str)
    }
}

impl TraceFormatter for HumanFormatter {
    fn format(&self, record: &TraceRecord) -> String {
        let mut prefix = String::new();

        if self.show_ids {
            let _ = write!(prefix, "[{:06}] ", record.id);
        }

        let _ = write!(prefix, "L{:04} ", record.line);

        if self.show_timestamps {
            let _ = write!(
                prefix,
                "{:>10} ",
                Self::format_timestamp(record.timestamp_ns)
            );
        }

        let event_str = match &record.event {
            DispatchEvent::LineReceived { text, words } => {
                format!(">>> {text:?} [{}]", words.join(" "))
            }
            DispatchEvent::Candidates { context, templates } => {
                format!(
                    "  CANDIDATES in {}: {}",
                    Self::context_name(context.as_ref()),
                    templates.join(" | ")
                )
            }
            DispatchEvent::Attempt { template, captures } => match captures {
                Some(args) => format!("  TRY {template:?} -> {args}"),
                None => format!("  TRY {template:?} -> miss"),
            },
            DispatchEvent::HandlerInvoked {
                template,
                handler,
                args,
            } => {
                format!("  INVOKE {handler} ({template:?}) {args}")
            }
            DispatchEvent::BuiltinInvoked { template, builtin } => {
                format!("  BUILTIN {builtin} ({template:?})")
            }
            DispatchEvent::Unmatched { text } => {
                format!("  UNMATCHED {text:?}")
            }
            DispatchEvent::ContextChanged { from, to } => {
                format!(
                    "  CONTEXT {} -> {}",
                    Self::context_name(from.as_ref()),
                    Self::context_name(to.as_ref())
                )
            }
        };

        format!("{prefix}{event_str}")
    }
}

// =============================================================================
// JSON Formatter
// =============================================================================

/// Formats trace records as JSON.
///
/// Each record is one object: `id`, `line`, `timestamp_ns`, the event
/// `type`, then the event's own fields.
#[derive(Clone, Debug, Default)]
pub struct JsonFormatter {
    /// Whether to indent lists of records.
    pub pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method for pretty printing.
    #[must_use]
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    fn render(result: serde_json::Result<String>) -> String {
        result.unwrap_or_else(|err| serde_json::json!({ "error": err.to_string() }).to_string())
    }
}

impl TraceFormatter for JsonFormatter {
    fn format(&self, record: &TraceRecord) -> String {
        Self::render(serde_json::to_string(record))
    }

    fn format_many(&self, records: &[&TraceRecord]) -> String {
        if self.pretty {
            Self::render(serde_json::to_string_pretty(records))
        } else {
            Self::render(serde_json::to_string(records))
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
