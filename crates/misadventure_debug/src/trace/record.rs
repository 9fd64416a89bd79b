//! Trace event and record types.
//!
//! This module defines the events that can be traced while dispatching input.

use misadventure_foundation::{Arguments, Value};
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

// =============================================================================
// Dispatch Event
// =============================================================================

/// Events that can be traced while dispatching one input line.
///
/// Serializes as a flat object whose `type` field is the
/// [`event_type`](DispatchEvent::event_type) name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum DispatchEvent {
    /// A line arrived and was tokenized.
    LineReceived {
        /// The raw line.
        text: String,
        /// Lowercased words.
        words: Vec<String>,
    },

    /// The commands available in the active context, in probe order.
    Candidates {
        /// Active context at the time.
        context: Option<String>,
        /// Templates of the candidates.
        templates: Vec<String>,
    },

    /// One candidate was tried.
    Attempt {
        /// Template tried.
        template: String,
        /// Captured placeholders, `None` on a miss.
        #[serde(serialize_with = "optional_arguments_as_map")]
        captures: Option<Arguments>,
    },

    /// A user handler is about to run.
    HandlerInvoked {
        /// Template that matched.
        template: String,
        /// Handler name.
        handler: String,
        /// Bound arguments plus captures.
        #[serde(serialize_with = "arguments_as_map")]
        args: Arguments,
    },

    /// A built-in command matched.
    BuiltinInvoked {
        /// Template that matched.
        template: String,
        /// Which built-in (`quit`, `help`).
        builtin: String,
    },

    /// No command matched the line.
    Unmatched {
        /// The raw line.
        text: String,
    },

    /// A handler replaced the active context.
    ContextChanged {
        /// Previous context.
        from: Option<String>,
        /// New context.
        to: Option<String>,
    },
}

impl DispatchEvent {
    /// Returns a short name for the event type.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::LineReceived { .. } => "line-received",
            Self::Candidates { .. } => "candidates",
            Self::Attempt { .. } => "attempt",
            Self::HandlerInvoked { .. } => "handler-invoked",
            Self::BuiltinInvoked { .. } => "builtin-invoked",
            Self::Unmatched { .. } => "unmatched",
            Self::ContextChanged { .. } => "context-changed",
        }
    }

    /// Returns true if this event settles how a line was handled.
    #[must_use]
    pub fn is_resolution(&self) -> bool {
        matches!(
            self,
            Self::HandlerInvoked { .. } | Self::BuiltinInvoked { .. } | Self::Unmatched { .. }
        )
    }
}

/// Writes arguments as a JSON-style object in insertion order, with plain
/// values (`"box"`, `3`, `true`).
fn arguments_as_map<S: Serializer>(args: &Arguments, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(args.len()))?;
    for (name, value) in args.iter() {
        match value {
            Value::Bool(b) => map.serialize_entry(name, b)?,
            Value::Int(n) => map.serialize_entry(name, n)?,
            Value::String(s) => map.serialize_entry(name, s)?,
        }
    }
    map.end()
}

#[allow(clippy::ref_option)]
fn optional_arguments_as_map<S: Serializer>(
    args: &Option<Arguments>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match args {
        Some(args) => arguments_as_map(args, serializer),
        None => serializer.serialize_none(),
    }
}

// =============================================================================
// Trace Record
// =============================================================================

/// A timestamped trace record.
#[derive(Clone, Debug, Serialize)]
pub struct TraceRecord {
    /// Unique record ID within the session.
    pub id: u64,
    /// Sequence number of the input line this event belongs to.
    pub line: u64,
    /// Timestamp in nanoseconds since session start.
    pub timestamp_ns: u64,
    /// The trace event.
    #[serde(flatten)]
    pub event: DispatchEvent,
}

impl TraceRecord {
    /// Creates a new trace record.
    #[must_use]
    pub fn new(id: u64, line: u64, timestamp_ns: u64, event: DispatchEvent) -> Self {
        Self {
            id,
            line,
            timestamp_ns,
            event,
        }
    }

    /// Returns the event type name.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        self.event.event_type()
    }
}

// =============================================================================
// Tests
// =============================================================================
