//! Tracing of command dispatch.
//!
//! A [`Tracer`] is a [`DispatchObserver`]: hand it to
//! [`Dispatcher::dispatch_observed`](misadventure_parser::Dispatcher::dispatch_observed)
//! and every stage of the dispatch is recorded, with no work done when
//! tracing is off. Supports both human-readable and JSON output formats.
//!
//! # Example
//!
//! ```text
//! L0003 >>> "put key in box" [put key in box]
//! L0003   CANDIDATES in hall: help | quit | put ITEM in CONTAINER
//! L0003   TRY "help" -> miss
//! L0003   TRY "quit" -> miss
//! L0003   TRY "put ITEM in CONTAINER" -> {item="key", container="box"}
//! L0003   INVOKE put ("put ITEM in CONTAINER") {item="key", container="box"}
//! ```

pub mod buffer;
pub mod format;
pub mod record;

pub use buffer::{TraceBuffer, TraceBufferStats};
pub use format::{HumanFormatter, JsonFormatter, TraceFormatter};
pub use record::{DispatchEvent, TraceRecord};

use std::io::{self, Write};
use std::time::Instant;

use misadventure_foundation::{Arguments, Context};
use misadventure_parser::{Builtin, DispatchObserver};

// =============================================================================
// Trace Output
// =============================================================================

/// Where trace output should be sent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TraceOutput {
    /// No output (traces still recorded in buffer).
    #[default]
    None,
    /// Write to stderr.
    Stderr,
}

// =============================================================================
// Tracer Configuration
// =============================================================================

/// Configuration for the tracer.
#[derive(Clone, Debug)]
pub struct TracerConfig {
    /// Whether tracing is enabled.
    pub enabled: bool,
    /// Maximum records to keep in buffer.
    pub buffer_size: usize,
    /// Where to output traces.
    pub output: TraceOutput,
    /// Whether to use JSON format.
    pub json_format: bool,
    /// Whether human output includes record IDs and timestamps.
    pub verbose: bool,
    /// Filter for specific event types (empty = all).
    pub event_filter: Vec<String>,
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            buffer_size: 10000,
            output: TraceOutput::None,
            json_format: false,
            verbose: false,
            event_filter: Vec::new(),
        }
    }
}

impl TracerConfig {
    /// Creates a new tracer configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to enable tracing.
    #[must_use]
    pub fn enabled(mut self) -> Self {
        self.enabled = true;
        self
    }

    /// Builder method to set buffer size.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Builder method to output to stderr.
    #[must_use]
    pub fn to_stderr(mut self) -> Self {
        self.output = TraceOutput::Stderr;
        self
    }

    /// Builder method to use JSON format.
    #[must_use]
    pub fn json(mut self) -> Self {
        self.json_format = true;
        self
    }

    /// Builder method to show record IDs and timestamps.
    #[must_use]
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Builder method to filter event types.
    #[must_use]
    pub fn filter_events(mut self, types: Vec<String>) -> Self {
        self.event_filter = types;
        self
    }
}

// =============================================================================
// Tracer
// =============================================================================

/// Records dispatch events.
///
/// Every [`DispatchObserver`] hook returns immediately when tracing is off,
/// before any event data is built.
pub struct Tracer {
    config: TracerConfig,
    buffer: TraceBuffer,
    current_line: u64,
    start_time: Instant,
    human_formatter: HumanFormatter,
    json_formatter: JsonFormatter,
}

impl Tracer {
    /// Creates a new tracer with the given configuration.
    #[must_use]
    pub fn new(config: TracerConfig) -> Self {
        let buffer_size = config.buffer_size;
        let human_formatter = if config.verbose {
            HumanFormatter::new().with_ids().with_timestamps()
        } else {
            HumanFormatter::new()
        };
        Self {
            config,
            buffer: TraceBuffer::new(buffer_size),
            current_line: 0,
            start_time: Instant::now(),
            human_formatter,
            json_formatter: JsonFormatter::new(),
        }
    }

    /// Creates a tracer with default configuration (disabled).
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(TracerConfig::default())
    }

    /// Creates an enabled tracer that outputs to stderr.
    #[must_use]
    pub fn to_stderr() -> Self {
        Self::new(TracerConfig::new().enabled().to_stderr())
    }

    /// Returns whether tracing is enabled.
    #[must_use]
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Enables tracing.
    pub fn enable(&mut self) {
        self.config.enabled = true;
    }

    /// Disables tracing.
    pub fn disable(&mut self) {
        self.config.enabled = false;
    }

    /// Sequence number of the line being dispatched (0 before the first).
    #[must_use]
    pub fn current_line(&self) -> u64 {
        self.current_line
    }

    /// Sets whether to use JSON output format.
    pub fn set_json_format(&mut self, json: bool) {
        self.config.json_format = json;
    }

    /// Sets the trace output destination.
    pub fn set_output(&mut self, output: TraceOutput) {
        self.config.output = output;
    }

    /// Records a trace event against the current line.
    #[inline]
    pub fn record(&mut self, event: DispatchEvent) {
        if !self.config.enabled {
            return;
        }

        self.record_internal(event);
    }

    fn record_internal(&mut self, event: DispatchEvent) {
        if !self.config.event_filter.is_empty()
            && !self
                .config
                .event_filter
                .iter()
                .any(|t| t == event.event_type())
        {
            return;
        }

        #[allow(clippy::cast_possible_truncation)]
        let timestamp_ns = self.start_time.elapsed().as_nanos() as u64;
        self.buffer.push(self.current_line, timestamp_ns, event);

        if self.config.output == TraceOutput::Stderr {
            if let Some(record) = self.buffer.last() {
                let line = self.format_record(record);
                let _ = writeln!(io::stderr(), "{line}");
            }
        }
    }

    /// Formats a record using the current format settings.
    #[must_use]
    pub fn format_record(&self, record: &TraceRecord) -> String {
        if self.config.json_format {
            self.json_formatter.format(record)
        } else {
            self.human_formatter.format(record)
        }
    }

    /// Formats multiple records.
    #[must_use]
    pub fn format_records(&self, records: &[&TraceRecord]) -> String {
        if self.config.json_format {
            self.json_formatter.format_many(records)
        } else {
            self.human_formatter.format_many(records)
        }
    }

    /// Returns the trace buffer.
    #[must_use]
    pub fn buffer(&self) -> &TraceBuffer {
        &self.buffer
    }

    /// Clears the trace buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Returns buffer statistics.
    #[must_use]
    pub fn stats(&self) -> TraceBufferStats {
        self.buffer.stats()
    }
}

impl Default for Tracer {
    fn default() -> Self {
        Self::disabled()
    }
}

impl std::fmt::Debug for Tracer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tracer")
            .field("config", &self.config)
            .field("records", &self.buffer.len())
            .field("current_line", &self.current_line)
            .finish_non_exhaustive()
    }
}

fn context_string(context: Option<&Context>) -> Option<String> {
    context.map(|c| c.as_str().to_string())
}

impl DispatchObserver for Tracer {
    fn line_received(&mut self, line: &str, words: &[String]) {
        self.current_line += 1;
        if !self.is_enabled() {
            return;
        }
        self.record_internal(DispatchEvent::LineReceived {
            text: line.to_string(),
            words: words.to_vec(),
        });
    }

    fn candidates(&mut self, active: Option<&Context>, templates: &[&str]) {
        if !self.is_enabled() {
            return;
        }
        self.record_internal(DispatchEvent::Candidates {
            context: context_string(active),
            templates: templates.iter().map(|t| (*t).to_string()).collect(),
        });
    }

    fn attempt(&mut self, template: &str, captures: Option<&Arguments>) {
        if !self.is_enabled() {
            return;
        }
        self.record_internal(DispatchEvent::Attempt {
            template: template.to_string(),
            captures: captures.cloned(),
        });
    }

    fn handler_invoked(&mut self, template: &str, handler: &str, args: &Arguments) {
        if !self.is_enabled() {
            return;
        }
        self.record_internal(DispatchEvent::HandlerInvoked {
            template: template.to_string(),
            handler: handler.to_string(),
            args: args.clone(),
        });
    }

    fn builtin_invoked(&mut self, template: &str, builtin: Builtin) {
        if !self.is_enabled() {
            return;
        }
        self.record_internal(DispatchEvent::BuiltinInvoked {
            template: template.to_string(),
            builtin: builtin.to_string(),
        });
    }

    fn unmatched(&mut self, line: &str) {
        if !self.is_enabled() {
            return;
        }
        self.record_internal(DispatchEvent::Unmatched {
            text: line.to_string(),
        });
    }

    fn context_changed(&mut self, from: Option<&Context>, to: Option<&Context>) {
        if !self.is_enabled() {
            return;
        }
        self.record_internal(DispatchEvent::ContextChanged {
            from: context_string(from),
            to: context_string(to),
        });
    }
}

// =============================================================================
// Tests
// =============================================================================
