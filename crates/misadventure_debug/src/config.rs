//! Configuration for the observability system.

use crate::trace::{Tracer, TracerConfig};

/// Event types shown by the development preset: how each line was resolved,
/// without the per-candidate attempts.
const RESOLUTION_EVENTS: [&str; 5] = [
    "line-received",
    "handler-invoked",
    "builtin-invoked",
    "unmatched",
    "context-changed",
];

/// Configuration for the observability system.
///
/// Controls dispatch tracing and trace retention.
#[derive(Clone, Debug)]
pub struct ObservabilityConfig {
    /// Whether observability is enabled (false = zero overhead).
    pub enabled: bool,

    /// Trace ring buffer size (number of records to retain).
    pub buffer_size: usize,

    /// Output trace to stderr.
    pub trace_to_stderr: bool,

    /// Output format: true for JSON, false for human-readable.
    pub json_output: bool,

    /// Include record IDs and timestamps in human-readable output.
    pub verbose: bool,

    /// Event types to keep (empty = all).
    pub event_filter: Vec<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            buffer_size: 1000,
            trace_to_stderr: true,
            json_output: false,
            verbose: false,
            event_filter: Vec::new(),
        }
    }
}

impl ObservabilityConfig {
    /// Creates a new configuration with observability enabled.
    #[must_use]
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }

    /// Creates a configuration for development: one line per resolution.
    #[must_use]
    pub fn development() -> Self {
        Self {
            enabled: true,
            buffer_size: 1000,
            trace_to_stderr: true,
            json_output: false,
            verbose: false,
            event_filter: RESOLUTION_EVENTS.iter().map(ToString::to_string).collect(),
        }
    }

    /// Creates a configuration for debugging: every event, with IDs and
    /// timestamps.
    #[must_use]
    pub fn debug() -> Self {
        Self {
            enabled: true,
            buffer_size: 10000,
            trace_to_stderr: true,
            json_output: false,
            verbose: true,
            event_filter: Vec::new(),
        }
    }

    /// Builder method to set enabled state.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Builder method to set buffer size.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Builder method to enable/disable stderr tracing.
    #[must_use]
    pub fn with_trace_to_stderr(mut self, trace: bool) -> Self {
        self.trace_to_stderr = trace;
        self
    }

    /// Builder method to enable/disable JSON output.
    #[must_use]
    pub fn with_json_output(mut self, json: bool) -> Self {
        self.json_output = json;
        self
    }

    /// Builder method to restrict the recorded event types.
    #[must_use]
    pub fn with_event_filter(mut self, types: Vec<String>) -> Self {
        self.event_filter = types;
        self
    }

    /// The equivalent tracer configuration.
    #[must_use]
    pub fn tracer_config(&self) -> TracerConfig {
        let mut config = TracerConfig::new()
            .with_buffer_size(self.buffer_size)
            .filter_events(self.event_filter.clone());
        if self.enabled {
            config = config.enabled();
        }
        if self.trace_to_stderr {
            config = config.to_stderr();
        }
        if self.json_output {
            config = config.json();
        }
        if self.verbose {
            config = config.verbose();
        }
        config
    }

    /// Builds a tracer from this configuration.
    #[must_use]
    pub fn to_tracer(&self) -> Tracer {
        Tracer::new(self.tracer_config())
    }
}
