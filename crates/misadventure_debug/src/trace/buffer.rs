//! Bounded history of trace records.
//!
//! Records are grouped by the input line that produced them; once the
//! capacity is reached the oldest record goes first.

use std::collections::{BTreeMap, VecDeque};

use super::record::{DispatchEvent, TraceRecord};

/// The most recent trace records, oldest first.
///
/// Record ids are assigned on push and never reused, even after eviction
/// or [`clear`](TraceBuffer::clear).
#[derive(Clone, Debug)]
pub struct TraceBuffer {
    records: VecDeque<TraceRecord>,
    capacity: usize,
    issued: u64,
}

impl TraceBuffer {
    /// Creates a buffer holding at most `capacity` records.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
            issued: 0,
        }
    }

    /// Appends an event for input `line` and returns its record id.
    pub fn push(&mut self, line: u64, timestamp_ns: u64, event: DispatchEvent) -> u64 {
        let id = self.issued;
        self.issued += 1;
        if self.capacity == 0 {
            return id;
        }
        if self.records.len() == self.capacity {
            self.records.pop_front();
        }
        self.records
            .push_back(TraceRecord::new(id, line, timestamp_ns, event));
        id
    }

    /// Number of records held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no records are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Maximum number of records held.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops every record. Ids keep counting up.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// All records, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &TraceRecord> {
        self.records.iter()
    }

    /// The newest record.
    #[must_use]
    pub fn last(&self) -> Option<&TraceRecord> {
        self.records.back()
    }

    /// The newest `count` records, oldest first.
    #[must_use]
    pub fn recent(&self, count: usize) -> Vec<&TraceRecord> {
        let skip = self.records.len().saturating_sub(count);
        self.records.iter().skip(skip).collect()
    }

    /// Records produced while dispatching input `line`.
    #[must_use]
    pub fn records_for_line(&self, line: u64) -> Vec<&TraceRecord> {
        self.records.iter().filter(|r| r.line == line).collect()
    }

    /// Records whose [`event_type`](TraceRecord::event_type) is `event_type`.
    #[must_use]
    pub fn by_event_type(&self, event_type: &str) -> Vec<&TraceRecord> {
        self.records
            .iter()
            .filter(|r| r.event_type() == event_type)
            .collect()
    }

    /// Input line numbers still present, in order.
    #[must_use]
    pub fn lines(&self) -> Vec<u64> {
        let mut lines: Vec<u64> = self.records.iter().map(|r| r.line).collect();
        lines.dedup();
        lines
    }

    /// How input `line` was settled: the handler or built-in that ran, or
    /// the unmatched report. `None` for blank lines and lines whose
    /// records were evicted.
    #[must_use]
    pub fn resolution(&self, line: u64) -> Option<&TraceRecord> {
        self.records
            .iter()
            .find(|r| r.line == line && r.event.is_resolution())
    }

    /// Raw text of every line nothing matched, in order.
    #[must_use]
    pub fn unmatched_lines(&self) -> Vec<&str> {
        self.records
            .iter()
            .filter_map(|r| match &r.event {
                DispatchEvent::Unmatched { text } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Counts over the records held.
    #[must_use]
    pub fn stats(&self) -> TraceBufferStats {
        let mut event_counts = BTreeMap::new();
        for record in &self.records {
            *event_counts.entry(record.event_type()).or_insert(0) += 1;
        }
        TraceBufferStats {
            record_count: self.records.len(),
            capacity: self.capacity,
            line_count: self.lines().len(),
            first_line: self.records.front().map(|r| r.line),
            last_line: self.records.back().map(|r| r.line),
            event_counts,
        }
    }
}

impl Default for TraceBuffer {
    fn default() -> Self {
        Self::new(10_000)
    }
}

/// Snapshot of a [`TraceBuffer`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceBufferStats {
    /// Records held.
    pub record_count: usize,
    /// Maximum records held.
    pub capacity: usize,
    /// Distinct input lines among the records.
    pub line_count: usize,
    /// Earliest input line still held.
    pub first_line: Option<u64>,
    /// Latest input line held.
    pub last_line: Option<u64>,
    /// Records per event type name.
    pub event_counts: BTreeMap<&'static str, usize>,
}
