//! Dispatch tracing for misadventure.
//!
//! This crate provides:
//! - [`Tracer`] - Records every stage of a dispatch into a ring buffer
//! - [`HumanFormatter`] / [`JsonFormatter`] - Render trace records
//! - [`ObservabilityConfig`] - Presets for building a tracer

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod trace;

pub use config::ObservabilityConfig;
pub use trace::{
    DispatchEvent, HumanFormatter, JsonFormatter, TraceBuffer, TraceBufferStats, TraceFormatter,
    TraceOutput, TraceRecord, Tracer, TracerConfig,
};
