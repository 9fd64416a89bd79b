//! Command templates, word-allocation matching, and context-scoped dispatch.
//!
//! This crate turns templates like `"put ITEM in CONTAINER"` into patterns,
//! matches player input against them, and invokes the handler of the first
//! command that fits.
//!
//! # Architecture
//!
//! ```text
//! "put old brass key in wooden box"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → ["put", "old", "brass", "key", "in", "wooden", "box"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ CONTEXT FILTER  │  → commands active in "kitchen.pantry", deepest first
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ PATTERN MATCH   │  → prefix "put", allocations (4,1) (3,2) ...
//! │ + ALLOCATION    │     item = "old brass key", container = "wooden box"
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ HANDLER         │  → put(item, container)
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Convert raw input to lowercase words
//! - [`pattern`] - Template compilation
//! - [`allocate`] - Word allocation over placeholders
//! - [`matcher`] - Matching one pattern against input
//! - [`registry`] - Handlers and the command registry
//! - [`invocation`] - What a handler sees when it runs
//! - [`observer`] - Dispatch progress hooks
//! - [`dispatcher`] - Context-scoped dispatch

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod allocate;
pub mod dispatcher;
pub mod invocation;
pub mod matcher;
pub mod observer;
pub mod pattern;
pub mod registry;
pub mod tokenizer;

// Re-export main types for convenience
pub use allocate::{Allocation, Allocations, allocate};
pub use dispatcher::{DispatchOutcome, Dispatcher};
pub use invocation::Invocation;
pub use observer::{DispatchObserver, NoopObserver};
pub use pattern::{Pattern, PatternToken};
pub use registry::{Action, Builtin, Handler, RegisteredCommand, Registry};
pub use tokenizer::InputTokenizer;
