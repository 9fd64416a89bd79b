//! Core types, contexts, argument values, and errors for misadventure.
//!
//! This crate provides:
//! - [`Context`] - Validated hierarchical command contexts
//! - [`Value`] - Literal argument values handed to command handlers
//! - [`Arguments`] - Ordered name to value mapping for handler invocations
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod context;
pub mod error;
pub mod value;

pub use context::{CONTEXT_SEP, Context};
pub use error::{ContextFault, Error, ErrorContext, ErrorKind, TemplateFault};
pub use value::{Arguments, Value};

/// Result type for misadventure operations.
pub type Result<T> = std::result::Result<T, Error>;
