//! Misadventure - Scary easy text adventures
//!
//! This crate re-exports all layers of the misadventure system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: misadventure_runtime     REPL, line editing, paragraph output, demo game
//! Layer 2: misadventure_debug       Dispatch tracing
//! Layer 1: misadventure_parser      Templates, matching, context-scoped dispatch
//!          misadventure_world       Items, bags, rooms, exits
//! Layer 0: misadventure_foundation  Core types (Context, Value, Arguments, Error)
//! ```

pub use misadventure_debug as debug;
pub use misadventure_foundation as foundation;
pub use misadventure_parser as parser;
pub use misadventure_runtime as runtime;
pub use misadventure_world as world;
