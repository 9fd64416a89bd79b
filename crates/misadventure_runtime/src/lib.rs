//! REPL, terminal output, and CLI for misadventure games.
//!
//! This crate provides:
//! - [`Repl`] - Interactive prompt/dispatch loop over a [`Dispatcher`](misadventure_parser::Dispatcher)
//! - [`say`] - Paragraph-aware wrapping to the terminal width
//! - [`ReplConfig`] - Prompt, banner, and message settings
//! - The `misadventure` binary, a small demo game

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod repl;
pub mod say;

pub use config::ReplConfig;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::Repl;
pub use say::{DEFAULT_WIDTH, say, say_with_width, terminal_width, wrap_paragraphs};
