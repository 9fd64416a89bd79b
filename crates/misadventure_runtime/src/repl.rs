//! The interactive prompt/dispatch loop.

use std::io::{self, Write};

use misadventure_debug::Tracer;
use misadventure_foundation::{Error, Result};
use misadventure_parser::{DispatchOutcome, Dispatcher};

use crate::config::ReplConfig;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::say::wrap_paragraphs;

const HELP_HEADER: &str = "Here is a list of the commands you can give:";

/// The interactive REPL.
///
/// Reads lines, dispatches them against the game's commands, and renders the
/// outcome. `S` is the game state handed to every handler.
pub struct Repl<S, E: LineEditor = RustylineEditor> {
    editor: E,
    dispatcher: Dispatcher<S>,
    state: S,
    tracer: Tracer,
    config: ReplConfig,
    out: Box<dyn Write>,
}

impl<S> Repl<S, RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(dispatcher: Dispatcher<S>, state: S) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, dispatcher, state))
    }
}

impl<S, E: LineEditor> Repl<S, E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E, dispatcher: Dispatcher<S>, state: S) -> Self {
        Self {
            editor,
            dispatcher,
            state,
            tracer: Tracer::disabled(),
            config: ReplConfig::default(),
            out: Box::new(io::stdout()),
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Installs a dispatch tracer.
    #[must_use]
    pub fn with_tracer(mut self, tracer: Tracer) -> Self {
        self.tracer = tracer;
        self
    }

    /// Sends REPL output (help listings, messages, errors) to `out`
    /// instead of stdout.
    #[must_use]
    pub fn with_output(mut self, out: Box<dyn Write>) -> Self {
        self.out = out;
        self
    }

    /// The game state.
    #[must_use]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Mutable access to the game state.
    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    /// The dispatcher.
    #[must_use]
    pub fn dispatcher(&self) -> &Dispatcher<S> {
        &self.dispatcher
    }

    /// The tracer.
    #[must_use]
    pub fn tracer(&self) -> &Tracer {
        &self.tracer
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &ReplConfig {
        &self.config
    }

    /// Ends the session and returns the game state.
    pub fn into_state(self) -> S {
        self.state
    }

    /// Runs the loop until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails. Errors
    /// from command handlers are printed and the loop continues.
    pub fn run(&mut self) -> Result<()> {
        self.prepare();
        if let Some(banner) = &self.config.banner {
            let banner = wrap_paragraphs(banner, self.config.effective_width());
            writeln!(self.out, "{banner}\n").map_err(io_error)?;
            self.out.flush().map_err(io_error)?;
        }

        loop {
            self.editor.set_commands(&self.dispatcher.help_lines());
            match self.editor.read_line(&self.config.prompt)? {
                ReadResult::Line(line) => {
                    if !self.handle_line(&line)? {
                        break;
                    }
                }
                ReadResult::Interrupted => {
                    writeln!(self.out).map_err(io_error)?;
                }
                ReadResult::Eof => {
                    writeln!(self.out).map_err(io_error)?;
                    break;
                }
            }
        }

        self.out.flush().map_err(io_error)
    }

    /// Handles one input line. Returns `Ok(false)` once the player quits.
    ///
    /// Blank lines are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if writing output fails.
    pub fn handle_line(&mut self, line: &str) -> Result<bool> {
        self.prepare();
        let line = line.trim();
        if line.is_empty() {
            return Ok(true);
        }
        self.editor.add_history(line);

        match self
            .dispatcher
            .dispatch_observed(&mut self.state, line, &mut self.tracer)
        {
            Ok(DispatchOutcome::Quit) => {
                self.out.flush().map_err(io_error)?;
                return Ok(false);
            }
            Ok(DispatchOutcome::Help(templates)) => {
                writeln!(self.out, "{HELP_HEADER}").map_err(io_error)?;
                for template in templates {
                    writeln!(self.out, "{template}").map_err(io_error)?;
                }
            }
            Ok(DispatchOutcome::Unmatched(raw)) => {
                writeln!(self.out, "{}", self.config.unmatched(&raw)).map_err(io_error)?;
            }
            Ok(DispatchOutcome::Matched { .. } | DispatchOutcome::Empty) => {}
            Err(err) => self.print_error(&err)?,
        }

        writeln!(self.out).map_err(io_error)?;
        self.out.flush().map_err(io_error)?;
        Ok(true)
    }

    fn prepare(&mut self) {
        if self.config.help {
            self.dispatcher.enable_help();
        }
    }

    fn print_error(&mut self, error: &Error) -> Result<()> {
        writeln!(self.out, "Error: {error}").map_err(io_error)?;
        if let Some(context) = &error.context {
            writeln!(self.out, "{context}").map_err(io_error)?;
        }
        Ok(())
    }
}

#[allow(clippy::needless_pass_by_value)]
fn io_error(err: io::Error) -> Error {
    Error::internal(format!("output failed: {err}"))
}
