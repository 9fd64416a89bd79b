//! Context-scoped command dispatch.
//!
//! ```text
//! raw line ──► tokenize ──► filter by active context ──► order by depth
//!                                                          │
//!                 Unmatched ◄── none left ◄── try next ◄───┤
//!                                                          ▼
//!                                         first match: invoke, stop
//! ```
//!
//! The dispatcher owns the active context; nothing is global, so separate
//! dispatchers (sessions, tests) never interfere.

use misadventure_foundation::{Arguments, Context, ErrorContext, Result};

use crate::invocation::Invocation;
use crate::observer::{DispatchObserver, NoopObserver};
use crate::pattern::Pattern;
use crate::registry::{Action, Builtin, Handler, RegisteredCommand, Registry};
use crate::tokenizer::InputTokenizer;

/// Result of dispatching one input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The line was blank; nothing was dispatched.
    Empty,
    /// A user handler ran.
    Matched {
        /// Template of the command that matched.
        template: String,
    },
    /// The built-in help command matched; carries the sorted templates of
    /// the commands available in the active context.
    Help(Vec<String>),
    /// The built-in quit command matched.
    Quit,
    /// No command matched. Carries the raw line verbatim.
    Unmatched(String),
}

impl DispatchOutcome {
    /// Returns true if some command (user or built-in) matched.
    #[must_use]
    pub fn is_matched(&self) -> bool {
        matches!(self, Self::Matched { .. } | Self::Help(_) | Self::Quit)
    }
}

/// Registry plus active context.
///
/// `S` is the caller's game state, handed mutably to every handler.
#[derive(Debug)]
pub struct Dispatcher<S> {
    registry: Registry<S>,
    active: Option<Context>,
}

impl<S> Default for Dispatcher<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Dispatcher<S> {
    /// Creates a dispatcher with only the built-in `quit` command.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Registry::new();
        registry.push(builtin("quit", Builtin::Quit));
        Self {
            registry,
            active: None,
        }
    }

    /// Adds the built-in `help` command, and `?` as its alias, ahead of
    /// every other command. Both appear in the help listing. Calling it
    /// twice has no further effect.
    pub fn enable_help(&mut self) {
        if !self.registry.has_builtin(Builtin::Help) {
            self.registry.push_front(builtin("help", Builtin::Help));
            self.registry.push_front(builtin("?", Builtin::Help));
        }
    }

    /// Builder form of [`Dispatcher::enable_help`].
    #[must_use]
    pub fn with_help(mut self) -> Self {
        self.enable_help();
        self
    }

    /// Registers a command.
    ///
    /// # Errors
    ///
    /// - `ErrorKind::InvalidContext` if `context` is malformed
    /// - `ErrorKind::InvalidTemplate` if `template` does not compile
    /// - `ErrorKind::SignatureMismatch` if the handler's parameters are not
    ///   exactly the placeholders plus the bound argument names
    pub fn register(
        &mut self,
        template: &str,
        context: Option<&str>,
        bound: Arguments,
        handler: Handler<S>,
    ) -> Result<()> {
        let context = Context::parse(context)?;
        let pattern = Pattern::compile(template, context)?;
        let command = RegisteredCommand::new(pattern, Action::Handler(handler), bound)?;
        self.registry.push(command);
        Ok(())
    }

    /// Registers a global command with no bound arguments.
    ///
    /// # Errors
    ///
    /// Same as [`Dispatcher::register`].
    pub fn when(&mut self, template: &str, handler: Handler<S>) -> Result<()> {
        self.register(template, None, Arguments::new(), handler)
    }

    /// Registers a command scoped to `context` with no bound arguments.
    ///
    /// # Errors
    ///
    /// Same as [`Dispatcher::register`].
    pub fn when_in(&mut self, template: &str, context: &str, handler: Handler<S>) -> Result<()> {
        self.register(template, Some(context), Arguments::new(), handler)
    }

    /// Replaces the active context.
    ///
    /// # Errors
    ///
    /// Returns `ErrorKind::InvalidContext` if `context` is malformed; the
    /// active context is left unchanged.
    pub fn set_context(&mut self, context: Option<&str>) -> Result<()> {
        self.active = Context::parse(context)?;
        Ok(())
    }

    /// The active context.
    #[must_use]
    pub fn context(&self) -> Option<&Context> {
        self.active.as_ref()
    }

    /// The underlying registry.
    #[must_use]
    pub fn registry(&self) -> &Registry<S> {
        &self.registry
    }

    /// Commands available in the active context, in probe order.
    #[must_use]
    pub fn available_commands(&self) -> Vec<&RegisteredCommand<S>> {
        self.registry.candidates(self.active.as_ref())
    }

    /// Sorted templates of the commands available in the active context.
    #[must_use]
    pub fn help_lines(&self) -> Vec<String> {
        self.registry.help_lines(self.active.as_ref())
    }

    /// Dispatches one input line.
    ///
    /// # Errors
    ///
    /// Only errors raised by the invoked handler are returned; a line that
    /// matches nothing is [`DispatchOutcome::Unmatched`], not an error.
    pub fn dispatch(&mut self, state: &mut S, line: &str) -> Result<DispatchOutcome> {
        self.dispatch_observed(state, line, &mut NoopObserver)
    }

    /// Dispatches one input line, reporting each stage to `observer`.
    ///
    /// # Errors
    ///
    /// Same as [`Dispatcher::dispatch`].
    pub fn dispatch_observed(
        &mut self,
        state: &mut S,
        line: &str,
        observer: &mut dyn DispatchObserver,
    ) -> Result<DispatchOutcome> {
        let words = InputTokenizer::tokenize(line);
        observer.line_received(line, &words);
        if words.is_empty() {
            return Ok(DispatchOutcome::Empty);
        }

        let candidates = self.registry.candidates(self.active.as_ref());
        observer.candidates(
            self.active.as_ref(),
            &candidates
                .iter()
                .map(|c| c.pattern.template())
                .collect::<Vec<_>>(),
        );

        for command in candidates {
            let template = command.pattern.template();
            let captures = command.pattern.matches(&words);
            observer.attempt(template, captures.as_ref());
            let Some(captures) = captures else {
                continue;
            };

            let mut args = command.bound.clone();
            args.merge(captures);

            return match &command.action {
                Action::Builtin(builtin) => {
                    observer.builtin_invoked(template, *builtin);
                    Ok(match builtin {
                        Builtin::Quit => DispatchOutcome::Quit,
                        Builtin::Help => {
                            DispatchOutcome::Help(self.registry.help_lines(self.active.as_ref()))
                        }
                    })
                }
                Action::Handler(handler) => {
                    observer.handler_invoked(template, handler.name(), &args);
                    let before = self.active.clone();
                    let mut invocation =
                        Invocation::new(state, &args, &mut self.active, template);
                    let result = handler.call(&mut invocation);
                    // A failing handler keeps any context it already set.
                    if self.active != before {
                        observer.context_changed(before.as_ref(), self.active.as_ref());
                    }
                    result.map_err(|err| {
                        if err.context.is_some() {
                            return err;
                        }
                        err.with_context(
                            ErrorContext::new()
                                .with_input(line)
                                .with_template(template)
                                .with_frame(handler.name()),
                        )
                    })?;
                    Ok(DispatchOutcome::Matched {
                        template: template.to_string(),
                    })
                }
            };
        }

        observer.unmatched(line);
        Ok(DispatchOutcome::Unmatched(line.to_string()))
    }
}

fn builtin<S>(keyword: &str, kind: Builtin) -> RegisteredCommand<S> {
    RegisteredCommand {
        pattern: Pattern::keyword(keyword),
        action: Action::Builtin(kind),
        bound: Arguments::new(),
    }
}
