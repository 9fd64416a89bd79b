//! Command registry.
//!
//! Holds every registered command in registration order. Each entry pairs a
//! compiled [`Pattern`] with the [`Action`] to run and the arguments bound at
//! registration time.

use std::collections::BTreeSet;
use std::fmt;

use misadventure_foundation::{Arguments, Context, Error, Result};

use crate::invocation::Invocation;
use crate::pattern::Pattern;

/// Signature of a command handler body.
pub type HandlerFn<S> = dyn Fn(&mut Invocation<'_, S>) -> Result<()>;

/// A named command handler with an explicit parameter list.
///
/// The parameter list stands in for the handler's signature: registration
/// checks it against the template's placeholders and bound arguments.
pub struct Handler<S> {
    name: String,
    params: Vec<String>,
    func: Box<HandlerFn<S>>,
}

impl<S> Handler<S> {
    /// Creates a handler.
    pub fn new<I, P, F>(name: impl Into<String>, params: I, func: F) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
        F: Fn(&mut Invocation<'_, S>) -> Result<()> + 'static,
    {
        Self {
            name: name.into(),
            params: params.into_iter().map(Into::into).collect(),
            func: Box::new(func),
        }
    }

    /// The handler's name, used in error messages and traces.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared parameter names.
    #[must_use]
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Runs the handler.
    ///
    /// # Errors
    ///
    /// Returns whatever error the handler body reports.
    pub fn call(&self, invocation: &mut Invocation<'_, S>) -> Result<()> {
        (self.func)(invocation)
    }
}

impl<S> fmt::Debug for Handler<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handler({}({}))", self.name, self.params.join(", "))
    }
}

/// Commands the dispatcher handles itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Builtin {
    /// Ends the session.
    Quit,
    /// Lists the commands available in the active context.
    Help,
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quit => write!(f, "quit"),
            Self::Help => write!(f, "help"),
        }
    }
}

/// What happens when a command matches.
#[derive(Debug)]
pub enum Action<S> {
    /// A built-in command.
    Builtin(Builtin),
    /// A user-supplied handler.
    Handler(Handler<S>),
}

impl<S> Action<S> {
    /// Name shown in traces and errors.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Builtin(Builtin::Quit) => "quit",
            Self::Builtin(Builtin::Help) => "help",
            Self::Handler(h) => h.name(),
        }
    }

    fn params(&self) -> &[String] {
        match self {
            Self::Builtin(_) => &[],
            Self::Handler(h) => h.params(),
        }
    }
}

/// A compiled pattern with its action and bound arguments.
#[derive(Debug)]
pub struct RegisteredCommand<S> {
    /// The compiled template.
    pub pattern: Pattern,
    /// What to run on a match.
    pub action: Action<S>,
    /// Arguments fixed at registration rather than captured from input.
    pub bound: Arguments,
}

impl<S> RegisteredCommand<S> {
    /// Builds an entry after checking that the action's parameters are
    /// exactly the pattern's placeholders plus the bound argument names.
    ///
    /// # Errors
    ///
    /// Returns `ErrorKind::SignatureMismatch` if the two sets differ.
    pub fn new(pattern: Pattern, action: Action<S>, bound: Arguments) -> Result<Self> {
        let declared: BTreeSet<&str> = action.params().iter().map(String::as_str).collect();
        let required: BTreeSet<&str> = pattern
            .argnames()
            .iter()
            .map(String::as_str)
            .chain(bound.names())
            .collect();

        if declared != required {
            let mut expected: Vec<String> = pattern.argnames().to_vec();
            expected.extend(
                bound
                    .names()
                    .filter(|n| !pattern.argnames().iter().any(|a| a == n))
                    .map(str::to_string),
            );
            return Err(Error::signature_mismatch(
                action.name(),
                pattern.template(),
                expected,
                action.params().to_vec(),
            ));
        }

        Ok(Self {
            pattern,
            action,
            bound,
        })
    }
}

/// Ordered, append-only collection of commands.
#[derive(Debug)]
pub struct Registry<S> {
    commands: Vec<RegisteredCommand<S>>,
}

impl<S> Default for Registry<S> {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
        }
    }
}

impl<S> Registry<S> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a command.
    pub fn push(&mut self, command: RegisteredCommand<S>) {
        self.commands.push(command);
    }

    /// Inserts a command ahead of everything registered so far.
    pub fn push_front(&mut self, command: RegisteredCommand<S>) {
        self.commands.insert(0, command);
    }

    /// Returns true if a built-in of this kind is registered.
    #[must_use]
    pub fn has_builtin(&self, builtin: Builtin) -> bool {
        self.commands
            .iter()
            .any(|c| matches!(c.action, Action::Builtin(b) if b == builtin))
    }

    /// Number of registered commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterates over commands in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredCommand<S>> {
        self.commands.iter()
    }

    /// Commands available in `active`, in the order dispatch probes them:
    /// deepest context first, registration order among equals.
    #[must_use]
    pub fn candidates(&self, active: Option<&Context>) -> Vec<&RegisteredCommand<S>> {
        let mut candidates: Vec<_> = self
            .commands
            .iter()
            .filter(|c| c.pattern.is_active(active))
            .collect();
        // sort_by_key is stable
        candidates.sort_by_key(|c| std::cmp::Reverse(c.pattern.specificity()));
        candidates
    }

    /// Sorted templates of the commands available in `active`.
    #[must_use]
    pub fn help_lines(&self, active: Option<&Context>) -> Vec<String> {
        let mut lines: Vec<String> = self
            .commands
            .iter()
            .filter(|c| c.pattern.is_active(active))
            .map(|c| c.pattern.template().to_string())
            .collect();
        lines.sort();
        lines
    }
}
