//! Error types for the misadventure system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::context::CONTEXT_SEP;

/// The main error type for misadventure operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a malformed context error.
    #[must_use]
    pub fn invalid_context(context: impl Into<String>, faults: Vec<ContextFault>) -> Self {
        Self::new(ErrorKind::InvalidContext {
            context: context.into(),
            faults,
        })
    }

    /// Creates a malformed command template error.
    #[must_use]
    pub fn invalid_template(template: impl Into<String>, fault: TemplateFault) -> Self {
        Self::new(ErrorKind::InvalidTemplate {
            template: template.into(),
            fault,
        })
    }

    /// Creates a handler signature mismatch error.
    #[must_use]
    pub fn signature_mismatch(
        handler: impl Into<String>,
        template: impl Into<String>,
        expected: Vec<String>,
        actual: Vec<String>,
    ) -> Self {
        Self::new(ErrorKind::SignatureMismatch {
            handler: handler.into(),
            template: template.into(),
            expected,
            actual,
        })
    }

    /// Creates an error reported by a command handler.
    #[must_use]
    pub fn handler(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Handler(message.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }

    /// Returns true if this error was raised while validating a registration
    /// (template, signature, or context), i.e. it is fatal to startup.
    #[must_use]
    pub fn is_registration_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::InvalidTemplate { .. }
                | ErrorKind::SignatureMismatch { .. }
                | ErrorKind::InvalidContext { .. }
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A context string violates the dotted-segment rules.
    #[error("context {context:?} may not {}", describe_faults(.faults))]
    InvalidContext {
        /// The rejected context string.
        context: String,
        /// Every rule the string breaks, in check order.
        faults: Vec<ContextFault>,
    },

    /// A command template could not be compiled.
    #[error("invalid command {template:?}: {fault}")]
    InvalidTemplate {
        /// The rejected template.
        template: String,
        /// What is wrong with it.
        fault: TemplateFault,
    },

    /// A handler's declared parameters do not line up with its template.
    #[error(
        "the handler {handler}({}) has the wrong signature for {template:?}; \
         the parameters should be ({})",
        .actual.join(", "),
        .expected.join(", ")
    )]
    SignatureMismatch {
        /// Handler name.
        handler: String,
        /// Template the handler was registered for.
        template: String,
        /// Placeholder names followed by bound argument names.
        expected: Vec<String>,
        /// The parameters the handler declared.
        actual: Vec<String>,
    },

    /// A direction name is not all lowercase.
    #[error("invalid direction {0:?}: directions must be all lowercase")]
    InvalidDirection(String),

    /// A direction was declared twice.
    #[error("direction {0:?} is already defined")]
    DuplicateDirection(String),

    /// A direction was used without being declared.
    #[error("{0:?} is not a direction you have declared")]
    UnknownDirection(String),

    /// A room handle does not belong to the world.
    #[error("room #{0} does not exist")]
    UnknownRoom(usize),

    /// A room state was selected without being declared.
    #[error("room state {0:?} does not exist")]
    UnknownState(String),

    /// A command handler reported a failure.
    #[error("command failed: {0}")]
    Handler(String),

    /// Internal error (terminal, I/O, or should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// A single rule broken by a context string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContextFault {
    /// The string is empty.
    Empty,
    /// The string starts with the separator.
    LeadingSeparator,
    /// The string ends with the separator.
    TrailingSeparator,
    /// The string contains two adjacent separators.
    DoubledSeparator,
}

impl fmt::Display for ContextFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "be empty"),
            Self::LeadingSeparator => write!(f, "start with {CONTEXT_SEP}"),
            Self::TrailingSeparator => write!(f, "end with {CONTEXT_SEP}"),
            Self::DoubledSeparator => write!(f, "contain {CONTEXT_SEP}{CONTEXT_SEP}"),
        }
    }
}

/// Joins faults as "a, b or c".
fn describe_faults(faults: &[ContextFault]) -> String {
    let parts: Vec<String> = faults.iter().map(ToString::to_string).collect();
    match parts.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} or {last}", rest.join(", ")),
    }
}

/// What is wrong with a command template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TemplateFault {
    /// The template has no words.
    Empty,
    /// A word contains something other than letters.
    NonAlphabetic(String),
    /// A word mixes upper and lower case.
    MixedCase(String),
    /// A placeholder name appears more than once.
    DuplicatePlaceholder(String),
}

impl fmt::Display for TemplateFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "commands must contain at least one word"),
            Self::NonAlphabetic(word) => {
                write!(f, "{word:?}: commands may consist of letters only")
            }
            Self::MixedCase(word) => write!(
                f,
                "{word:?}: words in commands must either be in lowercase or capitals, not a mix"
            ),
            Self::DuplicatePlaceholder(name) => write!(
                f,
                "identifier {:?} may only be used once",
                name.to_uppercase()
            ),
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The command template involved, if any.
    pub template: Option<String>,
    /// The raw input line being dispatched, if any.
    pub input: Option<String>,
    /// Handler frames, outermost first.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the command template.
    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Sets the raw input line.
    #[must_use]
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(input) = &self.input {
            write!(f, "while handling {input:?}")?;
        }
        if let Some(template) = &self.template {
            write!(f, " (matched {template:?})")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
