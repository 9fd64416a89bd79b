//! The view a handler gets of the dispatch that invoked it.

use misadventure_foundation::{Arguments, Context, Error, Result, Value};

/// Passed to a [`Handler`](crate::registry::Handler) when its command
/// matches.
///
/// Gives access to the caller's game state, the merged arguments (bound
/// arguments plus captured placeholders), and the dispatcher's active
/// context, which handlers may replace (e.g. when the player walks into a
/// different room).
pub struct Invocation<'a, S> {
    /// Caller-owned game state passed to `dispatch`.
    pub state: &'a mut S,
    args: &'a Arguments,
    context: &'a mut Option<Context>,
    template: &'a str,
}

impl<'a, S> Invocation<'a, S> {
    pub(crate) fn new(
        state: &'a mut S,
        args: &'a Arguments,
        context: &'a mut Option<Context>,
        template: &'a str,
    ) -> Self {
        Self {
            state,
            args,
            context,
            template,
        }
    }

    /// All arguments for this call.
    #[must_use]
    pub fn args(&self) -> &Arguments {
        self.args
    }

    /// Looks up one argument.
    #[must_use]
    pub fn arg(&self, name: &str) -> Option<&Value> {
        self.args.get(name)
    }

    /// Looks up a text argument, such as a captured placeholder.
    ///
    /// # Errors
    ///
    /// Returns `ErrorKind::Handler` if the argument is missing or not text.
    pub fn text(&self, name: &str) -> Result<&str> {
        self.args
            .get_str(name)
            .ok_or_else(|| Error::handler(format!("argument {name:?} is not text")))
    }

    /// The template of the command that matched.
    #[must_use]
    pub fn template(&self) -> &str {
        self.template
    }

    /// The active context.
    #[must_use]
    pub fn context(&self) -> Option<&Context> {
        self.context.as_ref()
    }

    /// Replaces the active context for subsequent dispatches.
    ///
    /// # Errors
    ///
    /// Returns `ErrorKind::InvalidContext` if `context` is malformed; the
    /// active context is left unchanged.
    pub fn set_context(&mut self, context: Option<&str>) -> Result<()> {
        *self.context = Context::parse(context)?;
        Ok(())
    }
}
