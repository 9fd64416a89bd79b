//! Dispatch observation hooks.
//!
//! [`Dispatcher::dispatch_observed`](crate::dispatcher::Dispatcher::dispatch_observed)
//! reports every stage of a dispatch to a [`DispatchObserver`]. All methods
//! default to doing nothing, so an observer only implements what it cares
//! about.

use misadventure_foundation::{Arguments, Context};

use crate::registry::Builtin;

/// Receives dispatch progress.
pub trait DispatchObserver {
    /// A line arrived and was tokenized.
    fn line_received(&mut self, _line: &str, _words: &[String]) {}

    /// The candidate set for the active context, in probe order.
    fn candidates(&mut self, _active: Option<&Context>, _templates: &[&str]) {}

    /// One candidate was tried; `captures` is `None` on a miss.
    fn attempt(&mut self, _template: &str, _captures: Option<&Arguments>) {}

    /// A user command matched and its handler is about to run.
    fn handler_invoked(&mut self, _template: &str, _handler: &str, _args: &Arguments) {}

    /// A built-in command matched.
    fn builtin_invoked(&mut self, _template: &str, _builtin: Builtin) {}

    /// Nothing matched.
    fn unmatched(&mut self, _line: &str) {}

    /// A handler replaced the active context.
    fn context_changed(&mut self, _from: Option<&Context>, _to: Option<&Context>) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl DispatchObserver for NoopObserver {}
