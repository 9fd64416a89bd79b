//! Hierarchical command contexts.
//!
//! A context is a dotted path such as `kitchen.pantry`. Commands registered
//! under `kitchen` stay available while the player is anywhere "within" the
//! kitchen, including `kitchen.pantry`, but not in `kitchenette`.
//!
//! `None` is the global context: a command with no context is always
//! available, and an active context of `None` only sees global commands.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::Result;
use crate::error::{ContextFault, Error};

/// The separator that defines the context hierarchy.
pub const CONTEXT_SEP: char = '.';

/// A validated, non-empty context path.
///
/// Can only be built through [`Context::new`], so every value upholds the
/// segment rules checked by [`validate`].
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Context(Arc<str>);

impl Context {
    /// Validates `path` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns `ErrorKind::InvalidContext` if the path is empty, starts or ends
    /// with the separator, or contains two adjacent separators.
    pub fn new(path: &str) -> Result<Self> {
        check(path)?;
        Ok(Self(Arc::from(path)))
    }

    /// Validates an optional path, mapping `None` to the global context.
    ///
    /// # Errors
    ///
    /// Same as [`Context::new`].
    pub fn parse(path: Option<&str>) -> Result<Option<Self>> {
        path.map(Self::new).transpose()
    }

    /// Returns the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterates over the dot-separated segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(CONTEXT_SEP)
    }

    /// Number of segments (always at least 1).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.matches(CONTEXT_SEP).count() + 1
    }

    /// The enclosing context, or `None` for a single-segment path.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.0
            .rfind(CONTEXT_SEP)
            .map(|idx| Self(Arc::from(&self.0[..idx])))
    }

    /// Returns true if `self` is `other` or nested somewhere below it.
    #[must_use]
    pub fn is_within(&self, other: &Self) -> bool {
        self.0
            .strip_prefix(other.as_str())
            .is_some_and(|rest| rest.is_empty() || rest.starts_with(CONTEXT_SEP))
    }
}

impl Deref for Context {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Context {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Context({:?})", &*self.0)
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Context {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let path = String::deserialize(deserializer)?;
        Self::new(&path).map_err(serde::de::Error::custom)
    }
}

/// Checks an optional context string. `None` is always valid.
///
/// # Errors
///
/// Returns `ErrorKind::InvalidContext` listing every rule the string breaks.
pub fn validate(context: Option<&str>) -> Result<()> {
    context.map_or(Ok(()), check)
}

fn check(path: &str) -> Result<()> {
    let mut faults = Vec::new();
    if path.is_empty() {
        faults.push(ContextFault::Empty);
    }
    if path.starts_with(CONTEXT_SEP) {
        faults.push(ContextFault::LeadingSeparator);
    }
    if path.ends_with(CONTEXT_SEP) {
        faults.push(ContextFault::TrailingSeparator);
    }
    if path.contains("..") {
        faults.push(ContextFault::DoubledSeparator);
    }

    if faults.is_empty() {
        Ok(())
    } else {
        Err(Error::invalid_context(path, faults))
    }
}

/// Returns true if a command scoped to `pattern` is available while `active`
/// is the current context.
#[must_use]
pub fn matches(pattern: Option<&Context>, active: Option<&Context>) -> bool {
    match (pattern, active) {
        (None, _) => true,
        (Some(_), None) => false,
        (Some(pattern), Some(active)) => active.is_within(pattern),
    }
}

/// Dispatch ordering key: 0 for the global context, otherwise the depth.
#[must_use]
pub fn specificity(pattern: Option<&Context>) -> usize {
    pattern.map_or(0, Context::depth)
}
