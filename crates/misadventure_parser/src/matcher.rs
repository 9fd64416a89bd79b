//! Pattern matching.
//!
//! Tests one compiled [`Pattern`] against a tokenized input line. The prefix
//! must match literally; the body is then tried under each word allocation
//! from [`allocate`](crate::allocate::allocate) in order, and the first
//! allocation under which every literal lines up wins.

use misadventure_foundation::Arguments;

use crate::allocate::allocate;
use crate::pattern::{Pattern, PatternToken};

impl Pattern {
    /// Matches `words` against this pattern.
    ///
    /// Returns the captured placeholder phrases (in template order) or `None`
    /// if the pattern does not match. Matching never fails with an error.
    #[must_use]
    pub fn matches(&self, words: &[String]) -> Option<Arguments> {
        if words.len() < self.argnames().len() {
            return None;
        }

        let rest = strip_prefix(words, self.prefix())?;

        match (rest.is_empty(), self.body().is_empty()) {
            (true, true) => return Some(Arguments::new()),
            (true, false) | (false, true) => return None,
            (false, false) => {}
        }

        let have = rest.len().checked_sub(self.fixed_count())?;

        allocate(have, self.placeholder_count())
            .find_map(|allocation| self.try_allocation(rest, &allocation))
    }

    /// Walks the body under one allocation. Any literal mismatch abandons the
    /// whole allocation.
    fn try_allocation(&self, mut rest: &[String], allocation: &[usize]) -> Option<Arguments> {
        let mut counts = allocation.iter();
        let mut captures = Arguments::new();

        for token in self.body() {
            match token {
                PatternToken::Literal(word) => {
                    let (next, tail) = rest.split_first()?;
                    if next != word {
                        return None;
                    }
                    rest = tail;
                }
                PatternToken::Placeholder(name) => {
                    let take = *counts.next()?;
                    if take > rest.len() {
                        return None;
                    }
                    let (phrase, tail) = rest.split_at(take);
                    captures.insert(name.clone(), phrase.join(" "));
                    rest = tail;
                }
            }
        }

        rest.is_empty().then_some(captures)
    }
}

/// Returns what follows `prefix` in `words`, or `None` if `words` does not
/// start with it.
fn strip_prefix<'a>(words: &'a [String], prefix: &[String]) -> Option<&'a [String]> {
    if words.len() < prefix.len() {
        return None;
    }
    let (head, rest) = words.split_at(prefix.len());
    (head == prefix).then_some(rest)
}
