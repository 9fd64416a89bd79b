//! Word allocation.
//!
//! Given `have` words left over once a pattern's literal words are accounted
//! for, and `placeholders` slots to fill, enumerates every way of giving each
//! slot at least one word.
//!
//! The order is what decides ambiguous captures: the first slot is greedy and
//! takes as many words as it can, later slots recursively do the same with
//! what is left, and each step backtracks by giving the first slot one word
//! fewer. For `have = 4, placeholders = 3`:
//!
//! ```text
//! (2, 1, 1)
//! (1, 2, 1)
//! (1, 1, 2)
//! ```
//!
//! The sequence is generated lazily and is restartable: calling [`allocate`]
//! again with the same arguments yields the same tuples in the same order.

use std::iter::{FusedIterator, repeat_n};

/// One assignment of word counts to placeholders, in placeholder order.
pub type Allocation = Vec<usize>;

/// Enumerates allocations of `have` words over `placeholders` slots.
///
/// - `have < placeholders` yields nothing
/// - `have == placeholders` yields one all-ones allocation
/// - `placeholders == 1` yields `[have]`
/// - `placeholders == 0` yields one empty allocation iff `have == 0`
#[must_use]
pub fn allocate(have: usize, placeholders: usize) -> Allocations {
    let first = if placeholders == 0 {
        (have == 0).then(Vec::new)
    } else if have < placeholders {
        None
    } else {
        Some(greedy(have, placeholders))
    };

    Allocations { next: first }
}

/// Lazy iterator returned by [`allocate`].
#[derive(Clone, Debug)]
pub struct Allocations {
    next: Option<Allocation>,
}

impl Iterator for Allocations {
    type Item = Allocation;

    fn next(&mut self) -> Option<Allocation> {
        let current = self.next.take()?;
        self.next = successor(&current);
        Some(current)
    }
}

impl FusedIterator for Allocations {}

/// The greedy allocation: first slot takes everything the others can spare.
fn greedy(have: usize, slots: usize) -> Allocation {
    let mut alloc = Vec::with_capacity(slots);
    alloc.push(have - (slots - 1));
    alloc.extend(repeat_n(1, slots - 1));
    alloc
}

/// The allocation after `current` in greedy-backtracking order.
///
/// Finds the rightmost slot (excluding the last) that can give up a word,
/// takes one from it, and refills everything after it greedily.
fn successor(current: &[usize]) -> Option<Allocation> {
    let slots = current.len();
    if slots < 2 {
        return None;
    }

    let pivot = (0..slots - 1).rev().find(|&i| current[i] > 1)?;
    let tail: usize = current[pivot + 1..].iter().sum::<usize>() + 1;

    let mut next = current[..=pivot].to_vec();
    next[pivot] -= 1;
    next.extend(greedy(tail, slots - pivot - 1));
    Some(next)
}
