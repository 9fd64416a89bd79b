//! Tests for word allocation order.

use misadventure_parser::{Allocation, allocate};
use proptest::prelude::*;

fn all(have: usize, k: usize) -> Vec<Allocation> {
    allocate(have, k).collect()
}

#[test]
fn test_edge_cases() {
    assert!(all(2, 3).is_empty());
    assert_eq!(all(3, 3), vec![vec![1, 1, 1]]);
    assert_eq!(all(6, 1), vec![vec![6]]);
    assert_eq!(all(0, 0), vec![Vec::<usize>::new()]);
    assert!(all(2, 0).is_empty());
}

#[test]
fn test_first_slot_is_greedy() {
    assert_eq!(
        all(5, 3),
        vec![
            vec![3, 1, 1],
            vec![2, 2, 1],
            vec![2, 1, 2],
            vec![1, 3, 1],
            vec![1, 2, 2],
            vec![1, 1, 3],
        ]
    );
}

#[test]
fn test_restartable() {
    assert_eq!(all(7, 3), all(7, 3));
    let mut iter = allocate(4, 2);
    assert_eq!(iter.next(), Some(vec![3, 1]));
    assert_eq!(iter.clone().count(), 2);
    assert_eq!(iter.next(), Some(vec![2, 2]));
}

fn binomial(n: usize, k: usize) -> usize {
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

proptest! {
    #[test]
    fn every_tuple_fills_every_slot(have in 0usize..12, k in 1usize..5) {
        for alloc in allocate(have, k) {
            prop_assert_eq!(alloc.len(), k);
            prop_assert!(alloc.iter().all(|&n| n >= 1));
            prop_assert_eq!(alloc.iter().sum::<usize>(), have);
        }
    }

    #[test]
    fn tuples_descend(have in 0usize..12, k in 1usize..5) {
        let tuples = all(have, k);
        for pair in tuples.windows(2) {
            prop_assert!(pair[0] > pair[1]);
            prop_assert!(pair[0][0] >= pair[1][0]);
        }
    }

    #[test]
    fn every_composition_appears(have in 1usize..12, k in 1usize..5) {
        let expected = if have < k { 0 } else { binomial(have - 1, k - 1) };
        prop_assert_eq!(allocate(have, k).count(), expected);
    }
}
