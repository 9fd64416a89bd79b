//! Integration tests for items and bags
//!
//! Tests alias lookup, set semantics, and seeded random picks.

use misadventure_world::{Bag, Item};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn key() -> Item {
    Item::new("rusty key").with_aliases(["key", "Old Key"])
}

fn kitchen_drawer() -> Bag {
    [key(), Item::new("spoon"), Item::new("string").with_aliases(["twine"])]
        .into_iter()
        .collect()
}

// =============================================================================
// Items
// =============================================================================

#[test]
fn item_answers_to_every_alias() {
    let item = key();
    assert!(item.is_called("rusty key"));
    assert!(item.is_called("KEY"));
    assert!(item.is_called("old key"));
    assert!(!item.is_called("rusty"));
    assert_eq!(item.to_string(), "rusty key");
}

// =============================================================================
// Bags
// =============================================================================

#[test]
fn bag_finds_by_alias() {
    let bag = kitchen_drawer();
    assert_eq!(bag.find("twine").map(Item::name), Some("string"));
    assert!(bag.contains_name("Key"));
    assert!(!bag.contains_name("fork"));
}

#[test]
fn bag_is_a_set() {
    let mut bag = kitchen_drawer();
    assert!(!bag.insert(key()));
    assert_eq!(bag.len(), 3);
    assert!(bag.insert(Item::new("key")));
    assert_eq!(bag.len(), 4);
}

#[test]
fn take_moves_an_item_between_bags() {
    let mut drawer = kitchen_drawer();
    let mut inventory = Bag::new();

    let item = drawer.take("twine").unwrap();
    assert!(inventory.insert(item));
    assert!(!drawer.contains_name("string"));
    assert!(inventory.contains_name("string"));
    assert!(drawer.take("twine").is_none());
}

#[test]
fn remove_needs_the_exact_item() {
    let mut drawer = kitchen_drawer();
    assert!(!drawer.remove(&Item::new("rusty key")));
    assert!(drawer.remove(&key()));
    assert!(!drawer.contains(&key()));
    assert_eq!(drawer.len(), 2);
}

#[test]
fn iteration_keeps_insertion_order() {
    let names: Vec<_> = kitchen_drawer().iter().map(Item::name).map(str::to_string).collect();
    assert_eq!(names, ["rusty key", "spoon", "string"]);
}

#[test]
fn extend_skips_duplicates() {
    let mut bag = kitchen_drawer();
    bag.extend([Item::new("spoon"), Item::new("fork")]);
    assert_eq!(bag.len(), 4);
}

#[test]
fn random_picks_are_reproducible() {
    let bag = kitchen_drawer();
    let mut a = ChaCha8Rng::seed_from_u64(7);
    let mut b = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..10 {
        assert_eq!(bag.get_random(&mut a), bag.get_random(&mut b));
    }
}

#[test]
fn empty_bag_has_nothing_to_pick() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut bag = Bag::new();
    assert!(bag.is_empty());
    assert!(bag.get_random(&mut rng).is_none());
    assert!(bag.take_random(&mut rng).is_none());
}

proptest! {
    #[test]
    fn take_random_empties_the_bag(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut bag = kitchen_drawer();
        let mut taken = Vec::new();
        while let Some(item) = bag.take_random(&mut rng) {
            taken.push(item.name().to_string());
        }
        taken.sort();
        prop_assert!(bag.is_empty());
        prop_assert_eq!(taken, vec!["rusty key", "spoon", "string"]);
    }
}
