//! Collections of items.

use im::Vector;
use rand::Rng;

use crate::item::Item;

/// A set of [`Item`]s, such as an inventory or the contents of a room.
///
/// Lookups accept any of an item's names. Backed by a persistent vector, so
/// cloning a bag (e.g. to stamp out rooms from a template) is cheap.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bag {
    items: Vector<Item>,
}

impl Bag {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item. Returns false if an identical item is already present.
    pub fn insert(&mut self, item: Item) -> bool {
        if self.items.contains(&item) {
            return false;
        }
        self.items.push_back(item);
        true
    }

    /// Finds an item by any of its names without removing it.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.is_called(name))
    }

    /// Returns true if an item with this name is present.
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Returns true if this exact item is present.
    #[must_use]
    pub fn contains(&self, item: &Item) -> bool {
        self.items.contains(item)
    }

    /// Removes and returns the first item answering to `name`.
    pub fn take(&mut self, name: &str) -> Option<Item> {
        let index = self.items.iter().position(|item| item.is_called(name))?;
        Some(self.items.remove(index))
    }

    /// Removes this exact item. Returns false if it was not present.
    pub fn remove(&mut self, item: &Item) -> bool {
        match self.items.index_of(item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Picks an item at random without removing it.
    pub fn get_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Item> {
        if self.items.is_empty() {
            return None;
        }
        self.items.get(rng.gen_range(0..self.items.len()))
    }

    /// Removes an item at random and returns it.
    pub fn take_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Item> {
        if self.items.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.items.len());
        Some(self.items.remove(index))
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the bag holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }
}

impl FromIterator<Item> for Bag {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        let mut bag = Self::new();
        for item in iter {
            bag.insert(item);
        }
        bag
    }
}

impl Extend<Item> for Bag {
    fn extend<I: IntoIterator<Item = Item>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}
