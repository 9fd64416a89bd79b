//! Named items.

use std::fmt;

/// A generic item that can be referred to by a number of names.
///
/// Aliases are stored lowercased and always include the item's own name, so
/// lookups against tokenized (lowercased) input compare directly.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    name: String,
    aliases: Vec<String>,
}

impl Item {
    /// Creates an item known only by its name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let aliases = vec![name.to_lowercase()];
        Self { name, aliases }
    }

    /// Builder method to add alternative names.
    #[must_use]
    pub fn with_aliases<I, A>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: AsRef<str>,
    {
        for alias in aliases {
            let alias = alias.as_ref().to_lowercase();
            if !self.aliases.contains(&alias) {
                self.aliases.push(alias);
            }
        }
        self
    }

    /// The display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Every lowercased name, starting with the display name.
    #[must_use]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Returns true if `name` (any case) is one of this item's names.
    #[must_use]
    pub fn is_called(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.aliases.iter().any(|a| *a == name)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
