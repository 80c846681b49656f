//! Card registry for definition lookup.
//!
//! The `CardRegistry` stores every `CardDef` of a game keyed by card
//! name. Permanents and stack items refer to their blueprint by name.

use rustc_hash::FxHashMap;

use super::definition::{CardDef, Keyword};

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use ccg_stack::cards::{CardDef, CardRegistry, Keyword};
///
/// let mut registry = CardRegistry::new();
/// registry.register(CardDef::new("Darksteel Myr").with_keyword(Keyword::Indestructible));
///
/// assert!(registry.has_keyword("Darksteel Myr", &Keyword::Indestructible));
/// assert!(!registry.has_keyword("Unknown Card", &Keyword::Indestructible));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<String, CardDef>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition, replacing any previous one of the
    /// same name.
    pub fn register(&mut self, card: CardDef) -> Option<CardDef> {
        self.cards.insert(card.name.clone(), card)
    }

    /// Get a card definition by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CardDef> {
        self.cards.get(name)
    }

    /// Check if a card is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.cards.contains_key(name)
    }

    /// Does the named card have `keyword`? Unknown cards have none.
    #[must_use]
    pub fn has_keyword(&self, name: &str, keyword: &Keyword) -> bool {
        self.get(name).is_some_and(|card| card.has_keyword(keyword))
    }

    /// Number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all definitions (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &CardDef> {
        self.cards.values()
    }
}

impl FromIterator<CardDef> for CardRegistry {
    fn from_iter<I: IntoIterator<Item = CardDef>>(iter: I) -> Self {
        let mut registry = Self::new();
        for card in iter {
            registry.register(card);
        }
        registry
    }
}
