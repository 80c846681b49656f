//! Permanents - live battlefield instances.
//!
//! A `Permanent` points at its blueprint by card name and tracks the
//! state effects change: damage, power/toughness modifiers, tapped.
//! Effective toughness is the blueprint's toughness plus the modifier;
//! computing it needs the definition, see `GameState::effective_toughness`.

use serde::{Deserialize, Serialize};

use crate::core::{ObjectId, PlayerId};

/// A card on a battlefield.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Permanent {
    /// Unique across all boards.
    pub id: ObjectId,

    /// Name of the `CardDef` this is an instance of.
    pub card_name: String,

    pub controller: PlayerId,

    pub tapped: bool,

    /// Damage marked this turn.
    pub damage: i64,

    /// Added to the blueprint's power.
    pub power_mod: i64,

    /// Added to the blueprint's toughness.
    pub toughness_mod: i64,
}

impl Permanent {
    /// Create an untapped, undamaged permanent.
    #[must_use]
    pub fn new(id: impl Into<ObjectId>, card_name: impl Into<String>, controller: PlayerId) -> Self {
        Self {
            id: id.into(),
            card_name: card_name.into(),
            controller,
            tapped: false,
            damage: 0,
            power_mod: 0,
            toughness_mod: 0,
        }
    }

    /// Set the tapped flag (builder pattern).
    #[must_use]
    pub fn with_tapped(mut self, tapped: bool) -> Self {
        self.tapped = tapped;
        self
    }

    /// Apply a symmetric counter change to both modifiers.
    pub fn add_counters(&mut self, amount: i64) {
        self.power_mod += amount;
        self.toughness_mod += amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_permanent_is_clean() {
        let bear = Permanent::new("p1", "Grizzly Bears", PlayerId::new("Alice"));
        assert_eq!(bear.id, ObjectId::new("p1"));
        assert_eq!(bear.damage, 0);
        assert_eq!((bear.power_mod, bear.toughness_mod), (0, 0));
        assert!(!bear.tapped);
    }

    #[test]
    fn test_counters_are_symmetric() {
        let mut bear = Permanent::new("p1", "Grizzly Bears", PlayerId::new("Alice"));
        bear.add_counters(2);
        bear.add_counters(-3);
        assert_eq!((bear.power_mod, bear.toughness_mod), (-1, -1));
    }

    #[test]
    fn test_with_tapped() {
        let land = Permanent::new("l1", "Forest", PlayerId::new("Bob")).with_tapped(true);
        assert!(land.tapped);
    }
}
