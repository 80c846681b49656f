//! Game event types.
//!
//! Events are ephemeral notices produced while an effect is applied. The
//! resolver hands each one to the trigger collector and then drops it.
//! Only destruction emits events today (`DIES`), but the matcher accepts
//! every kind a card can name.

use serde::{Deserialize, Serialize};

use crate::core::{ObjectId, PlayerId};

/// The kind of thing that happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TriggerEvent {
    EntersBattlefield,
    Dies,
    Attacks,
    Blocks,
    DealsDamage,
    DealsCombatDamage,
    BeginningOfUpkeep,
    EndOfTurn,
    SpellCast,
    BecomesTarget,
}

impl TriggerEvent {
    /// The document spelling of this event.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::EntersBattlefield => "ENTERS_BATTLEFIELD",
            Self::Dies => "DIES",
            Self::Attacks => "ATTACKS",
            Self::Blocks => "BLOCKS",
            Self::DealsDamage => "DEALS_DAMAGE",
            Self::DealsCombatDamage => "DEALS_COMBAT_DAMAGE",
            Self::BeginningOfUpkeep => "BEGINNING_OF_UPKEEP",
            Self::EndOfTurn => "END_OF_TURN",
            Self::SpellCast => "SPELL_CAST",
            Self::BecomesTarget => "BECOMES_TARGET",
        }
    }
}

impl std::fmt::Display for TriggerEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Something that happened to one object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    /// What happened.
    pub kind: TriggerEvent,

    /// The object it happened to.
    pub object: ObjectId,

    /// Card name of that object.
    pub card_name: String,

    /// Controller of that object at the time.
    pub controller: PlayerId,
}

impl GameEvent {
    /// Create an event.
    #[must_use]
    pub fn new(
        kind: TriggerEvent,
        object: ObjectId,
        card_name: impl Into<String>,
        controller: PlayerId,
    ) -> Self {
        Self {
            kind,
            object,
            card_name: card_name.into(),
            controller,
        }
    }

    /// A creature died.
    #[must_use]
    pub fn dies(object: ObjectId, card_name: impl Into<String>, controller: PlayerId) -> Self {
        Self::new(TriggerEvent::Dies, object, card_name, controller)
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} ({}, controlled by {})",
            self.kind, self.card_name, self.object, self.controller
        )
    }
}
