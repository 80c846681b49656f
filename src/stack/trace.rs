//! Resolution trace: what happened, step by step.
//!
//! The engine produces data only; `crate::report` turns it into text.

use serde::{Deserialize, Serialize};

use crate::core::{ObjectId, PlayerId, PlayerMap};
use crate::triggers::{GameEvent, PendingTrigger};

use super::entry::{StackItemId, StackItemKind};

/// One resolved stack item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionStep {
    pub item_id: StackItemId,
    pub kind: StackItemKind,
    pub source_name: String,

    /// Sentences describing the outcome, joined by spaces.
    pub description: String,

    /// Events emitted while resolving.
    pub events: Vec<GameEvent>,

    /// Abilities this step put on the stack, in push order.
    pub new_triggers: Vec<PendingTrigger>,
}

/// Full record of one run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionTrace {
    pub steps: Vec<ResolutionStep>,

    /// Life totals after the stack emptied, in board order.
    pub final_life: PlayerMap<i64>,

    /// Cards drawn per player, in the order each first drew.
    pub cards_drawn: PlayerMap<i64>,

    /// Destroyed permanents, in destruction order.
    pub destroyed: Vec<ObjectId>,

    /// Priority violations and aborted runs. Never fatal.
    pub errors: Vec<String>,
}

impl ResolutionTrace {
    /// Cards a player drew during the run.
    #[must_use]
    pub fn drawn_by(&self, player: &PlayerId) -> i64 {
        self.cards_drawn.get(player).copied().unwrap_or(0)
    }

    /// A player's final life total.
    #[must_use]
    pub fn life_of(&self, player: &PlayerId) -> Option<i64> {
        self.final_life.get(player).copied()
    }

    /// Was this permanent destroyed?
    #[must_use]
    pub fn was_destroyed(&self, id: &ObjectId) -> bool {
        self.destroyed.contains(id)
    }

    /// Every trigger put on the stack during the run, in push order.
    pub fn all_triggers(&self) -> impl Iterator<Item = &PendingTrigger> {
        self.steps.iter().flat_map(|s| s.new_triggers.iter())
    }
}
