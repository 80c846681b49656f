//! Trigger collection and APNAP ordering.
//!
//! After an effect emits an event, the collector scans every permanent on
//! every board (board order, then battlefield order) and reports each
//! triggered ability whose condition matches. `order_apnap` then sorts
//! the matches so that pushing them in order leaves the non-active
//! players' abilities on top.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, ObjectId, PlayerId};

use super::condition::ConditionEvaluator;
use super::event::GameEvent;

/// A matched ability that has not been put on the stack yet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingTrigger {
    pub source_id: ObjectId,
    pub source_name: String,
    pub ability_index: usize,
    pub controller: PlayerId,

    /// Is the controller the active player?
    pub is_active_player: bool,

    /// 0 for the active player, 1 for everyone else.
    pub turn_order: u8,

    /// Ability text for display.
    pub text: String,
}

/// Finds and orders triggered abilities.
pub struct TriggerCollector;

impl TriggerCollector {
    /// Find every ability that fires for `event`, in discovery order.
    #[must_use]
    pub fn find_triggers(event: &GameEvent, state: &GameState) -> Vec<PendingTrigger> {
        let mut found = Vec::new();

        for permanent in state.permanents() {
            let Some(card) = state.cards.get(&permanent.card_name) else {
                continue;
            };

            for (index, ability) in card.triggered_abilities.iter().enumerate() {
                if !ConditionEvaluator::matches(&ability.trigger, event, permanent) {
                    continue;
                }

                let is_active_player = state.is_active(&permanent.controller);

                found.push(PendingTrigger {
                    source_id: permanent.id.clone(),
                    source_name: permanent.card_name.clone(),
                    ability_index: index,
                    controller: permanent.controller.clone(),
                    is_active_player,
                    turn_order: if is_active_player { 0 } else { 1 },
                    text: ability.text.clone(),
                });
            }
        }

        found
    }

    /// Sort into push order: active player's abilities first. The sort is
    /// stable, so ties keep discovery order.
    #[must_use]
    pub fn order_apnap(mut triggers: Vec<PendingTrigger>) -> Vec<PendingTrigger> {
        triggers.sort_by_key(|t| t.turn_order);
        triggers
    }
}
