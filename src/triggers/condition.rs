//! Trigger conditions.
//!
//! A condition is an (event, scope) pair. The event kind must match
//! exactly; the scope relates the event's object to the permanent that
//! carries the ability.

use serde::{Deserialize, Serialize};

use crate::cards::Permanent;

use super::event::{GameEvent, TriggerEvent};

/// Whose events an ability listens to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TriggerScope {
    /// Only the source permanent itself.
    #[serde(rename = "SELF")]
    Self_,
    AnyCreature,
    /// Any object except the source.
    AnotherCreature,
    /// Objects controlled by the source's controller.
    CreatureYouControl,
    /// Objects controlled by someone else.
    CreatureOpponentControls,
    AnyPlayer,
}

/// When a triggered ability fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TriggerCondition {
    pub event: TriggerEvent,
    pub scope: TriggerScope,
}

impl TriggerCondition {
    /// Create a condition.
    #[must_use]
    pub const fn new(event: TriggerEvent, scope: TriggerScope) -> Self {
        Self { event, scope }
    }
}

/// Evaluator for trigger conditions.
pub struct ConditionEvaluator;

impl ConditionEvaluator {
    /// Does `condition` on `source` fire for `event`?
    ///
    /// ```
    /// use ccg_stack::cards::Permanent;
    /// use ccg_stack::core::{ObjectId, PlayerId};
    /// use ccg_stack::triggers::{
    ///     ConditionEvaluator, GameEvent, TriggerCondition, TriggerEvent, TriggerScope,
    /// };
    ///
    /// let source = Permanent::new("p1", "Blood Artist", PlayerId::new("Alice"));
    /// let event = GameEvent::dies(ObjectId::new("p2"), "Grizzly Bears", PlayerId::new("Bob"));
    ///
    /// let any = TriggerCondition::new(TriggerEvent::Dies, TriggerScope::AnyCreature);
    /// let own = TriggerCondition::new(TriggerEvent::Dies, TriggerScope::Self_);
    /// assert!(ConditionEvaluator::matches(&any, &event, &source));
    /// assert!(!ConditionEvaluator::matches(&own, &event, &source));
    /// ```
    #[must_use]
    pub fn matches(condition: &TriggerCondition, event: &GameEvent, source: &Permanent) -> bool {
        if condition.event != event.kind {
            return false;
        }

        match condition.scope {
            TriggerScope::Self_ => source.id == event.object,
            TriggerScope::AnyCreature | TriggerScope::AnyPlayer => true,
            TriggerScope::AnotherCreature => source.id != event.object,
            TriggerScope::CreatureYouControl => source.controller == event.controller,
            TriggerScope::CreatureOpponentControls => source.controller != event.controller,
        }
    }
}
