//! Trigger system for event-driven abilities.
//!
//! Triggered abilities are printed on card definitions. When an effect
//! emits a [`GameEvent`], the collector walks every permanent, asks the
//! [`ConditionEvaluator`] whether each ability fires, and returns the
//! matches as [`PendingTrigger`]s for the engine to push.
//!
//! ## Key Components
//!
//! - [`TriggerEvent`] / [`GameEvent`]: What happened
//! - [`TriggerCondition`]: (event, scope) pair printed on a card
//! - [`ConditionEvaluator`]: Pure matching predicate
//! - [`TriggerCollector`]: Board scan and APNAP ordering
//!
//! ## Example Usage
//!
//! ```
//! use ccg_stack::cards::{CardDef, CardRegistry, Permanent, TriggeredAbility};
//! use ccg_stack::core::{Board, GameState, ObjectId, PlayerId};
//! use ccg_stack::effects::Effect;
//! use ccg_stack::triggers::{
//!     GameEvent, TriggerCollector, TriggerCondition, TriggerEvent, TriggerScope,
//! };
//!
//! let alice = PlayerId::new("Alice");
//! let bob = PlayerId::new("Bob");
//!
//! // "Whenever a creature dies, draw a card."
//! let watcher = CardDef::new("Watcher").with_triggered_ability(
//!     TriggeredAbility::new(TriggerCondition::new(TriggerEvent::Dies, TriggerScope::AnyCreature))
//!         .with_effect(Effect::draw(1)),
//! );
//! let cards: CardRegistry = [watcher].into_iter().collect();
//!
//! let state = GameState::new(cards, alice.clone())
//!     .with_board(alice.clone(), Board::default().with_permanent(Permanent::new("w1", "Watcher", alice)))
//!     .with_board(bob.clone(), Board::default());
//!
//! let event = GameEvent::dies(ObjectId::new("x9"), "Grizzly Bears", bob);
//! let found = TriggerCollector::find_triggers(&event, &state);
//! assert_eq!(found.len(), 1);
//! assert!(found[0].is_active_player);
//! ```

mod collector;
mod condition;
mod event;

pub use collector::{PendingTrigger, TriggerCollector};
pub use condition::{ConditionEvaluator, TriggerCondition, TriggerScope};
pub use event::{GameEvent, TriggerEvent};
