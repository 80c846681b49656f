//! The resolution engine.
//!
//! One `Engine` owns one `GameState` for one run. Each `step` pops the
//! top item, hands priority back to the active player, resolves the item,
//! and pushes whatever the resulting events triggered. `run` steps until
//! the stack is empty.
//!
//! There is no loop guard unless `EngineConfig::step_limit` is set: an
//! ability that retriggers itself will keep the engine busy forever.

use tracing::{debug, warn};

use crate::cards::Keyword;
use crate::core::{EngineConfig, GameState, PlayerMap};
use crate::effects::{EffectLog, EffectResolver, ResolverContext};
use crate::triggers::{GameEvent, PendingTrigger, TriggerCollector};

use super::entry::{StackItem, StackItemId, StackItemKind};
use super::trace::{ResolutionStep, ResolutionTrace};
use super::ResolutionStatus;

/// Resolves a game's stack to completion.
///
/// ```
/// use ccg_stack::cards::{CardDef, CardRegistry};
/// use ccg_stack::core::{Board, EngineConfig, GameState, PlayerId};
/// use ccg_stack::effects::{Effect, TargetKind};
/// use ccg_stack::stack::{Engine, ResolutionStatus, StackItem};
///
/// let alice = PlayerId::new("Alice");
/// let bob = PlayerId::new("Bob");
/// let cards: CardRegistry = [CardDef::new("Lava Spike")
///     .with_spell_effect(Effect::deal_damage(3, TargetKind::Player))]
///     .into_iter()
///     .collect();
///
/// let state = GameState::new(cards, alice.clone())
///     .with_board(alice.clone(), Board::default())
///     .with_board(bob.clone(), Board::default())
///     .with_stack_item(StackItem::spell("s1", "Lava Spike", alice).targeting_player(bob.clone()));
///
/// let mut engine = Engine::new(state, EngineConfig::default());
/// assert_eq!(engine.run(), ResolutionStatus::Complete);
///
/// let trace = engine.into_trace();
/// assert_eq!(trace.life_of(&bob), Some(17));
/// assert_eq!(trace.steps[0].description, "Lava Spike deals 3 damage to Bob.");
/// ```
#[derive(Debug)]
pub struct Engine {
    state: GameState,
    config: EngineConfig,
    trace: ResolutionTrace,

    /// Triggers put on the stack so far; names the next `trig_N`.
    triggers_pushed: u32,

    priority_checked: bool,
    halted: bool,
}

impl Engine {
    /// Create an engine for one run.
    #[must_use]
    pub fn new(state: GameState, config: EngineConfig) -> Self {
        Self {
            state,
            config,
            trace: ResolutionTrace::default(),
            triggers_pushed: 0,
            priority_checked: false,
            halted: false,
        }
    }

    /// Current game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Trace so far.
    #[must_use]
    pub fn trace(&self) -> &ResolutionTrace {
        &self.trace
    }

    /// Finish and take the trace.
    #[must_use]
    pub fn into_trace(self) -> ResolutionTrace {
        self.trace
    }

    /// Finish and take both the final state and the trace.
    #[must_use]
    pub fn into_parts(self) -> (GameState, ResolutionTrace) {
        (self.state, self.trace)
    }

    /// Step until the stack is empty or the step limit stops the run.
    pub fn run(&mut self) -> ResolutionStatus {
        loop {
            match self.step() {
                ResolutionStatus::Processing => continue,
                status => return status,
            }
        }
    }

    /// Resolve the top stack item.
    pub fn step(&mut self) -> ResolutionStatus {
        if !self.priority_checked {
            self.check_priority();
        }
        if self.halted {
            return ResolutionStatus::Halted;
        }

        if let Some(limit) = self.config.step_limit {
            if self.trace.steps.len() >= limit && !self.state.stack.is_empty() {
                let message = format!(
                    "step limit of {} reached with {} item(s) left on the stack",
                    limit,
                    self.state.stack.len()
                );
                warn!("{}", message);
                self.trace.errors.push(message);
                self.halted = true;
                self.record_final_state();
                return ResolutionStatus::Halted;
            }
        }

        let Some(item) = self.state.stack.pop() else {
            self.record_final_state();
            return ResolutionStatus::Complete;
        };
        self.state.priority_player = self.state.active_player.clone();
        debug!(id = %item.id, kind = ?item.kind, "resolving {}", item.source_name);

        let mut log = EffectLog::default();
        match item.kind {
            StackItemKind::Spell => self.resolve_spell(&item, &mut log),
            StackItemKind::TriggeredAbility => self.resolve_triggered(&item, &mut log),
        }

        let new_triggers = self.push_triggers(&log.events);

        for (player, count) in &log.draws {
            let drawn = self.trace.cards_drawn.entry_or_default(player);
            *drawn = drawn.saturating_add(*count);
        }
        self.trace.destroyed.extend(log.destroyed.iter().cloned());
        self.trace.steps.push(ResolutionStep {
            description: log.description(),
            item_id: item.id,
            kind: item.kind,
            source_name: item.source_name,
            events: log.events,
            new_triggers,
        });

        if self.state.stack.is_empty() {
            self.record_final_state();
            ResolutionStatus::Complete
        } else {
            ResolutionStatus::Processing
        }
    }

    // === Resolution ===

    fn resolve_spell(&mut self, item: &StackItem, log: &mut EffectLog) {
        let Some(effects) = self
            .state
            .cards
            .get(&item.source_name)
            .map(|card| card.spell_effects.clone())
        else {
            log.note(format!("Unknown spell: {}", item.source_name));
            return;
        };

        if let Some(reason) = self.fizzle_reason(item) {
            log.note(reason);
            return;
        }

        if effects.is_empty() {
            log.note(format!("{} resolves.", item.source_name));
            return;
        }
        EffectResolver::resolve_all(&mut self.state, &ResolverContext::new(item), &effects, log);
    }

    fn resolve_triggered(&mut self, item: &StackItem, log: &mut EffectLog) {
        log.note(format!("{}'s trigger:", item.source_name));

        let ability = self
            .state
            .cards
            .get(&item.source_name)
            .and_then(|card| card.triggered_abilities.get(item.ability_index));
        let Some(effects) = ability.map(|a| a.effects.clone()) else {
            log.note(format!(
                "no ability #{} found on {}.",
                item.ability_index, item.source_name
            ));
            return;
        };

        EffectResolver::resolve_all(&mut self.state, &ResolverContext::new(item), &effects, log);
    }

    /// Why a spell can't resolve, if it can't.
    fn fizzle_reason(&self, item: &StackItem) -> Option<String> {
        if let Some(id) = &item.target_id {
            let Some(target) = self.state.find_permanent(id) else {
                return Some(format!(
                    "{} fizzles - target no longer exists.",
                    item.source_name
                ));
            };
            if self.state.has_keyword(target, &Keyword::Hexproof) && target.controller != item.controller
            {
                return Some(format!(
                    "{} fizzles - {} has hexproof.",
                    item.source_name, target.card_name
                ));
            }
            if self.state.has_keyword(target, &Keyword::Shroud) {
                return Some(format!(
                    "{} fizzles - {} has shroud.",
                    item.source_name, target.card_name
                ));
            }
        }

        if let Some(stack_id) = &item.target_stack_id {
            if !self.state.stack.contains(stack_id) {
                return Some(format!(
                    "{} fizzles - targeted spell is gone.",
                    item.source_name
                ));
            }
        }

        None
    }

    // === Triggers ===

    /// Collect, order, and push everything `events` triggered.
    fn push_triggers(&mut self, events: &[GameEvent]) -> Vec<PendingTrigger> {
        let mut pending = Vec::new();
        for event in events {
            if self.config.debug {
                debug!(%event, "event emitted");
            }
            pending.extend(TriggerCollector::find_triggers(event, &self.state));
        }

        let ordered = TriggerCollector::order_apnap(pending);
        for trigger in &ordered {
            self.triggers_pushed += 1;
            let id = StackItemId::trigger(self.triggers_pushed);
            if self.config.debug {
                debug!(
                    %id,
                    controller = %trigger.controller,
                    active = trigger.is_active_player,
                    "pushing trigger of {}",
                    trigger.source_name
                );
            }
            self.state.stack.push(StackItem::triggered(
                id,
                trigger.source_name.clone(),
                trigger.source_id.clone(),
                trigger.ability_index,
                trigger.controller.clone(),
            ));
        }
        ordered
    }

    // === Bookkeeping ===

    /// The most recent spell must have been cast by the priority player.
    fn check_priority(&mut self) {
        self.priority_checked = true;
        let Some(top) = self.state.stack.top() else {
            return;
        };
        if top.kind == StackItemKind::Spell && top.controller != self.state.priority_player {
            let message = format!(
                "PRIORITY ERROR: {} cannot cast {} - priority belongs to {}",
                top.controller, top.source_name, self.state.priority_player
            );
            warn!("{}", message);
            self.trace.errors.push(message);
        }
    }

    fn record_final_state(&mut self) {
        self.trace.final_life = life_totals(&self.state);
    }
}

/// Resolve `state` to completion and return the trace.
#[must_use]
pub fn resolve(state: GameState, config: EngineConfig) -> ResolutionTrace {
    let mut engine = Engine::new(state, config);
    engine.run();
    engine.into_trace()
}

/// Life totals of every board, in board order.
#[must_use]
pub fn life_totals(state: &GameState) -> PlayerMap<i64> {
    state.boards.map_values(|board| board.life)
}
