//! Effect resolution - applying effects to game state.
//!
//! `EffectResolver` applies one effect of one stack item at a time. Each
//! effect commits on its own: a later effect that finds nothing to do
//! never undoes an earlier one. Destruction goes through one path,
//! `destroy`, so the indestructible check and the `DIES` event can't be
//! skipped.

use crate::cards::Keyword;
use crate::core::{GameState, ObjectId, PlayerId};
use crate::stack::StackItem;
use crate::triggers::GameEvent;

use super::effect::{Effect, EffectKind};
use super::targeting::PlayerSelection;

/// What one stack item is resolving with.
pub struct ResolverContext<'a> {
    pub item: &'a StackItem,
}

impl<'a> ResolverContext<'a> {
    /// Create a context for `item`.
    #[must_use]
    pub fn new(item: &'a StackItem) -> Self {
        Self { item }
    }

    fn source(&self) -> &'a str {
        &self.item.source_name
    }

    fn controller(&self) -> &'a PlayerId {
        &self.item.controller
    }
}

/// Everything one stack item did while resolving.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EffectLog {
    /// Description sentences.
    pub notes: Vec<String>,
    pub events: Vec<GameEvent>,
    pub destroyed: Vec<ObjectId>,
    pub draws: Vec<(PlayerId, i64)>,
}

impl EffectLog {
    /// Add a sentence.
    pub fn note(&mut self, sentence: impl Into<String>) {
        self.notes.push(sentence.into());
    }

    /// All sentences joined with spaces.
    #[must_use]
    pub fn description(&self) -> String {
        self.notes.join(" ")
    }
}

/// Result of resolving an effect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolveResult {
    /// State changed (or was deliberately left alone, e.g. indestructible).
    Applied,
    /// Nothing valid to do; the string says why.
    NoOp(String),
}

/// Resolves effects on game state.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve effects in order. No-op reasons are added to the log.
    pub fn resolve_all<'e>(
        state: &mut GameState,
        ctx: &ResolverContext,
        effects: impl IntoIterator<Item = &'e Effect>,
        log: &mut EffectLog,
    ) -> Vec<ResolveResult> {
        effects
            .into_iter()
            .map(|effect| {
                let result = Self::resolve_single(state, ctx, effect, log);
                if let ResolveResult::NoOp(reason) = &result {
                    log.note(reason.clone());
                }
                result
            })
            .collect()
    }

    /// Resolve a single effect.
    pub fn resolve_single(
        state: &mut GameState,
        ctx: &ResolverContext,
        effect: &Effect,
        log: &mut EffectLog,
    ) -> ResolveResult {
        let amount = effect.value;

        match effect.kind {
            EffectKind::DealDamage => Self::deal_damage(state, ctx, effect, log),

            EffectKind::GainLife => {
                let player = ctx.controller();
                match state.boards.get_mut(player) {
                    Some(board) => {
                        board.life = board.life.saturating_add(amount);
                        log.note(format!("{} gains {} life.", player, amount));
                        ResolveResult::Applied
                    }
                    None => ResolveResult::NoOp(format!("{} has no board.", player)),
                }
            }

            EffectKind::LoseLife => {
                let victims = PlayerSelection::for_life_loss(effect.target)
                    .select(ctx.controller(), state.players());
                if victims.is_empty() {
                    return ResolveResult::NoOp(format!(
                        "{} finds no opponent to lose life.",
                        ctx.source()
                    ));
                }
                for player in victims {
                    if let Some(board) = state.boards.get_mut(&player) {
                        board.life = board.life.saturating_sub(amount);
                        log.note(format!("{} loses {} life.", player, amount));
                    }
                }
                ResolveResult::Applied
            }

            EffectKind::DrawCards => {
                log.draws.push((ctx.controller().clone(), amount));
                log.note(format!("{} draws {} card(s).", ctx.controller(), amount));
                ResolveResult::Applied
            }

            EffectKind::Counterspell => {
                let countered = ctx
                    .item
                    .target_stack_id
                    .as_ref()
                    .and_then(|id| state.stack.remove(id));
                match countered {
                    Some(spell) => {
                        log.note(format!("{} counters {}.", ctx.source(), spell.source_name));
                        ResolveResult::Applied
                    }
                    None => ResolveResult::NoOp(format!("{} has nothing to counter.", ctx.source())),
                }
            }

            EffectKind::Destroy => {
                let (id, name) = match Self::target_permanent(state, ctx) {
                    Ok(found) => found,
                    Err(reason) => return ResolveResult::NoOp(reason),
                };
                if Self::destroy(state, &id, log) {
                    log.note(format!("{} destroys {}.", ctx.source(), name));
                }
                ResolveResult::Applied
            }

            EffectKind::AddCounters | EffectKind::RemoveCounters => {
                let delta = if effect.kind == EffectKind::AddCounters {
                    amount
                } else {
                    amount.saturating_neg()
                };
                Self::modify(state, ctx, effect.kind, log, delta, delta)
            }

            EffectKind::ChangePower => Self::modify(state, ctx, effect.kind, log, amount, 0),

            EffectKind::ChangeToughness => Self::modify(state, ctx, effect.kind, log, 0, amount),

            EffectKind::Tap | EffectKind::Untap => {
                let (id, name) = match Self::target_permanent(state, ctx) {
                    Ok(found) => found,
                    Err(reason) => return ResolveResult::NoOp(reason),
                };
                let tapped = effect.kind == EffectKind::Tap;
                if let Some(permanent) = state.find_permanent_mut(&id) {
                    permanent.tapped = tapped;
                }
                log.note(format!(
                    "{} becomes {}.",
                    name,
                    if tapped { "tapped" } else { "untapped" }
                ));
                ResolveResult::Applied
            }

            EffectKind::Bounce => {
                let (id, name) = match Self::target_permanent(state, ctx) {
                    Ok(found) => found,
                    Err(reason) => return ResolveResult::NoOp(reason),
                };
                state.remove_permanent(&id);
                log.note(format!("{} returns to its owner's hand.", name));
                ResolveResult::Applied
            }

            EffectKind::Discard
            | EffectKind::Sacrifice
            | EffectKind::Exile
            | EffectKind::CreateToken
            | EffectKind::SearchLand
            | EffectKind::Mill => ResolveResult::NoOp(format!("{} resolves.", ctx.source())),
        }
    }

    /// Remove a permanent as destroyed, unless it is indestructible.
    ///
    /// Returns `true` if it was removed. Emits `DIES` and records the id.
    pub fn destroy(state: &mut GameState, id: &ObjectId, log: &mut EffectLog) -> bool {
        let Some(permanent) = state.find_permanent(id) else {
            return false;
        };
        if state.has_keyword(permanent, &Keyword::Indestructible) {
            return false;
        }
        let Some(permanent) = state.remove_permanent(id) else {
            return false;
        };

        log.events.push(GameEvent::dies(
            permanent.id.clone(),
            permanent.card_name,
            permanent.controller,
        ));
        log.destroyed.push(permanent.id);
        true
    }

    // === Helpers ===

    /// The item's permanent target, as (id, card name).
    fn target_permanent(
        state: &GameState,
        ctx: &ResolverContext,
    ) -> Result<(ObjectId, String), String> {
        let Some(id) = &ctx.item.target_id else {
            return Err(format!("{} has no target.", ctx.source()));
        };
        state
            .find_permanent(id)
            .map(|p| (p.id.clone(), p.card_name.clone()))
            .ok_or_else(|| format!("{}'s target is gone.", ctx.source()))
    }

    fn deal_damage(
        state: &mut GameState,
        ctx: &ResolverContext,
        effect: &Effect,
        log: &mut EffectLog,
    ) -> ResolveResult {
        let amount = effect.value;

        if let Some(player) = &ctx.item.target_player {
            return match state.boards.get_mut(player) {
                Some(board) => {
                    board.life = board.life.saturating_sub(amount);
                    log.note(format!("{} deals {} damage to {}.", ctx.source(), amount, player));
                    ResolveResult::Applied
                }
                None => ResolveResult::NoOp(format!("{} is not in the game.", player)),
            };
        }

        if ctx.item.target_id.is_some() {
            let (id, name) = match Self::target_permanent(state, ctx) {
                Ok(found) => found,
                Err(reason) => return ResolveResult::NoOp(reason),
            };
            let deathtouch = state.cards.has_keyword(ctx.source(), &Keyword::Deathtouch);

            let Some(permanent) = state.find_permanent_mut(&id) else {
                return ResolveResult::NoOp(format!("{}'s target is gone.", ctx.source()));
            };
            permanent.damage = permanent.damage.saturating_add(amount);
            let damage = permanent.damage;
            log.note(format!("{} deals {} damage to {}.", ctx.source(), amount, name));

            let lethal = state
                .find_permanent(&id)
                .is_some_and(|p| damage >= state.effective_toughness(p));
            if (lethal || (deathtouch && amount > 0)) && Self::destroy(state, &id, log) {
                log.note(format!("{} is destroyed by lethal damage.", name));
            }
            return ResolveResult::Applied;
        }

        let victims = PlayerSelection::for_untargeted_damage(effect.target)
            .select(ctx.controller(), state.players());
        if victims.is_empty() {
            return ResolveResult::NoOp(format!("{} has no target.", ctx.source()));
        }
        for player in victims {
            if let Some(board) = state.boards.get_mut(&player) {
                board.life = board.life.saturating_sub(amount);
                log.note(format!("{} deals {} damage to {}.", ctx.source(), amount, player));
            }
        }
        ResolveResult::Applied
    }

    /// Adjust power/toughness modifiers. Toughness-affecting kinds then
    /// destroy the permanent if its toughness is zero or below.
    fn modify(
        state: &mut GameState,
        ctx: &ResolverContext,
        kind: EffectKind,
        log: &mut EffectLog,
        power: i64,
        toughness: i64,
    ) -> ResolveResult {
        let (id, name) = match Self::target_permanent(state, ctx) {
            Ok(found) => found,
            Err(reason) => return ResolveResult::NoOp(reason),
        };
        if let Some(permanent) = state.find_permanent_mut(&id) {
            permanent.power_mod = permanent.power_mod.saturating_add(power);
            permanent.toughness_mod = permanent.toughness_mod.saturating_add(toughness);
        }
        log.note(format!("{} gets {:+}/{:+}.", name, power, toughness));

        if matches!(kind, EffectKind::ChangeToughness | EffectKind::RemoveCounters) {
            let dead = state
                .find_permanent(&id)
                .is_some_and(|p| state.effective_toughness(p) <= 0);
            if dead && Self::destroy(state, &id, log) {
                log.note(format!("{} is put into the graveyard (0 toughness).", name));
            }
        }
        ResolveResult::Applied
    }
}
