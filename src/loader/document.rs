//! Serde shape of the game document.
//!
//! Field names are camelCase. Every object rejects unknown keys, so a
//! typo fails the load instead of being silently dropped.

use std::collections::BTreeMap;

use rustc_hash::FxHashSet;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::cards::{CardDef, CardRegistry, Keyword, Permanent};
use crate::core::{Board, EngineConfig, GameState, ObjectId, PlayerId, PlayerMap};
use crate::effects::{EffectList, TargetKind};
use crate::error::{GameError, Result};
use crate::stack::{Stack, StackItem, StackItemId, StackItemKind};
use crate::text::{fill_card_from_text, AbilityDraft};
use crate::triggers::TriggerCondition;

/// Treat `""` the same as a missing field.
fn non_empty<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: From<String>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.is_empty()).map(T::from))
}

/// A whole game document.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GameDocument {
    #[serde(default)]
    pub cards: BTreeMap<String, CardDocument>,

    #[serde(default, deserialize_with = "non_empty")]
    pub active_player: Option<PlayerId>,

    #[serde(default, deserialize_with = "non_empty")]
    pub priority_player: Option<PlayerId>,

    #[serde(default, deserialize_with = "non_empty")]
    pub current_phase: Option<String>,

    #[serde(default, rename = "turnNumber")]
    _turn_number: Option<IgnoredAny>,

    #[serde(default)]
    pub boards: PlayerMap<BoardDocument>,

    /// Bottom of the stack first.
    #[serde(default)]
    pub stack: Vec<StackItemDocument>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CardDocument {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub subtypes: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<Keyword>,
    #[serde(default)]
    pub power: i64,
    #[serde(default)]
    pub toughness: i64,
    #[serde(default)]
    pub spell_target: TargetKind,
    #[serde(default)]
    pub spell_effects: EffectList,
    #[serde(default)]
    pub triggered_abilities: Vec<AbilityDocument>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AbilityDocument {
    #[serde(default)]
    pub trigger: Option<TriggerCondition>,
    #[serde(default)]
    pub effects: EffectList,
    #[serde(default)]
    pub is_may: bool,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BoardDocument {
    /// Defaults to the configured starting life.
    #[serde(default)]
    pub life: Option<i64>,

    /// Redundant with the board's key, which wins.
    #[serde(default, rename = "player")]
    _player: Option<IgnoredAny>,

    #[serde(default)]
    pub permanents: Vec<PermanentDocument>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PermanentDocument {
    pub id: ObjectId,

    /// Card name.
    pub name: String,

    /// Defaults to the board's player.
    #[serde(default, deserialize_with = "non_empty")]
    pub controller: Option<PlayerId>,

    #[serde(default)]
    pub tapped: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StackItemDocument {
    pub id: StackItemId,
    pub kind: StackItemKind,
    pub source_name: String,
    #[serde(default, deserialize_with = "non_empty")]
    pub source_id: Option<ObjectId>,
    #[serde(default)]
    pub ability_index: usize,
    pub controller: PlayerId,
    #[serde(default, deserialize_with = "non_empty")]
    pub target_id: Option<ObjectId>,
    #[serde(default, deserialize_with = "non_empty")]
    pub target_player: Option<PlayerId>,
    #[serde(default, deserialize_with = "non_empty")]
    pub target_stack_id: Option<StackItemId>,
}

// === Conversion ===

impl GameDocument {
    /// Build the game state this document describes.
    pub fn into_state(self, config: &EngineConfig) -> Result<GameState> {
        let active = self
            .active_player
            .ok_or_else(|| GameError::InvalidDocument("missing activePlayer".to_string()))?;
        let priority = self.priority_player.unwrap_or_else(|| active.clone());

        let mut cards = CardRegistry::new();
        for (name, document) in self.cards {
            cards.register(document.into_card(name)?);
        }

        let mut seen = FxHashSet::default();
        let mut boards = PlayerMap::new();
        for (player, document) in self.boards {
            let board = document.into_board(&player, config, &mut seen)?;
            boards.insert(player, board);
        }

        let stack: Stack = self.stack.into_iter().map(StackItemDocument::into_item).collect();

        debug!(
            cards = cards.len(),
            boards = boards.player_count(),
            permanents = seen.len(),
            stack = stack.len(),
            "loaded game document"
        );

        let mut state = GameState::new(cards, active).with_priority(priority);
        state.phase = self.current_phase;
        state.boards = boards;
        state.stack = stack;
        Ok(state)
    }
}

impl CardDocument {
    fn into_card(self, name: String) -> Result<CardDef> {
        let mut triggered_abilities = Vec::with_capacity(self.triggered_abilities.len());
        for (index, ability) in self.triggered_abilities.into_iter().enumerate() {
            let draft = AbilityDraft {
                trigger: ability.trigger,
                effects: ability.effects,
                is_may: ability.is_may,
                text: ability.text,
            };
            let ability = draft.complete().ok_or_else(|| {
                GameError::InvalidDocument(format!(
                    "triggered ability #{index} of {name} has no trigger"
                ))
            })?;
            triggered_abilities.push(ability);
        }

        let mut card = CardDef {
            name,
            text: self.text,
            types: self.types,
            subtypes: self.subtypes,
            keywords: self.keywords,
            power: self.power,
            toughness: self.toughness,
            spell_target: self.spell_target,
            spell_effects: self.spell_effects,
            triggered_abilities,
        };
        fill_card_from_text(&mut card);
        Ok(card)
    }
}

impl BoardDocument {
    fn into_board(
        self,
        player: &PlayerId,
        config: &EngineConfig,
        seen: &mut FxHashSet<ObjectId>,
    ) -> Result<Board> {
        let mut board = Board::new(self.life.unwrap_or(config.starting_life));
        for permanent in self.permanents {
            if !seen.insert(permanent.id.clone()) {
                return Err(GameError::InvalidDocument(format!(
                    "duplicate permanent id {}",
                    permanent.id
                )));
            }
            let controller = permanent.controller.unwrap_or_else(|| player.clone());
            board.permanents.push_back(
                Permanent::new(permanent.id, permanent.name, controller)
                    .with_tapped(permanent.tapped),
            );
        }
        Ok(board)
    }
}

impl StackItemDocument {
    fn into_item(self) -> StackItem {
        StackItem {
            id: self.id,
            kind: self.kind,
            source_name: self.source_name,
            source_id: self.source_id,
            ability_index: self.ability_index,
            controller: self.controller,
            target_id: self.target_id,
            target_player: self.target_player,
            target_stack_id: self.target_stack_id,
        }
    }
}
