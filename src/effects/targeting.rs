//! Target kinds and player selection.
//!
//! `TargetKind` says what an effect is aimed at. Explicit targets (a
//! permanent id, a player, a stack item) come from the stack item; when
//! an effect aims at players without naming one, `PlayerSelection` picks
//! them from the board order.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// What an effect is aimed at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TargetKind {
    #[default]
    None,
    AnyTarget,
    Creature,
    Player,
    Opponent,
    EachOpponent,
    Controller,
    Permanent,
    Spell,
}

/// A rule for picking players when no explicit player target exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerSelection {
    /// The item's controller.
    Controller,
    /// The first non-controller in board order.
    FirstOpponent,
    /// Every non-controller, in board order.
    EachOpponent,
    /// No one.
    Nobody,
}

impl PlayerSelection {
    /// Life loss hits every opponent for `EACH_OPPONENT`, otherwise
    /// exactly the first one.
    #[must_use]
    pub const fn for_life_loss(target: TargetKind) -> Self {
        match target {
            TargetKind::EachOpponent => Self::EachOpponent,
            _ => Self::FirstOpponent,
        }
    }

    /// Damage without an explicit target only lands when the target
    /// kind itself names the opponents.
    #[must_use]
    pub const fn for_untargeted_damage(target: TargetKind) -> Self {
        match target {
            TargetKind::EachOpponent => Self::EachOpponent,
            TargetKind::Opponent => Self::FirstOpponent,
            _ => Self::Nobody,
        }
    }

    /// Apply the rule to `players`, which must be in board order.
    pub fn select<'a>(
        self,
        controller: &PlayerId,
        players: impl IntoIterator<Item = &'a PlayerId>,
    ) -> Vec<PlayerId> {
        let mut opponents = players.into_iter().filter(|p| *p != controller);
        match self {
            Self::Controller => vec![controller.clone()],
            Self::FirstOpponent => opponents.next().cloned().into_iter().collect(),
            Self::EachOpponent => opponents.cloned().collect(),
            Self::Nobody => Vec::new(),
        }
    }
}
