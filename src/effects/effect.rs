//! Effect definitions.
//!
//! An `Effect` is a (kind, magnitude, target kind) triple. Spells carry a
//! list of them, triggered abilities carry a list of them, and the
//! resolver applies each one in order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::targeting::TargetKind;

/// The closed set of effect kinds.
///
/// Not every kind has something to act on in this engine: kinds that need
/// a library, hand, or graveyard resolve as a described no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectKind {
    // === Players ===
    DealDamage,
    GainLife,
    LoseLife,
    DrawCards,
    Discard,

    // === Stack ===
    Counterspell,

    // === Permanents ===
    Destroy,
    Sacrifice,
    Exile,
    AddCounters,
    RemoveCounters,
    ChangePower,
    ChangeToughness,
    Tap,
    Untap,
    Bounce,

    // === Zones without a model ===
    CreateToken,
    SearchLand,
    Mill,
}

impl EffectKind {
    /// The document spelling of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DealDamage => "DEAL_DAMAGE",
            Self::GainLife => "GAIN_LIFE",
            Self::LoseLife => "LOSE_LIFE",
            Self::DrawCards => "DRAW_CARDS",
            Self::Discard => "DISCARD",
            Self::Counterspell => "COUNTERSPELL",
            Self::Destroy => "DESTROY",
            Self::Sacrifice => "SACRIFICE",
            Self::Exile => "EXILE",
            Self::AddCounters => "ADD_COUNTERS",
            Self::RemoveCounters => "REMOVE_COUNTERS",
            Self::ChangePower => "CHANGE_POWER",
            Self::ChangeToughness => "CHANGE_TOUGHNESS",
            Self::Tap => "TAP",
            Self::Untap => "UNTAP",
            Self::Bounce => "BOUNCE",
            Self::CreateToken => "CREATE_TOKEN",
            Self::SearchLand => "SEARCH_LAND",
            Self::Mill => "MILL",
        }
    }
}

impl std::fmt::Display for EffectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One atomic effect.
///
/// ```
/// use ccg_stack::effects::{Effect, EffectKind, TargetKind};
///
/// let bolt = Effect::new(EffectKind::DealDamage, 3, TargetKind::AnyTarget);
/// assert_eq!(bolt, Effect::deal_damage(3, TargetKind::AnyTarget));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Effect {
    #[serde(rename = "type")]
    pub kind: EffectKind,

    /// Magnitude: damage, life, cards, counters, or a signed delta.
    #[serde(default)]
    pub value: i64,

    #[serde(default)]
    pub target: TargetKind,
}

/// Ordered effect list. Most abilities carry one or two effects.
pub type EffectList = SmallVec<[Effect; 2]>;

impl Effect {
    /// Create an effect.
    #[must_use]
    pub const fn new(kind: EffectKind, value: i64, target: TargetKind) -> Self {
        Self {
            kind,
            value,
            target,
        }
    }

    /// Deal `amount` damage.
    #[must_use]
    pub const fn deal_damage(amount: i64, target: TargetKind) -> Self {
        Self::new(EffectKind::DealDamage, amount, target)
    }

    /// Controller gains `amount` life.
    #[must_use]
    pub const fn gain_life(amount: i64) -> Self {
        Self::new(EffectKind::GainLife, amount, TargetKind::None)
    }

    /// Opponent(s) lose `amount` life.
    #[must_use]
    pub const fn lose_life(amount: i64, target: TargetKind) -> Self {
        Self::new(EffectKind::LoseLife, amount, target)
    }

    /// Controller draws `count` cards.
    #[must_use]
    pub const fn draw(count: i64) -> Self {
        Self::new(EffectKind::DrawCards, count, TargetKind::None)
    }

    /// Counter target spell.
    #[must_use]
    pub const fn counter() -> Self {
        Self::new(EffectKind::Counterspell, 1, TargetKind::Spell)
    }

    /// Destroy target permanent.
    #[must_use]
    pub const fn destroy(target: TargetKind) -> Self {
        Self::new(EffectKind::Destroy, 1, target)
    }

    /// Return target permanent to its owner's hand.
    #[must_use]
    pub const fn bounce(target: TargetKind) -> Self {
        Self::new(EffectKind::Bounce, 1, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(Effect::gain_life(2).target, TargetKind::None);
        assert_eq!(Effect::counter().kind, EffectKind::Counterspell);
        assert_eq!(Effect::counter().target, TargetKind::Spell);
        assert_eq!(Effect::draw(1).value, 1);
    }

    #[test]
    fn test_kind_names_match_serde() {
        for kind in [
            EffectKind::DealDamage,
            EffectKind::Counterspell,
            EffectKind::ChangeToughness,
            EffectKind::SearchLand,
        ] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.name()));
        }
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let effect: Effect = serde_json::from_str(r#"{"type": "DRAW_CARDS"}"#).unwrap();
        assert_eq!(effect, Effect::new(EffectKind::DrawCards, 0, TargetKind::None));

        let effect: Effect =
            serde_json::from_str(r#"{"type": "DEAL_DAMAGE", "value": 3, "target": "ANY_TARGET"}"#)
                .unwrap();
        assert_eq!(effect, Effect::deal_damage(3, TargetKind::AnyTarget));
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let result: Result<Effect, _> = serde_json::from_str(r#"{"type": "SCRY"}"#);
        assert!(result.is_err());
    }
}
