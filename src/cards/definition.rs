//! Card definitions - static card data.
//!
//! `CardDef` holds the immutable blueprint of a card: its stats,
//! keywords, rules text, and the structured effects and triggered
//! abilities the engine resolves. It is built once at load time and only
//! read afterwards.
//!
//! Per-game data (damage marked, modifiers, tapped) lives on the
//! `Permanent`.

use serde::{Deserialize, Serialize};

use crate::effects::{Effect, EffectList, TargetKind};
use crate::triggers::TriggerCondition;

/// A keyword ability.
///
/// The engine gives rules meaning to the first four; the rest are kept so
/// that documents round-trip and reports can show them.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Keyword {
    Deathtouch,
    Hexproof,
    Indestructible,
    Shroud,
    Flying,
    Trample,
    Haste,
    Vigilance,
    Lifelink,
    Reach,
    FirstStrike,
    DoubleStrike,
    Defender,
    Flash,
    Menace,
    /// Anything else, stored uppercased.
    Other(String),
}

impl Keyword {
    /// Parse a keyword, ignoring case. Spaces and underscores are
    /// interchangeable ("first strike" == "FIRST_STRIKE").
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_uppercase().replace(' ', "_");
        match normalized.as_str() {
            "DEATHTOUCH" => Self::Deathtouch,
            "HEXPROOF" => Self::Hexproof,
            "INDESTRUCTIBLE" => Self::Indestructible,
            "SHROUD" => Self::Shroud,
            "FLYING" => Self::Flying,
            "TRAMPLE" => Self::Trample,
            "HASTE" => Self::Haste,
            "VIGILANCE" => Self::Vigilance,
            "LIFELINK" => Self::Lifelink,
            "REACH" => Self::Reach,
            "FIRST_STRIKE" => Self::FirstStrike,
            "DOUBLE_STRIKE" => Self::DoubleStrike,
            "DEFENDER" => Self::Defender,
            "FLASH" => Self::Flash,
            "MENACE" => Self::Menace,
            _ => Self::Other(normalized),
        }
    }

    /// Canonical uppercase spelling.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Deathtouch => "DEATHTOUCH",
            Self::Hexproof => "HEXPROOF",
            Self::Indestructible => "INDESTRUCTIBLE",
            Self::Shroud => "SHROUD",
            Self::Flying => "FLYING",
            Self::Trample => "TRAMPLE",
            Self::Haste => "HASTE",
            Self::Vigilance => "VIGILANCE",
            Self::Lifelink => "LIFELINK",
            Self::Reach => "REACH",
            Self::FirstStrike => "FIRST_STRIKE",
            Self::DoubleStrike => "DOUBLE_STRIKE",
            Self::Defender => "DEFENDER",
            Self::Flash => "FLASH",
            Self::Menace => "MENACE",
            Self::Other(name) => name,
        }
    }
}

impl From<String> for Keyword {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<Keyword> for String {
    fn from(keyword: Keyword) -> Self {
        keyword.as_str().to_string()
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A triggered ability printed on a card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggeredAbility {
    pub trigger: TriggerCondition,
    pub effects: EffectList,
    /// "You may ..." abilities. The engine always takes the option.
    pub is_may: bool,
    /// Rules text of this ability, if any.
    pub text: String,
}

impl TriggeredAbility {
    /// Create an ability with no effects yet.
    #[must_use]
    pub fn new(trigger: TriggerCondition) -> Self {
        Self {
            trigger,
            effects: EffectList::new(),
            is_may: false,
            text: String::new(),
        }
    }

    /// Add an effect (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Set the rules text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Mark as optional.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.is_may = true;
        self
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use ccg_stack::cards::{CardDef, Keyword};
/// use ccg_stack::effects::{Effect, TargetKind};
///
/// let bolt = CardDef::new("Lightning Bolt")
///     .with_type("INSTANT")
///     .with_spell_effect(Effect::deal_damage(3, TargetKind::AnyTarget));
///
/// assert_eq!(bolt.spell_target, TargetKind::AnyTarget);
/// assert!(!bolt.has_keyword(&Keyword::Deathtouch));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDef {
    pub name: String,
    pub text: String,
    pub types: Vec<String>,
    pub subtypes: Vec<String>,
    pub keywords: Vec<Keyword>,
    pub power: i64,
    pub toughness: i64,

    /// What the spell as a whole targets.
    pub spell_target: TargetKind,

    /// Effects applied when this card resolves as a spell.
    pub spell_effects: EffectList,

    pub triggered_abilities: Vec<TriggeredAbility>,
}

impl CardDef {
    /// Create a blank definition.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: String::new(),
            types: Vec::new(),
            subtypes: Vec::new(),
            keywords: Vec::new(),
            power: 0,
            toughness: 0,
            spell_target: TargetKind::None,
            spell_effects: EffectList::new(),
            triggered_abilities: Vec::new(),
        }
    }

    /// Set rules text (builder pattern).
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Add a card type.
    #[must_use]
    pub fn with_type(mut self, card_type: impl Into<String>) -> Self {
        self.types.push(card_type.into());
        self
    }

    /// Add a keyword.
    #[must_use]
    pub fn with_keyword(mut self, keyword: Keyword) -> Self {
        self.keywords.push(keyword);
        self
    }

    /// Set power and toughness.
    #[must_use]
    pub fn with_stats(mut self, power: i64, toughness: i64) -> Self {
        self.power = power;
        self.toughness = toughness;
        self
    }

    /// Add a spell effect. The first effect also sets the spell's target
    /// kind when none was declared.
    #[must_use]
    pub fn with_spell_effect(mut self, effect: Effect) -> Self {
        if self.spell_target == TargetKind::None {
            self.spell_target = effect.target;
        }
        self.spell_effects.push(effect);
        self
    }

    /// Add a triggered ability.
    #[must_use]
    pub fn with_triggered_ability(mut self, ability: TriggeredAbility) -> Self {
        self.triggered_abilities.push(ability);
        self
    }

    /// Check for a keyword.
    #[must_use]
    pub fn has_keyword(&self, keyword: &Keyword) -> bool {
        self.keywords.contains(keyword)
    }

    /// Check for a card type, ignoring case.
    #[must_use]
    pub fn is_type(&self, card_type: &str) -> bool {
        self.types.iter().any(|t| t.eq_ignore_ascii_case(card_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::EffectKind;
    use crate::triggers::{TriggerEvent, TriggerScope};

    #[test]
    fn test_keyword_parse_is_case_insensitive() {
        assert_eq!(Keyword::parse("deathtouch"), Keyword::Deathtouch);
        assert_eq!(Keyword::parse("Hexproof"), Keyword::Hexproof);
        assert_eq!(Keyword::parse("first strike"), Keyword::FirstStrike);
        assert_eq!(
            Keyword::parse("ward"),
            Keyword::Other("WARD".to_string())
        );
    }

    #[test]
    fn test_keyword_serde_round_trip() {
        let keywords: Vec<Keyword> =
            serde_json::from_str(r#"["indestructible", "SHROUD", "Prowess"]"#).unwrap();
        assert_eq!(
            keywords,
            vec![
                Keyword::Indestructible,
                Keyword::Shroud,
                Keyword::Other("PROWESS".to_string())
            ]
        );
        let json = serde_json::to_string(&keywords).unwrap();
        assert_eq!(json, r#"["INDESTRUCTIBLE","SHROUD","PROWESS"]"#);
    }

    #[test]
    fn test_card_def_builder() {
        let card = CardDef::new("Typhoid Rats")
            .with_type("Creature")
            .with_stats(1, 1)
            .with_keyword(Keyword::Deathtouch);

        assert!(card.is_type("CREATURE"));
        assert!(card.has_keyword(&Keyword::Deathtouch));
        assert!(!card.has_keyword(&Keyword::Indestructible));
        assert_eq!((card.power, card.toughness), (1, 1));
    }

    #[test]
    fn test_spell_target_follows_first_effect() {
        let card = CardDef::new("Charm")
            .with_spell_effect(Effect::destroy(TargetKind::Creature))
            .with_spell_effect(Effect::draw(1));

        assert_eq!(card.spell_target, TargetKind::Creature);
        assert_eq!(card.spell_effects.len(), 2);
        assert_eq!(card.spell_effects[1].kind, EffectKind::DrawCards);
    }

    #[test]
    fn test_triggered_ability_builder() {
        let ability = TriggeredAbility::new(TriggerCondition::new(
            TriggerEvent::Dies,
            TriggerScope::AnyCreature,
        ))
        .with_effect(Effect::draw(1))
        .with_text("Whenever a creature dies, you may draw a card.")
        .optional();

        assert!(ability.is_may);
        assert_eq!(ability.effects.len(), 1);
        assert!(ability.text.starts_with("Whenever"));
    }
}
