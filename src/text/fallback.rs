//! Structured-field fallback.
//!
//! Explicit fields on a card or ability always win. Text-derived values
//! only fill what was left empty.

use crate::cards::{CardDef, TriggeredAbility};
use crate::effects::{EffectList, TargetKind};
use crate::triggers::TriggerCondition;

use super::classifier::classify;

/// Fill a card's empty spell fields, and synthesize a triggered ability
/// when the card lists none but its text describes one.
pub fn fill_card_from_text(card: &mut CardDef) {
    if card.text.is_empty() {
        return;
    }
    let parsed = classify(&card.text);

    if card.spell_effects.is_empty() && !parsed.effects.is_empty() {
        card.spell_effects = parsed.effects.clone();
        if card.spell_target == TargetKind::None {
            if let Some(first) = card.spell_effects.first() {
                card.spell_target = first.target;
            }
        }
    }

    if card.triggered_abilities.is_empty() {
        if let Some(trigger) = parsed.trigger {
            card.triggered_abilities.push(TriggeredAbility {
                trigger,
                effects: parsed.effects,
                is_may: parsed.is_may,
                text: card.text.clone(),
            });
        }
    }
}

/// A triggered ability as written, before its text is consulted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AbilityDraft {
    pub trigger: Option<TriggerCondition>,
    pub effects: EffectList,
    pub is_may: bool,
    pub text: String,
}

impl AbilityDraft {
    /// Merge in what the text says. Returns `None` when neither the draft
    /// nor its text names a trigger.
    #[must_use]
    pub fn complete(mut self) -> Option<TriggeredAbility> {
        if !self.text.is_empty() {
            let parsed = classify(&self.text);
            if self.effects.is_empty() {
                self.effects = parsed.effects;
            }
            if self.trigger.is_none() {
                self.trigger = parsed.trigger;
            }
            self.is_may |= parsed.is_may;
        }

        Some(TriggeredAbility {
            trigger: self.trigger?,
            effects: self.effects,
            is_may: self.is_may,
            text: self.text,
        })
    }
}
