//! Rules text classifier.
//!
//! Turns free text into an optional [`TriggerCondition`], an ordered
//! effect list, and a "may" flag. It is a best-effort fallback: it never
//! fails, and unrecognized text yields nothing.
//!
//! ## Pipeline
//!
//! 1. If the text opens with WHEN / WHENEVER / AT, read a trigger clause:
//!    subject words up to the first event keyword, then the scope is
//!    inferred from the subject.
//! 2. Split the rest into clauses on separators and on AND.
//! 3. Run each clause through [`DETECTORS`] in order. The first detector
//!    whose predicate holds builds that clause's effects.

use smallvec::smallvec;
use tracing::trace;

use crate::effects::{Effect, EffectKind, EffectList, TargetKind};
use crate::triggers::{TriggerCondition, TriggerEvent, TriggerScope};

use super::tokenizer::{tokenize, Cursor, Token};
use super::words::Words;

/// Everything the classifier could read out of one text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Classification {
    pub trigger: Option<TriggerCondition>,
    pub effects: EffectList,
    pub is_may: bool,
}

// === Detectors ===

/// One (predicate, builder) pair.
struct Detector {
    name: &'static str,
    applies: fn(&Words<'_>) -> bool,
    build: fn(&Words<'_>, i64) -> EffectList,
}

/// Detector precedence. First match wins per clause.
const DETECTORS: &[Detector] = &[
    Detector {
        name: "destroy",
        applies: |w| w.has("DESTROY"),
        build: |w, _| smallvec![Effect::destroy(w.target_or(TargetKind::Creature))],
    },
    Detector {
        name: "counter",
        applies: |w| w.has("COUNTER"),
        build: |_, _| smallvec![Effect::counter()],
    },
    Detector {
        name: "return",
        applies: |w| w.has("RETURN"),
        build: |w, _| smallvec![Effect::bounce(w.target_or(TargetKind::Permanent))],
    },
    Detector {
        name: "damage",
        applies: |w| w.has_any(&["DEAL", "DEALS"]),
        build: |w, n| smallvec![Effect::deal_damage(n, w.target_or(TargetKind::AnyTarget))],
    },
    Detector {
        name: "draw",
        applies: |w| w.has("DRAW"),
        build: |_, n| smallvec![Effect::draw(n)],
    },
    Detector {
        name: "gain life",
        applies: |w| w.has("GAIN") && w.has("LIFE"),
        build: |_, n| smallvec![Effect::gain_life(n)],
    },
    Detector {
        name: "lose life",
        applies: |w| w.has_any(&["LOSE", "LOSES"]) && w.has("LIFE"),
        build: |w, n| smallvec![Effect::lose_life(n, w.target_or(TargetKind::Opponent))],
    },
    Detector {
        name: "buff",
        applies: |w| w.buff().is_some(),
        build: |w, _| w.buff().map(buff_effects).unwrap_or_default(),
    },
    Detector {
        name: "search land",
        applies: |w| w.has("SEARCH") && w.has("LAND"),
        build: |_, _| smallvec![Effect::new(EffectKind::SearchLand, 1, TargetKind::None)],
    },
];

/// Effects for a `±N/±M` buff. A symmetric shrink whose magnitude does
/// not fit in an `i64` yields nothing.
fn buff_effects((power, toughness): (i64, i64)) -> EffectList {
    if power == toughness {
        if power >= 0 {
            return smallvec![Effect::new(EffectKind::AddCounters, power, TargetKind::Creature)];
        }
        return power
            .checked_neg()
            .map(|n| smallvec![Effect::new(EffectKind::RemoveCounters, n, TargetKind::Creature)])
            .unwrap_or_default();
    }

    let mut effects = EffectList::new();
    if power != 0 {
        effects.push(Effect::new(EffectKind::ChangePower, power, TargetKind::Creature));
    }
    if toughness != 0 {
        effects.push(Effect::new(EffectKind::ChangeToughness, toughness, TargetKind::Creature));
    }
    effects
}

/// Classify a single clause. Magnitude is the clause's first number,
/// defaulting to 1.
#[must_use]
pub fn classify_clause(words: &Words<'_>) -> EffectList {
    if words.is_empty() {
        return EffectList::new();
    }
    let value = words.first_number().unwrap_or(1);

    match DETECTORS.iter().find(|detector| (detector.applies)(words)) {
        Some(detector) => {
            trace!(detector = detector.name, "clause matched");
            (detector.build)(words, value)
        }
        None => EffectList::new(),
    }
}

// === Trigger clause ===

const OPENERS: &[&str] = &["WHEN", "WHENEVER", "AT"];
const DETERMINERS: &[&str] = &["YOUR", "EACH", "THE"];

/// Map an event word to its event, consuming required continuations.
fn event_from(word: &str, cursor: &mut Cursor<'_>) -> Option<TriggerEvent> {
    match word {
        "ENTERS" | "ENTER" | "ETB" | "ETBS" => {
            if !cursor.eat_sequence(&["THE", "BATTLEFIELD"]) {
                cursor.eat("BATTLEFIELD");
            }
            Some(TriggerEvent::EntersBattlefield)
        }
        "DIES" | "DIE" => Some(TriggerEvent::Dies),
        "ATTACKS" | "ATTACK" => Some(TriggerEvent::Attacks),
        "BLOCKS" | "BLOCK" => Some(TriggerEvent::Blocks),
        "CASTS" | "CAST" => Some(TriggerEvent::SpellCast),
        "DEALS" => {
            if cursor.eat("COMBAT") {
                cursor.eat("DAMAGE");
                Some(TriggerEvent::DealsCombatDamage)
            } else {
                cursor.eat("DAMAGE");
                Some(TriggerEvent::DealsDamage)
            }
        }
        "BECOMES" => {
            cursor.eat("THE");
            cursor.eat("TARGET").then_some(TriggerEvent::BecomesTarget)
        }
        "BEGINNING" => {
            cursor.eat("OF");
            cursor.eat_any(DETERMINERS);
            cursor.eat("UPKEEP").then_some(TriggerEvent::BeginningOfUpkeep)
        }
        "END" => {
            cursor.eat("OF");
            cursor.eat_any(DETERMINERS);
            cursor.eat_any(&["TURN", "STEP"]).then_some(TriggerEvent::EndOfTurn)
        }
        _ => None,
    }
}

/// Scope from the words between the opener and the event.
fn scope_of(subject: &Words<'_>) -> TriggerScope {
    if subject.has("THIS") && !subject.has("ANOTHER") {
        return TriggerScope::Self_;
    }
    let creature = subject.has("CREATURE");
    if creature && subject.has("ANOTHER") {
        TriggerScope::AnotherCreature
    } else if creature && subject.has("YOU") && subject.has_any(&["CONTROL", "CONTROLS"]) {
        TriggerScope::CreatureYouControl
    } else if creature && subject.has("OPPONENT") {
        TriggerScope::CreatureOpponentControls
    } else if creature {
        TriggerScope::AnyCreature
    } else if subject.has_any(&["PLAYER", "OPPONENT"]) {
        TriggerScope::AnyPlayer
    } else {
        TriggerScope::Self_
    }
}

/// Read the trigger clause after the opener. Stops at the first event
/// keyword or separator; a separator ends the clause with no trigger.
fn trigger_clause(cursor: &mut Cursor<'_>) -> Option<TriggerCondition> {
    let mut subject = Vec::new();
    while let Some(token) = cursor.advance() {
        if *token == Token::Separator {
            return None;
        }
        if let Some(event) = token.as_word().and_then(|word| event_from(word, cursor)) {
            return Some(TriggerCondition::new(event, scope_of(&Words::new(&subject))));
        }
        subject.push(token.clone());
    }
    None
}

/// Next effect clause: its first token always, then up to a separator
/// or AND, which is consumed.
fn next_clause<'a>(cursor: &mut Cursor<'a>) -> Option<&'a [Token]> {
    while cursor.at_separator() {
        cursor.advance();
    }
    let start = cursor.position();
    cursor.advance()?;
    while !cursor.at_end() && !cursor.at_separator() {
        if cursor.peek().is_some_and(|t| t.is_word("AND")) {
            break;
        }
        cursor.advance();
    }
    let clause = cursor.since(start);
    cursor.advance();
    Some(clause)
}

/// Classify rules text.
///
/// ```
/// use ccg_stack::effects::{Effect, EffectKind};
/// use ccg_stack::text::classify;
/// use ccg_stack::triggers::{TriggerEvent, TriggerScope};
///
/// let parsed = classify("Whenever this creature attacks, you gain 1 life.");
/// let trigger = parsed.trigger.unwrap();
/// assert_eq!(trigger.event, TriggerEvent::Attacks);
/// assert_eq!(trigger.scope, TriggerScope::Self_);
/// assert_eq!(parsed.effects.as_slice(), &[Effect::gain_life(1)]);
/// assert!(!parsed.is_may);
/// ```
#[must_use]
pub fn classify(text: &str) -> Classification {
    let is_may = text.to_lowercase().contains("may");
    let tokens = tokenize(text);
    let mut cursor = Cursor::new(&tokens);

    let mut trigger = None;
    if cursor.peek().is_some_and(|t| OPENERS.iter().any(|w| t.is_word(w))) {
        cursor.advance();
        trigger = trigger_clause(&mut cursor);
        if cursor.at_separator() {
            cursor.advance();
        }
    }

    let mut effects = EffectList::new();
    while let Some(clause) = next_clause(&mut cursor) {
        effects.extend(classify_clause(&Words::new(clause)));
    }

    Classification {
        trigger,
        effects,
        is_may,
    }
}
