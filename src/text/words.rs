//! Word capabilities of a clause.
//!
//! Detectors never look at raw tokens; they ask a `Words` view questions
//! ("has DESTROY?", "first number?", "buff token?"). That keeps each
//! detector a one-line predicate that can be tested on its own.

use crate::effects::TargetKind;

use super::tokenizer::Token;

/// Read-only view over one clause.
#[derive(Clone, Copy, Debug)]
pub struct Words<'a> {
    tokens: &'a [Token],
}

impl<'a> Words<'a> {
    /// View a token slice.
    #[must_use]
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens }
    }

    /// All words, in order.
    pub fn iter(&self) -> impl Iterator<Item = &'a str> {
        self.tokens.iter().filter_map(Token::as_word)
    }

    /// Does the clause contain no words at all?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Is `word` present?
    #[must_use]
    pub fn has(&self, word: &str) -> bool {
        self.iter().any(|w| w == word)
    }

    /// Is any of `words` present?
    #[must_use]
    pub fn has_any(&self, words: &[&str]) -> bool {
        words.iter().any(|w| self.has(w))
    }

    /// The first integer literal: a number token or an all-digit word.
    #[must_use]
    pub fn first_number(&self) -> Option<i64> {
        self.tokens.iter().find_map(|token| match token {
            Token::Number(n) => Some(*n),
            Token::Word(w) if !w.is_empty() && w.bytes().all(|b| b.is_ascii_digit()) => {
                w.parse().ok()
            }
            _ => None,
        })
    }

    /// The first `±N/±M` word, as (power, toughness) deltas.
    #[must_use]
    pub fn buff(&self) -> Option<(i64, i64)> {
        self.iter().find_map(parse_buff)
    }

    /// Infer a target kind, or return `fallback`.
    ///
    /// Order: "each opponent", "any target", the object noun after
    /// TARGET, then a bare OPPONENT / PLAYER / CREATURE / SPELL.
    #[must_use]
    pub fn target_or(&self, fallback: TargetKind) -> TargetKind {
        if self.has("EACH") && self.has("OPPONENT") {
            return TargetKind::EachOpponent;
        }
        if self.has("ANY") && self.has("TARGET") {
            return TargetKind::AnyTarget;
        }
        if self.has("TARGET") {
            let after_target = self.iter().skip_while(|w| *w != "TARGET").find_map(object_noun);
            let anywhere = || {
                ["CREATURE", "PLAYER", "OPPONENT", "PERMANENT", "SPELL"]
                    .into_iter()
                    .filter(|noun| self.has(noun))
                    .find_map(object_noun)
            };
            if let Some(kind) = after_target.or_else(anywhere) {
                return kind;
            }
        }

        [
            ("OPPONENT", TargetKind::Opponent),
            ("PLAYER", TargetKind::Player),
            ("CREATURE", TargetKind::Creature),
            ("SPELL", TargetKind::Spell),
        ]
        .into_iter()
        .find(|(word, _)| self.has(word))
        .map_or(fallback, |(_, kind)| kind)
    }
}

fn object_noun(word: &str) -> Option<TargetKind> {
    match word {
        "CREATURE" => Some(TargetKind::Creature),
        "PLAYER" => Some(TargetKind::Player),
        "OPPONENT" => Some(TargetKind::Opponent),
        "PERMANENT" => Some(TargetKind::Permanent),
        "SPELL" => Some(TargetKind::Spell),
        _ => None,
    }
}

/// Parse one optionally signed integer, allowing a single leading `+`.
/// Values outside `-i64::MAX..=i64::MAX` are rejected so every delta
/// can be negated.
fn signed(part: &str) -> Option<i64> {
    let part = part.strip_prefix('+').unwrap_or(part);
    let digits = part.strip_prefix('-').unwrap_or(part);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse::<i64>().ok().filter(|n| n.checked_neg().is_some())
}

/// Parse a buff word like "+2/+2", "-1/-1" or "+3/0".
///
/// ```
/// use ccg_stack::text::parse_buff;
///
/// assert_eq!(parse_buff("+2/-1"), Some((2, -1)));
/// assert_eq!(parse_buff("1/1"), Some((1, 1)));
/// assert_eq!(parse_buff("2/x"), None);
/// ```
#[must_use]
pub fn parse_buff(word: &str) -> Option<(i64, i64)> {
    let (power, toughness) = word.split_once('/')?;
    Some((signed(power)?, signed(toughness)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::tokenize;

    fn target(text: &str, fallback: TargetKind) -> TargetKind {
        let tokens = tokenize(text);
        Words::new(&tokens).target_or(fallback)
    }

    #[test]
    fn test_has_and_numbers() {
        let tokens = tokenize("deals 3 damage to target creature");
        let words = Words::new(&tokens);
        assert!(words.has("DEALS"));
        assert!(words.has_any(&["DEAL", "DEALS"]));
        assert!(!words.has("deals"));
        assert_eq!(words.first_number(), Some(3));
        assert!(!words.is_empty());
    }

    #[test]
    fn test_first_number_absent() {
        let tokens = tokenize("draw a card");
        assert_eq!(Words::new(&tokens).first_number(), None);
        let tokens = tokenize("");
        assert!(Words::new(&tokens).is_empty());
    }

    #[test]
    fn test_buff_parsing() {
        assert_eq!(parse_buff("+2/+2"), Some((2, 2)));
        assert_eq!(parse_buff("-1/-1"), Some((-1, -1)));
        assert_eq!(parse_buff("+0/+3"), Some((0, 3)));
        assert_eq!(parse_buff("++1/+1"), None);
        assert_eq!(parse_buff("+/+"), None);
        assert_eq!(parse_buff("1/1/1"), None);
        assert_eq!(parse_buff("AND/OR"), None);
    }

    #[test]
    fn test_buff_bounds() {
        assert_eq!(parse_buff("-9223372036854775808/+1"), None);
        assert_eq!(parse_buff("+9223372036854775808/+1"), None);
        assert_eq!(
            parse_buff("-9223372036854775807/+9223372036854775807"),
            Some((-i64::MAX, i64::MAX))
        );
    }

    #[test]
    fn test_target_priority() {
        assert_eq!(target("each opponent loses 2 life", TargetKind::None), TargetKind::EachOpponent);
        assert_eq!(target("3 damage to any target", TargetKind::None), TargetKind::AnyTarget);
        assert_eq!(target("destroy target creature", TargetKind::None), TargetKind::Creature);
        assert_eq!(target("return target permanent", TargetKind::None), TargetKind::Permanent);
        assert_eq!(target("target player loses 2 life", TargetKind::None), TargetKind::Player);
        assert_eq!(target("you lose 2 life", TargetKind::Opponent), TargetKind::Opponent);
        assert_eq!(target("destroy it", TargetKind::Creature), TargetKind::Creature);
    }

    #[test]
    fn test_noun_after_target_wins() {
        assert_eq!(
            target("creature deals damage to target player", TargetKind::None),
            TargetKind::Player
        );
        assert_eq!(
            target("creature spell target", TargetKind::None),
            TargetKind::Creature
        );
    }

    #[test]
    fn test_bare_keywords() {
        assert_eq!(target("an opponent discards", TargetKind::None), TargetKind::Opponent);
        assert_eq!(target("a creature", TargetKind::None), TargetKind::Creature);
        assert_eq!(target("nothing here", TargetKind::Spell), TargetKind::Spell);
    }
}
